//! # LINE BASIC
//!
//! An interpreter for classic line-numbered BASIC.
//!
//! The library splits in two. [`lang`] turns source text into lines and
//! statements. [`mach`] holds the program listing and runs it one
//! statement at a time with FOR loops, GOSUB calls, DATA and user
//! functions. Everything that touches the outside world goes through the
//! device traits in [`mach::device`], so a [`mach::Runtime`] can be driven
//! from a terminal, a test or anything else.
//!
//! ```
//! use basic::mach::Runtime;
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("10 PRINT \"HELLO\"");
//! runtime.enter("RUN");
//! ```
//!
//! The `basic` executable adds a line editor, Ctrl-C handling and
//! logging on top.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
