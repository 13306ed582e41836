/*!
# Rust Language Module

Source text in, statement and expression trees out. One line holds one
statement; the line number, if any, is split off first.

*/

pub type LineNumber = u32;

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use ident::Ident;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use parse::parse_expression;

#[cfg(test)]
mod tests;
