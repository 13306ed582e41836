/*!
## Rust Machine Module

This Rust module is the execution engine for BASIC. It stores the
program, evaluates expressions and runs statements one line at a time.

*/

mod data;
pub mod device;
mod eval;
mod function;
mod listing;
mod operation;
mod runtime;
mod stack;
mod val;
mod var;

pub use data::Data;
pub use device::Devices;
pub use eval::evaluate;
pub use eval::Evaluator;
pub use eval::UserFunction;
pub use eval::UserFunctions;
pub use function::Function;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Config;
pub use runtime::ControlAction;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
