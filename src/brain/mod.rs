//! Calculator brain split into submodules

mod core;
mod display;
mod element;
mod errors;
mod eval;
pub mod registry;

pub use self::core::{BrainConfig, CalculatorBrain, ClearPolicy};
pub use display::format_number;
pub use element::{BinaryOperator, ExpressionElement, UnaryOperator};
pub use errors::BrainError;
pub use eval::{Evaluation, evaluate};
pub use registry::Operation;

#[cfg(test)]
mod tests;
