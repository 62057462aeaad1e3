//! Turning typed words into calculator key presses

mod errors;
mod parse;

pub use errors::InputError;
pub use parse::{Input, parse_input, parse_line, validate_variable_name};
