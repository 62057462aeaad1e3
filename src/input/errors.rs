use thiserror::Error;

/// Errors that can occur while reading a calculator key from text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Input cannot be empty")]
    EmptyInput,
    #[error("Invalid variable name: {0}")]
    InvalidVariableName(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unrecognized input: {0}")]
    UnrecognizedInput(String),
}
