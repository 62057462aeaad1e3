use thiserror::Error;

/// Errors reported by the strict brain entry points
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrainError {
    #[error("Unknown operation symbol: {0}")]
    UnknownOperation(String),
    #[error("Variable has not been entered yet: {0}")]
    UnknownVariable(String),
}
