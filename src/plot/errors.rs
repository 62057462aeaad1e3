use thiserror::Error;

/// Errors that can occur while sampling an expression for graphing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("Invalid range: x_min={x_min}, x_max={x_max}")]
    InvalidRange { x_min: f64, x_max: f64 },
    #[error("At least {minimum} samples are needed, got {samples}")]
    TooFewSamples { samples: usize, minimum: usize },
    #[error("Expression is pending and cannot be graphed")]
    PendingExpression,
    #[error("Expression does not reference variable: {0}")]
    MissingVariable(String),
}
