use log::{debug, info};
use rayon::prelude::*;

use crate::brain::CalculatorBrain;
use crate::plot::constants::{DEFAULT_SAMPLES, DEFAULT_X_MAX, DEFAULT_X_MIN, MIN_SAMPLES};
use crate::plot::errors::PlotError;

/// Configuration for sampling a graph
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub samples: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl PlotConfig {
    /// # Errors
    ///
    /// Returns an error if the range is empty or not finite, or if fewer than two samples are requested.
    pub fn validate(&self) -> Result<(), PlotError> {
        if !self.x_min.is_finite() || !self.x_max.is_finite() || self.x_min >= self.x_max {
            return Err(PlotError::InvalidRange {
                x_min: self.x_min,
                x_max: self.x_max,
            });
        }
        if self.samples < MIN_SAMPLES {
            return Err(PlotError::TooFewSamples {
                samples: self.samples,
                minimum: MIN_SAMPLES,
            });
        }
        Ok(())
    }

    fn x_at(&self, index: usize) -> f64 {
        let step = (self.x_max - self.x_min) / (self.samples - 1) as f64;
        self.x_min + step * index as f64
    }
}

/// One sampled point; `y` is absent where the expression did not resolve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: Option<f64>,
}

/// Evaluate the brain's expression with `variable` bound to evenly spaced x values.
///
/// The brain and its variable table are left untouched; each sample gets its own
/// copy of the table with `variable` overridden. Points come back in ascending x.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, if the expression is pending,
/// or if it never references `variable`.
pub fn sample(
    brain: &CalculatorBrain,
    variable: &str,
    config: &PlotConfig,
) -> Result<Vec<Point>, PlotError> {
    config.validate()?;

    if !brain.uses_variable(variable) {
        return Err(PlotError::MissingVariable(variable.to_string()));
    }
    if brain.result_is_pending() {
        return Err(PlotError::PendingExpression);
    }

    info!(
        "Sampling '{}' over [{}, {}] with {} points",
        brain.evaluate().description,
        config.x_min,
        config.x_max,
        config.samples
    );

    let variables = brain.variables();
    let points: Vec<Point> = (0..config.samples)
        .into_par_iter()
        .map(|index| {
            let x = config.x_at(index);
            let bound = variables.with(variable, x);
            Point {
                x,
                y: brain.evaluate_using(Some(&bound)).result,
            }
        })
        .collect();

    debug!(
        "Sampled {} points, {} finite",
        points.len(),
        points
            .iter()
            .filter(|p| p.y.is_some_and(f64::is_finite))
            .count()
    );
    Ok(points)
}
