//! Sampling the current expression as a function of one variable

mod ascii;
pub mod constants;
mod core;
mod errors;

pub use self::core::{PlotConfig, Point, sample};
pub use ascii::render_ascii;
pub use errors::PlotError;
