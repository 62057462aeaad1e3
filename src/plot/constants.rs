// Default sampling window for graphing
pub const DEFAULT_X_MIN: f64 = -10.0;
pub const DEFAULT_X_MAX: f64 = 10.0;
pub const DEFAULT_SAMPLES: usize = 201;
pub const MIN_SAMPLES: usize = 2;
