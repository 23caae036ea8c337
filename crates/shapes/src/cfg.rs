//! Formatting and comparison defaults.
//!
//! Policy
//! - Defaults are fixed constants; `EngineCfg` exists for callers (the CLI)
//!   that want a different precision or a tie tolerance per call.

/// Decimal digits used by `engine::describe`.
pub const DESCRIBE_PRECISION: usize = 4;
/// Largest precision `describe_with` honours; enough digits to round-trip an `f64`.
pub const MAX_DESCRIBE_PRECISION: usize = 17;

/// Upper bound on dimensions drawn by the sampler; keeps the uniform range finite.
pub(crate) const SAMPLE_DIM_MAX: f64 = 1e12;
/// Lower bound used when a sampler config gives a non-positive minimum.
pub(crate) const SAMPLE_DIM_MIN: f64 = 1e-6;

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineCfg {
    /// Decimal digits of the area in `describe_with`, capped at `MAX_DESCRIBE_PRECISION`.
    pub describe_precision: usize,
    /// Absolute area difference below which `compare_with` reports a tie.
    pub tie_eps: f64,
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self {
            describe_precision: DESCRIBE_PRECISION,
            tie_eps: 0.0,
        }
    }
}
