use crate::limit::InfinityPolicy;

/// Tuning knobs for the whole pipeline.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Config {
    pub solver: SolverConfig,
    pub fraction: FractionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Step `h` of the symmetric difference quotient.
    pub step: f64,
    /// Magnitudes below this count as zero when checking for 0/0.
    pub zero_threshold: f64,
    pub infinity: InfinityPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            step: 1e-6,
            zero_threshold: f64::EPSILON,
            infinity: InfinityPolicy::Unchecked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionConfig {
    /// Maximum distance of `remainder * denominator` from an integer.
    pub tolerance: f64,
    /// Denominators are searched in `2..max_denominator`.
    pub max_denominator: i64,
}

impl Default for FractionConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_denominator: 10_000,
        }
    }
}
