use crate::models::thermal::shell_and_tube::core::{
    ConfigurationSpace, ConvergenceConfig, CorrectionMethod, EvaluationDefaults,
    geometry::DEFAULT_BAFFLE_CUT,
};

/// Configuration for a sizing search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Configurations to try, in enumeration order.
    pub space: ConfigurationSpace,

    /// LMTD correction strategy.
    pub correction: CorrectionMethod,

    pub convergence: ConvergenceConfig,

    /// Values substituted for unavailable estimates.
    pub evaluation: EvaluationDefaults,

    /// Baffle cut as a fraction of shell diameter, in `(0, 1)`.
    pub baffle_cut: f64,

    /// Allowed relative mismatch between hot and cold duties when both
    /// flows are specified.
    pub energy_balance_tolerance: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            space: ConfigurationSpace::default(),
            correction: CorrectionMethod::default(),
            convergence: ConvergenceConfig::default(),
            evaluation: EvaluationDefaults::default(),
            baffle_cut: DEFAULT_BAFFLE_CUT,
            energy_balance_tolerance: 0.01,
        }
    }
}
