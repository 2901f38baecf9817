//! Shell-and-tube heat exchanger sizing.
//!
//! This module provides a [`twine_core::Model`] implementation for
//! preliminary shell-and-tube sizing. The computational core is in the
//! internal `core` module; [`search`] can also be called directly.

pub(crate) mod core;

pub use self::core::{
    BAFFLE_SPACING_RATIO, BellDelaware, BundleSizer, Configuration, ConfigurationSpace,
    ConvergenceConfig, CorrectionMethod, DEFAULT_BAFFLE_CUT, Design, DesignInput, DomainError,
    DutyAndDrivingForce, Estimate, EstimationMethod, EvaluationDefaults, EvaluationFailure,
    EvaluationMetrics, Feasibility, HeadType, HxGeometry, Kern, PitchLayout, ProcessConditions,
    RejectedConfiguration, Rejection, Search, SearchConfig, Side, SideFlow, StandardShells,
    StreamAnalysis, StreamConditions, StreamRole, Substitutions, TubeGeometry, TubePitch,
    log_mean_temperature_difference, rank, search,
};

use twine_core::Model;

/// Sizes a shell-and-tube exchanger for fixed process conditions.
///
/// Each call runs a full search with the wrapped estimation method, bundle
/// sizer, and configuration.
#[derive(Debug, Clone, Default)]
pub struct ShellAndTubeSizing<Method, Sizer> {
    pub method: Method,
    pub sizer: Sizer,
    pub config: SearchConfig,
}

impl<Method, Sizer> ShellAndTubeSizing<Method, Sizer> {
    /// Creates a sizing model with the default [`SearchConfig`].
    pub fn new(method: Method, sizer: Sizer) -> Self {
        Self {
            method,
            sizer,
            config: SearchConfig::default(),
        }
    }

    /// Replaces the search configuration.
    #[must_use]
    pub fn with_config(self, config: SearchConfig) -> Self {
        Self { config, ..self }
    }
}

impl<Method, Sizer> Model for ShellAndTubeSizing<Method, Sizer>
where
    Method: EstimationMethod + Sync,
    Sizer: BundleSizer + Sync,
{
    type Input = DesignInput;
    type Output = Search;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        search(input, &self.method, &self.sizer, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

    use crate::models::thermal::shell_and_tube::core::test_support::design_input;

    #[test]
    fn model_call_matches_direct_search() {
        let model = ShellAndTubeSizing::new(Kern, StandardShells::default());

        let via_model = model.call(&design_input()).unwrap();
        let direct = search(
            &design_input(),
            &Kern,
            &StandardShells::default(),
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(via_model, direct);
        assert!(!via_model.designs.is_empty());
    }

    #[test]
    fn restricted_space_limits_results() {
        let model = ShellAndTubeSizing::new(Kern, StandardShells::default()).with_config(
            SearchConfig {
                space: ConfigurationSpace {
                    head_types: vec![HeadType::B],
                    shell_passes: vec![1],
                    tube_passes: vec![1, 2],
                },
                ..SearchConfig::default()
            },
        );

        let result = model.call(&design_input()).unwrap();
        assert_eq!(result.designs.len() + result.rejections.len(), 2);
        assert!(
            result
                .designs
                .iter()
                .all(|d| d.configuration.head_type == HeadType::B)
        );
    }

    #[test]
    fn temperature_cross_is_an_error() {
        let mut input = design_input();
        input.conditions.cold.outlet_temperature = ThermodynamicTemperature::new::<kelvin>(380.0);

        let model = ShellAndTubeSizing::new(Kern, StandardShells::default());
        assert!(matches!(
            model.call(&input),
            Err(DomainError::TemperatureCross { .. })
        ));
    }
}
