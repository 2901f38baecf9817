//! Fixed-point sizing of a single configuration.
//!
//! A trial overall coefficient fixes the required area, the area fixes a
//! tube count and shell, and evaluating that geometry yields a new overall
//! coefficient. The loop repeats with damping until the coefficient settles.

mod config;

pub use config::ConvergenceConfig;

use std::f64::consts::PI;

use tracing::trace;
use uom::si::{
    f64::{Power, TemperatureInterval},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use super::{
    BundleSizer, Configuration, EstimationMethod, EvaluationDefaults, EvaluationMetrics,
    HxGeometry, Rejection, Sides, TubeGeometry, TubePitch, evaluate,
};

/// A converged, feasible design for one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Design {
    pub configuration: Configuration,
    pub geometry: HxGeometry,
    pub metrics: EvaluationMetrics,

    /// Iterations taken to converge.
    pub iterations: usize,

    /// F-correction applied to the log-mean temperature difference.
    pub correction_factor: f64,
}

/// Everything shared by the convergence of each configuration in a search.
#[derive(Debug)]
pub struct Converger<'a, M: ?Sized, S: ?Sized> {
    pub tubes: TubeGeometry,
    pub pitch: TubePitch,
    pub sides: Sides,
    pub duty: Power,
    pub lmtd: TemperatureInterval,
    pub baffle_cut: f64,
    pub method: &'a M,
    pub sizer: &'a S,
    pub convergence: &'a ConvergenceConfig,
    pub evaluation: &'a EvaluationDefaults,
}

impl<M, S> Converger<'_, M, S>
where
    M: EstimationMethod + ?Sized,
    S: BundleSizer + ?Sized,
{
    /// Sizes `configuration` with the given F-correction.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if no shell fits, the geometry cannot be
    /// evaluated, the converged design violates a limit, or the iteration
    /// cap is reached.
    pub fn converge(
        &self,
        configuration: Configuration,
        correction_factor: f64,
    ) -> Result<Design, Rejection> {
        let ConvergenceConfig {
            initial_u,
            max_iterations,
            relative_tolerance,
            damping,
        } = *self.convergence;

        let q = self.duty.get::<watt>();
        let mean_difference = self.lmtd * correction_factor;
        let dt = mean_difference.get::<delta_kelvin>();
        let area_per_tube = PI
            * self.tubes.outer_diameter().get::<meter>()
            * self.tubes.length().get::<meter>();

        let mut u_trial = initial_u.get::<watt_per_square_meter_kelvin>();
        let mut relative_error = f64::INFINITY;

        for iteration in 1..=max_iterations {
            let required_tubes = q / (u_trial * dt) / area_per_tube;

            let shell_diameter = self
                .sizer
                .shell_diameter(
                    required_tubes,
                    self.tubes.outer_diameter(),
                    &self.pitch,
                    configuration.tube_passes,
                )
                .ok_or(Rejection::NoShellFit {
                    required_tubes,
                    iteration,
                })?;

            let num_tubes = self.sizer.tube_count(
                shell_diameter,
                self.tubes.outer_diameter(),
                &self.pitch,
                configuration.tube_passes,
            );

            let geometry = HxGeometry::new(
                self.tubes,
                self.pitch,
                configuration,
                shell_diameter,
                num_tubes,
                self.baffle_cut,
            );

            let evaluation = evaluate(
                &geometry,
                &self.sides,
                self.method,
                self.duty,
                mean_difference,
                self.evaluation,
            )?;

            let u_calc = evaluation
                .metrics
                .u_design
                .get::<watt_per_square_meter_kelvin>();
            relative_error = (u_calc - u_trial).abs() / u_trial;

            trace!(
                %configuration,
                iteration,
                u_trial,
                u_calc,
                relative_error,
                num_tubes,
                shell_diameter_m = shell_diameter.get::<meter>(),
                "convergence step"
            );

            if relative_error < relative_tolerance {
                return if evaluation.feasibility.is_feasible() {
                    Ok(Design {
                        configuration,
                        geometry,
                        metrics: evaluation.metrics,
                        iterations: iteration,
                        correction_factor,
                    })
                } else {
                    Err(Rejection::Infeasible {
                        metrics: Box::new(evaluation.metrics),
                        feasibility: evaluation.feasibility,
                    })
                };
            }

            u_trial = (1.0 - damping) * u_trial + damping * u_calc;
        }

        Err(Rejection::NonConvergence {
            iterations: max_iterations,
            relative_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

    use crate::models::thermal::shell_and_tube::core::{
        EvaluationFailure, HeadType, Side,
        test_support::{ConstantMethod, GridBundle, NeverFits, converger},
    };

    fn one_two() -> Configuration {
        Configuration {
            head_type: HeadType::A,
            shell_passes: 1,
            tube_passes: 2,
        }
    }

    #[test]
    fn constant_coefficients_converge_feasibly() {
        let method = ConstantMethod::new(2000.0, 1000.0);
        let convergence = ConvergenceConfig::default();
        let evaluation = EvaluationDefaults::default();
        let converger = converger(&method, &GridBundle, &convergence, &evaluation);

        let design = converger.converge(one_two(), 0.9).unwrap();

        assert_eq!(design.configuration, one_two());
        assert!(design.iterations > 1);
        assert!(design.metrics.provided_area >= design.metrics.required_area);
        assert_relative_eq!(
            design.geometry.baffle_spacing().get::<meter>(),
            0.4 * design.geometry.shell_diameter().get::<meter>()
        );
        assert_relative_eq!(design.correction_factor, 0.9);
    }

    #[test]
    fn starting_at_the_answer_converges_immediately() {
        let method = ConstantMethod::new(2000.0, 1000.0);
        let evaluation = EvaluationDefaults::default();

        let ratio = 25.4 / 21.0;
        let u = 1.0 / (1.0 / 2000.0 + ratio / 2000.0 + 1.0e-4 + 2.0e-4 + 2.0e-4 * ratio);
        let convergence = ConvergenceConfig {
            initial_u: HeatTransfer::new::<watt_per_square_meter_kelvin>(u),
            ..ConvergenceConfig::default()
        };
        let converger = converger(&method, &GridBundle, &convergence, &evaluation);

        let design = converger.converge(one_two(), 1.0).unwrap();
        assert_eq!(design.iterations, 1);
    }

    #[test]
    fn no_shell_fit_on_first_iteration() {
        let method = ConstantMethod::new(2000.0, 1000.0);
        let convergence = ConvergenceConfig::default();
        let evaluation = EvaluationDefaults::default();
        let converger = converger(&method, &NeverFits, &convergence, &evaluation);

        let err = converger.converge(one_two(), 1.0).unwrap_err();
        assert!(matches!(err, Rejection::NoShellFit { iteration: 1, .. }));
    }

    #[test]
    fn pressure_limit_makes_design_infeasible() {
        let method = ConstantMethod::new(2000.0, 1.0e6);
        let convergence = ConvergenceConfig::default();
        let evaluation = EvaluationDefaults::default();
        let converger = converger(&method, &GridBundle, &convergence, &evaluation);

        let Err(Rejection::Infeasible { feasibility, .. }) = converger.converge(one_two(), 1.0)
        else {
            panic!("expected an infeasible rejection");
        };
        assert!(feasibility.area);
        assert!(!feasibility.shell_pressure_drop);
        assert!(!feasibility.tube_pressure_drop);
    }

    #[test]
    fn zero_iteration_cap_never_converges() {
        let method = ConstantMethod::new(2000.0, 1000.0);
        let convergence = ConvergenceConfig {
            max_iterations: 0,
            ..ConvergenceConfig::default()
        };
        let evaluation = EvaluationDefaults::default();
        let converger = converger(&method, &GridBundle, &convergence, &evaluation);

        let err = converger.converge(one_two(), 1.0).unwrap_err();
        assert!(matches!(err, Rejection::NonConvergence { iterations: 0, .. }));
    }

    #[test]
    fn evaluation_failure_is_a_rejection() {
        let method = ConstantMethod::new(-5.0, 1000.0);
        let convergence = ConvergenceConfig::default();
        let evaluation = EvaluationDefaults::default();
        let converger = converger(&method, &GridBundle, &convergence, &evaluation);

        let err = converger.converge(one_two(), 1.0).unwrap_err();
        assert!(matches!(
            err,
            Rejection::EvaluationFailure(EvaluationFailure::NonPositiveFilmCoefficient {
                side: Side::Shell,
                ..
            })
        ));
    }
}
