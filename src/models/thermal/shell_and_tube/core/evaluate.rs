//! Overall coefficient, required area, and feasibility of one geometry.

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, Power, Pressure, TemperatureInterval},
    heat_transfer::watt_per_square_meter_kelvin,
    power::watt,
    pressure::pascal,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::units::{FoulingResistance, FoulingResistanceExt};

use super::{
    DesignInput, DutyAndDrivingForce, EstimationMethod, HxGeometry, Side, SideFlow,
};

/// The stream on one side, with the limits that travel with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideStream {
    pub flow: SideFlow,
    pub fouling: FoulingResistance,
    pub max_pressure_drop: Pressure,
}

/// Streams assigned to the shell and tube passages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sides {
    pub shell: SideStream,
    pub tube: SideStream,
}

impl Sides {
    /// Places each stream on the side chosen by `input.hot_side`.
    ///
    /// Flow, properties, fouling, and pressure-drop limit all follow the
    /// physical stream.
    #[must_use]
    pub fn assign(input: &DesignInput, driving_force: &DutyAndDrivingForce) -> Self {
        let stream_on = |side: Side| {
            let role = input.role_on(side);
            let conditions = input.conditions.stream(role);
            SideStream {
                flow: SideFlow {
                    mass_flow: driving_force.mass_flow(role),
                    properties: *input.properties(role),
                    wall_viscosity: None,
                },
                fouling: conditions.fouling,
                max_pressure_drop: conditions.max_pressure_drop,
            }
        };

        Self {
            shell: stream_on(Side::Shell),
            tube: stream_on(Side::Tube),
        }
    }
}

/// Values substituted when a method reports [`Estimate::Unavailable`].
///
/// [`Estimate::Unavailable`]: super::Estimate::Unavailable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationDefaults {
    pub heat_transfer: HeatTransfer,
    pub pressure_drop: Pressure,

    /// Tube wall conduction resistance, referred to the outside surface.
    pub wall_resistance: FoulingResistance,
}

impl Default for EvaluationDefaults {
    fn default() -> Self {
        Self {
            heat_transfer: HeatTransfer::new::<watt_per_square_meter_kelvin>(1000.0),
            pressure_drop: Pressure::new::<pascal>(1000.0),
            wall_resistance: FoulingResistance::from_square_meter_kelvin_per_watt(1.0e-4),
        }
    }
}

/// Records which estimates were replaced by a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Substitutions {
    pub shell_heat_transfer: bool,
    pub tube_heat_transfer: bool,
    pub shell_pressure_drop: bool,
    pub tube_pressure_drop: bool,
}

impl Substitutions {
    /// Returns `true` if any default was used.
    #[must_use]
    pub fn any(&self) -> bool {
        self.shell_heat_transfer
            || self.tube_heat_transfer
            || self.shell_pressure_drop
            || self.tube_pressure_drop
    }
}

/// Thermal-hydraulic performance of one geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationMetrics {
    /// Overall coefficient including fouling, on the outside surface.
    pub u_design: HeatTransfer,
    pub required_area: Area,
    pub provided_area: Area,
    pub shell_pressure_drop: Pressure,
    pub tube_pressure_drop: Pressure,
    pub shell_coefficient: HeatTransfer,
    pub tube_coefficient: HeatTransfer,
    pub substitutions: Substitutions,
}

/// Which design limits a geometry satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feasibility {
    pub area: bool,
    pub shell_pressure_drop: bool,
    pub tube_pressure_drop: bool,
}

impl Feasibility {
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.area && self.shell_pressure_drop && self.tube_pressure_drop
    }
}

/// A geometry that could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluationFailure {
    /// A film coefficient is zero, negative, or not finite.
    #[error("{side:?}-side film coefficient is not strictly positive: {value:?}")]
    NonPositiveFilmCoefficient { side: Side, value: HeatTransfer },

    /// The overall coefficient is zero, negative, or not finite.
    #[error("overall coefficient is not strictly positive: {value:?}")]
    NonPositiveOverallCoefficient { value: HeatTransfer },
}

/// Metrics and feasibility of one geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub metrics: EvaluationMetrics,
    pub feasibility: Feasibility,
}

/// Evaluates a geometry against the duty and corrected driving force.
///
/// ```text
/// 1/U_clean  = 1/h_o + (D_o/D_i)/h_i + R_wall
/// 1/U_design = 1/U_clean + R_f,shell + R_f,tube·(D_o/D_i)
/// A_req      = Q / (U_design·ΔT_mean)
/// ```
///
/// # Errors
///
/// Returns an [`EvaluationFailure`] if a film coefficient or the resulting
/// overall coefficient is not strictly positive and finite.
pub fn evaluate<M: EstimationMethod + ?Sized>(
    geometry: &HxGeometry,
    sides: &Sides,
    method: &M,
    duty: Power,
    mean_difference: TemperatureInterval,
    defaults: &EvaluationDefaults,
) -> Result<Evaluation, EvaluationFailure> {
    let (h_shell, shell_h_substituted) = method
        .shell_heat_transfer(geometry, &sides.shell.flow)
        .or_substitute(defaults.heat_transfer);
    let (h_tube, tube_h_substituted) = method
        .tube_heat_transfer(geometry, &sides.tube.flow)
        .or_substitute(defaults.heat_transfer);
    let (dp_shell, shell_dp_substituted) = method
        .shell_pressure_drop(geometry, &sides.shell.flow)
        .or_substitute(defaults.pressure_drop);
    let (dp_tube, tube_dp_substituted) = method
        .tube_pressure_drop(geometry, &sides.tube.flow)
        .or_substitute(defaults.pressure_drop);

    let h_o = film_coefficient(Side::Shell, h_shell)?;
    let h_i = film_coefficient(Side::Tube, h_tube)?;

    let ratio = geometry.tubes().diameter_ratio();
    let r_wall = defaults.wall_resistance.square_meter_kelvin_per_watt();
    let r_shell = sides.shell.fouling.square_meter_kelvin_per_watt();
    let r_tube = sides.tube.fouling.square_meter_kelvin_per_watt();

    let clean_resistance = 1.0 / h_o + ratio / h_i + r_wall;
    let u = 1.0 / (clean_resistance + r_shell + r_tube * ratio);
    let u_design = HeatTransfer::new::<watt_per_square_meter_kelvin>(u);
    if !(u.is_finite() && u > 0.0) {
        return Err(EvaluationFailure::NonPositiveOverallCoefficient { value: u_design });
    }

    let required_area = Area::new::<square_meter>(
        duty.get::<watt>() / (u * mean_difference.get::<delta_kelvin>()),
    );
    let provided_area = geometry.provided_area();

    let feasibility = Feasibility {
        area: provided_area >= required_area,
        shell_pressure_drop: dp_shell <= sides.shell.max_pressure_drop,
        tube_pressure_drop: dp_tube <= sides.tube.max_pressure_drop,
    };

    Ok(Evaluation {
        metrics: EvaluationMetrics {
            u_design,
            required_area,
            provided_area,
            shell_pressure_drop: dp_shell,
            tube_pressure_drop: dp_tube,
            shell_coefficient: h_shell,
            tube_coefficient: h_tube,
            substitutions: Substitutions {
                shell_heat_transfer: shell_h_substituted,
                tube_heat_transfer: tube_h_substituted,
                shell_pressure_drop: shell_dp_substituted,
                tube_pressure_drop: tube_dp_substituted,
            },
        },
        feasibility,
    })
}

fn film_coefficient(side: Side, value: HeatTransfer) -> Result<f64, EvaluationFailure> {
    let h = value.get::<watt_per_square_meter_kelvin>();
    if h.is_finite() && h > 0.0 {
        Ok(h)
    } else {
        Err(EvaluationFailure::NonPositiveFilmCoefficient { side, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass_rate::kilogram_per_second, pressure::kilopascal};

    use crate::models::thermal::shell_and_tube::core::{
        BellDelaware, StreamRole,
        test_support::{ConstantMethod, design_input, driving_force, geometry},
    };

    fn lmtd() -> TemperatureInterval {
        driving_force().lmtd
    }

    #[test]
    fn streams_follow_hot_side() {
        let mut input = design_input();
        let resolved = driving_force();

        let sides = Sides::assign(&input, &resolved);
        assert_relative_eq!(sides.shell.flow.mass_flow.get::<kilogram_per_second>(), 2.0);
        assert_eq!(sides.shell.max_pressure_drop, input.conditions.hot.max_pressure_drop);
        assert_eq!(sides.tube.flow.properties, input.cold);

        input.hot_side = Side::Tube;
        let swapped = Sides::assign(&input, &resolved);
        assert_eq!(swapped.tube, sides.shell);
        assert_eq!(swapped.shell, sides.tube);
        assert_eq!(
            swapped.shell.flow.mass_flow,
            resolved.mass_flow(StreamRole::Cold)
        );
    }

    #[test]
    fn overall_coefficient_from_resistances() {
        let input = design_input();
        let sides = Sides::assign(&input, &driving_force());
        let geometry = geometry(1, 2, 0.5, 150);
        let method = ConstantMethod::new(2000.0, 1000.0);

        let evaluation = evaluate(
            &geometry,
            &sides,
            &method,
            driving_force().duty,
            lmtd(),
            &EvaluationDefaults::default(),
        )
        .unwrap();

        let ratio = 25.4 / 21.0;
        let expected = 1.0 / (1.0 / 2000.0 + ratio / 2000.0 + 1.0e-4 + 2.0e-4 + 2.0e-4 * ratio);
        let metrics = evaluation.metrics;
        assert_relative_eq!(
            metrics.u_design.get::<watt_per_square_meter_kelvin>(),
            expected,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.required_area.get::<square_meter>(),
            418_000.0 / (expected * lmtd().get::<delta_kelvin>()),
            max_relative = 1e-12
        );
        assert!(!metrics.substitutions.any());
    }

    #[test]
    fn unavailable_estimates_use_defaults() {
        let sides = Sides::assign(&design_input(), &driving_force());
        let defaults = EvaluationDefaults::default();

        let evaluation = evaluate(
            &geometry(1, 2, 0.5, 150),
            &sides,
            &BellDelaware,
            driving_force().duty,
            lmtd(),
            &defaults,
        )
        .unwrap();

        let metrics = evaluation.metrics;
        assert_eq!(metrics.shell_coefficient, defaults.heat_transfer);
        assert_eq!(metrics.tube_pressure_drop, defaults.pressure_drop);
        assert_eq!(
            metrics.substitutions,
            Substitutions {
                shell_heat_transfer: true,
                tube_heat_transfer: true,
                shell_pressure_drop: true,
                tube_pressure_drop: true,
            }
        );
    }

    #[test]
    fn feasibility_checks_each_limit() {
        let mut input = design_input();
        input.conditions.cold.max_pressure_drop = Pressure::new::<kilopascal>(0.5);
        let sides = Sides::assign(&input, &driving_force());
        let method = ConstantMethod::new(2000.0, 1000.0);

        let small = evaluate(
            &geometry(1, 2, 0.3, 10),
            &sides,
            &method,
            driving_force().duty,
            lmtd(),
            &EvaluationDefaults::default(),
        )
        .unwrap();

        assert_eq!(
            small.feasibility,
            Feasibility {
                area: false,
                shell_pressure_drop: true,
                tube_pressure_drop: false,
            }
        );
        assert!(!small.feasibility.is_feasible());

        let large = evaluate(
            &geometry(1, 2, 1.0, 1000),
            &Sides::assign(&design_input(), &driving_force()),
            &method,
            driving_force().duty,
            lmtd(),
            &EvaluationDefaults::default(),
        )
        .unwrap();
        assert!(large.feasibility.is_feasible());
    }

    #[test]
    fn non_positive_film_coefficient_fails() {
        let sides = Sides::assign(&design_input(), &driving_force());
        let method = ConstantMethod::new(0.0, 1000.0);

        let err = evaluate(
            &geometry(1, 2, 0.5, 150),
            &sides,
            &method,
            driving_force().duty,
            lmtd(),
            &EvaluationDefaults::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            EvaluationFailure::NonPositiveFilmCoefficient {
                side: Side::Shell,
                ..
            }
        ));
    }
}
