//! Target duty and base log-mean temperature difference.
//!
//! Both values are shared by every configuration in a search, so anything
//! that makes them undefined is a [`DomainError`].

use uom::si::{
    f64::{MassRate, Power, TemperatureInterval, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    properties::FluidProperties,
    units::TemperatureArithmetic,
};

use super::{DomainError, ProcessConditions, StreamConditions, StreamRole};

/// Relative tolerance below which two terminal differences count as equal.
const EQUAL_TERMINAL_TOLERANCE: f64 = 1e-9;

/// Duty, driving force, and the fully resolved stream flows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutyAndDrivingForce {
    /// Required heat transfer rate from the hot stream to the cold stream.
    pub duty: Power,

    /// Counter-current log-mean temperature difference.
    pub lmtd: TemperatureInterval,

    /// Hot stream mass flow, specified or back-solved.
    pub hot_mass_flow: MassRate,

    /// Cold stream mass flow, specified or back-solved.
    pub cold_mass_flow: MassRate,
}

impl DutyAndDrivingForce {
    /// Resolves the duty and driving force for a set of process conditions.
    ///
    /// The stream with a specified flow defines the duty; when both are
    /// specified the hot stream does, and the cold stream's duty must agree
    /// within `energy_balance_tolerance` (relative). A missing flow is
    /// back-solved from `Q = m_dot·cp·ΔT`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the tolerance is negative or `NaN`, no
    /// flow is specified, a flow is not strictly positive, a stream's
    /// temperature change has the wrong sign, the energy balance does not
    /// close, or the LMTD is undefined.
    pub fn resolve(
        conditions: &ProcessConditions,
        hot: &FluidProperties,
        cold: &FluidProperties,
        energy_balance_tolerance: f64,
    ) -> Result<Self, DomainError> {
        NonNegative::new(energy_balance_tolerance).map_err(|_| {
            DomainError::InvalidEnergyBalanceTolerance {
                tolerance: energy_balance_tolerance,
            }
        })?;

        let hot_capacity = capacity_per_flow(&conditions.hot, hot, StreamRole::Hot)?;
        let cold_capacity = capacity_per_flow(&conditions.cold, cold, StreamRole::Cold)?;

        let hot_flow = specified_flow(&conditions.hot, StreamRole::Hot)?;
        let cold_flow = specified_flow(&conditions.cold, StreamRole::Cold)?;

        let (duty, hot_flow, cold_flow) = match (hot_flow, cold_flow) {
            (None, None) => return Err(DomainError::MissingFlow),
            (Some(m_hot), None) => {
                let q = m_hot * hot_capacity;
                (q, m_hot, q / cold_capacity)
            }
            (None, Some(m_cold)) => {
                let q = m_cold * cold_capacity;
                (q, q / hot_capacity, m_cold)
            }
            (Some(m_hot), Some(m_cold)) => {
                let q_hot = m_hot * hot_capacity;
                let q_cold = m_cold * cold_capacity;
                if (q_hot - q_cold).abs() > energy_balance_tolerance * q_hot {
                    return Err(DomainError::EnergyImbalance {
                        hot_duty: Power::new::<watt>(q_hot),
                        cold_duty: Power::new::<watt>(q_cold),
                    });
                }
                (q_hot, m_hot, m_cold)
            }
        };

        let lmtd = log_mean_temperature_difference(
            conditions.hot.inlet_temperature,
            conditions.hot.outlet_temperature,
            conditions.cold.inlet_temperature,
            conditions.cold.outlet_temperature,
        )?;

        Ok(Self {
            duty: Power::new::<watt>(duty),
            lmtd,
            hot_mass_flow: MassRate::new::<kilogram_per_second>(hot_flow),
            cold_mass_flow: MassRate::new::<kilogram_per_second>(cold_flow),
        })
    }

    /// Returns the resolved mass flow of the stream with the given role.
    #[must_use]
    pub fn mass_flow(&self, role: StreamRole) -> MassRate {
        match role {
            StreamRole::Hot => self.hot_mass_flow,
            StreamRole::Cold => self.cold_mass_flow,
        }
    }
}

/// Counter-current log-mean temperature difference.
///
/// ```text
/// LMTD = ((T_hot,in − T_cold,out) − (T_hot,out − T_cold,in))
///        / ln((T_hot,in − T_cold,out) / (T_hot,out − T_cold,in))
/// ```
///
/// # Errors
///
/// Returns [`DomainError::TemperatureCross`] if either terminal difference is
/// not strictly positive, and [`DomainError::ZeroDrivingForce`] if the two are
/// equal, where the expression degenerates to `0 / 0`.
pub fn log_mean_temperature_difference(
    hot_in: ThermodynamicTemperature,
    hot_out: ThermodynamicTemperature,
    cold_in: ThermodynamicTemperature,
    cold_out: ThermodynamicTemperature,
) -> Result<TemperatureInterval, DomainError> {
    let hot_end = hot_in.minus(cold_out);
    let cold_end = hot_out.minus(cold_in);

    let dt_1 = hot_end.get::<delta_kelvin>();
    let dt_2 = cold_end.get::<delta_kelvin>();

    if StrictlyPositive::new(dt_1).is_err() || StrictlyPositive::new(dt_2).is_err() {
        return Err(DomainError::TemperatureCross { hot_end, cold_end });
    }

    if (dt_1 - dt_2).abs() <= EQUAL_TERMINAL_TOLERANCE * dt_1.max(dt_2) {
        return Err(DomainError::ZeroDrivingForce { delta_t: hot_end });
    }

    Ok(TemperatureInterval::new::<delta_kelvin>(
        (dt_1 - dt_2) / (dt_1 / dt_2).ln(),
    ))
}

/// Heat absorbed or released per unit mass flow, `cp·ΔT` in J/kg.
fn capacity_per_flow(
    stream: &StreamConditions,
    properties: &FluidProperties,
    role: StreamRole,
) -> Result<f64, DomainError> {
    let delta_t = match role {
        StreamRole::Hot => stream.inlet_temperature.minus(stream.outlet_temperature),
        StreamRole::Cold => stream.outlet_temperature.minus(stream.inlet_temperature),
    };

    let dt = delta_t.get::<delta_kelvin>();
    if StrictlyPositive::new(dt).is_err() {
        return Err(DomainError::NonPositiveDuty {
            stream: role,
            delta_t,
        });
    }

    Ok(properties.cp().get::<joule_per_kilogram_kelvin>() * dt)
}

/// Returns the specified flow in kg/s, if any.
fn specified_flow(stream: &StreamConditions, role: StreamRole) -> Result<Option<f64>, DomainError> {
    stream
        .mass_flow
        .map(|mass_flow| {
            StrictlyPositive::new(mass_flow)
                .map(|m| m.into_inner().get::<kilogram_per_second>())
                .map_err(|_| DomainError::NonPositiveFlow {
                    stream: role,
                    mass_flow,
                })
        })
        .transpose()
}
