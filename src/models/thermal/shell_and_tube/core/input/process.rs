use uom::si::f64::{MassRate, Pressure, ThermodynamicTemperature};

use crate::{
    models::thermal::shell_and_tube::core::DomainError,
    support::{
        constraint::NonNegative,
        units::{FoulingResistance, FoulingResistanceExt, TemperatureArithmetic},
    },
};

/// Role of a physical stream in the exchanger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamRole {
    Hot,
    Cold,
}

/// Fixed process conditions for one stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamConditions {
    /// Mass flow rate.
    ///
    /// `None` means the flow is back-solved from the duty balance.
    pub mass_flow: Option<MassRate>,

    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_temperature: ThermodynamicTemperature,
    pub inlet_pressure: Pressure,

    /// Maximum allowable pressure drop through the exchanger.
    pub max_pressure_drop: Pressure,

    /// Fouling resistance on the surface this stream wets.
    pub fouling: FoulingResistance,
}

impl StreamConditions {
    /// Representative temperature for property evaluation.
    #[must_use]
    pub fn mean_temperature(&self) -> ThermodynamicTemperature {
        self.inlet_temperature.midpoint(self.outlet_temperature)
    }

    fn validate(&self, stream: StreamRole) -> Result<(), DomainError> {
        NonNegative::new(self.fouling.square_meter_kelvin_per_watt())
            .map_err(|_| DomainError::NegativeFouling { stream })?;
        NonNegative::new(self.max_pressure_drop)
            .map_err(|_| DomainError::NegativePressureDropLimit { stream })?;
        Ok(())
    }
}

/// Fixed process conditions for both streams, keyed by stream role.
///
/// Shell and tube assignment is a design decision made separately, so
/// every quantity here follows the physical stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessConditions {
    pub hot: StreamConditions,
    pub cold: StreamConditions,
}

impl ProcessConditions {
    /// Returns the conditions for the stream with the given role.
    #[must_use]
    pub fn stream(&self, role: StreamRole) -> &StreamConditions {
        match role {
            StreamRole::Hot => &self.hot,
            StreamRole::Cold => &self.cold,
        }
    }

    /// Checks the per-stream limits that do not depend on fluid properties.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] for negative fouling or pressure-drop limits.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.hot.validate(StreamRole::Hot)?;
        self.cold.validate(StreamRole::Cold)
    }
}
