use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

use crate::{
    models::thermal::shell_and_tube::core::DomainError,
    support::constraint::{StrictlyPositive, UnitIntervalLowerOpen},
};

/// Settings for the fixed-point iteration on the overall coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceConfig {
    /// First trial overall coefficient.
    pub initial_u: HeatTransfer,

    /// Iteration cap; reaching it rejects the configuration.
    pub max_iterations: usize,

    /// Relative change in U below which the iteration stops.
    pub relative_tolerance: f64,

    /// Weight of the calculated U in the next trial, in `(0, 1]`.
    pub damping: f64,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            initial_u: HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0),
            max_iterations: 10,
            relative_tolerance: 0.05,
            damping: 0.5,
        }
    }
}

impl ConvergenceConfig {
    /// Checks that the trial coefficient, tolerance, and damping are usable.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConvergenceSetting`] if `initial_u` or
    /// `relative_tolerance` is not strictly positive, or `damping` is not in
    /// `(0, 1]`.
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |setting, value| DomainError::InvalidConvergenceSetting { setting, value };

        let initial_u = self.initial_u.get::<watt_per_square_meter_kelvin>();
        StrictlyPositive::new(initial_u).map_err(|_| invalid("initial_u", initial_u))?;
        StrictlyPositive::new(self.relative_tolerance)
            .map_err(|_| invalid("relative_tolerance", self.relative_tolerance))?;
        UnitIntervalLowerOpen::new(self.damping).map_err(|_| invalid("damping", self.damping))?;

        Ok(())
    }
}
