//! Scalar fluid properties for exchanger sizing.
//!
//! Sizing evaluates each stream at one representative temperature, so the
//! only thing the sizing core consumes is a [`FluidProperties`] record per
//! stream. Producing that record is the job of a [`PropertyModel`]:
//!
//! - [`Liquid`]: temperature-dependent correlations for liquids
//! - [`Gas`]: temperature-dependent correlations for low-pressure gases
//! - [`FluidProperties`] itself: constant properties
//!
//! # Example
//!
//! ```
//! use twine_hx_design::support::properties::{FluidProperties, PropertyModel};
//! use uom::si::{
//!     dynamic_viscosity::pascal_second,
//!     f64::{
//!         DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity,
//!         ThermodynamicTemperature,
//!     },
//!     mass_density::kilogram_per_cubic_meter,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let water = FluidProperties::new(
//!     SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
//!     DynamicViscosity::new::<pascal_second>(5.0e-4),
//!     ThermalConductivity::new::<watt_per_meter_kelvin>(0.65),
//!     MassDensity::new::<kilogram_per_cubic_meter>(990.0),
//! )
//! .unwrap();
//!
//! let at_mean = water
//!     .properties(ThermodynamicTemperature::new::<kelvin>(348.15))
//!     .unwrap();
//! assert_eq!(at_mean, water);
//! ```

mod gas;
mod liquid;

use num_traits::Zero;
use thiserror::Error;
use uom::si::f64::{
    DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity,
    ThermodynamicTemperature,
};

use crate::support::constraint::{ConstraintError, ConstraintResult, StrictlyPositive};

pub use gas::{Gas, GasCoefficients};
pub use liquid::{Liquid, LiquidCoefficients};

/// Evaluates [`FluidProperties`] at a temperature.
///
/// Implementations are pure: the same temperature always yields the same
/// properties.
pub trait PropertyModel {
    /// Returns the fluid properties at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if any property is non-physical at
    /// `temperature` (for example, a correlation used outside its range).
    fn properties(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<FluidProperties, PropertyError>;
}

/// Errors that can occur while evaluating fluid properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// A correlation produced a non-positive or non-numeric value.
    #[error("{property} is non-physical at {temperature:?}")]
    NonPhysical {
        /// Name of the offending property.
        property: &'static str,
        /// Temperature at which the correlation was evaluated.
        temperature: ThermodynamicTemperature,
        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },
}

/// Scalar fluid properties on a mass basis.
///
/// Every property is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    cp: SpecificHeatCapacity,
    mu: DynamicViscosity,
    k: ThermalConductivity,
    rho: MassDensity,
}

impl FluidProperties {
    /// Constructs a validated property record.
    ///
    /// # Errors
    ///
    /// Returns an error if any property is not strictly positive.
    pub fn new(
        cp: SpecificHeatCapacity,
        mu: DynamicViscosity,
        k: ThermalConductivity,
        rho: MassDensity,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            cp: StrictlyPositive::new(cp)?.into_inner(),
            mu: StrictlyPositive::new(mu)?.into_inner(),
            k: StrictlyPositive::new(k)?.into_inner(),
            rho: StrictlyPositive::new(rho)?.into_inner(),
        })
    }

    /// Specific heat capacity.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }

    /// Dynamic viscosity.
    #[must_use]
    pub fn mu(&self) -> DynamicViscosity {
        self.mu
    }

    /// Thermal conductivity.
    #[must_use]
    pub fn k(&self) -> ThermalConductivity {
        self.k
    }

    /// Density.
    #[must_use]
    pub fn rho(&self) -> MassDensity {
        self.rho
    }
}

impl PropertyModel for FluidProperties {
    fn properties(
        &self,
        _temperature: ThermodynamicTemperature,
    ) -> Result<FluidProperties, PropertyError> {
        Ok(*self)
    }
}

/// Attaches the property name and temperature to a constraint check.
fn checked<T: PartialOrd + Zero>(
    property: &'static str,
    temperature: ThermodynamicTemperature,
    value: T,
) -> Result<T, PropertyError> {
    StrictlyPositive::new(value)
        .map(|value| value.into_inner())
        .map_err(|source| PropertyError::NonPhysical {
            property,
            temperature,
            source,
        })
}
