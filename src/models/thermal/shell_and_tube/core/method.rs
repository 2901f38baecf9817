//! Heat-transfer and pressure-drop estimation methods.
//!
//! A method turns a candidate [`HxGeometry`] and the stream on one side into
//! a film coefficient or a pressure drop. Methods that cannot produce a value
//! report [`Estimate::Unavailable`] instead of failing, so the search stays
//! exercisable while correlations are incomplete.

mod kern;

pub use kern::Kern;

use uom::si::f64::{DynamicViscosity, HeatTransfer, MassRate, Pressure};

use crate::support::properties::FluidProperties;

use super::HxGeometry;

/// Result of a correlation that may not be implemented or applicable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate<T> {
    Value(T),
    Unavailable,
}

impl<T> Estimate<T> {
    /// Returns the value, or `default` along with `true` to record that a
    /// substitution happened.
    pub fn or_substitute(self, default: T) -> (T, bool) {
        match self {
            Self::Value(value) => (value, false),
            Self::Unavailable => (default, true),
        }
    }

    /// Returns `true` if this estimate holds a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// The stream flowing through one side of the exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideFlow {
    pub mass_flow: MassRate,

    /// Bulk properties at the stream's mean temperature.
    pub properties: FluidProperties,

    /// Viscosity at the wall temperature, for the `(μ/μ_w)^0.14` correction.
    ///
    /// `None` applies no correction.
    pub wall_viscosity: Option<DynamicViscosity>,
}

/// A pluggable strategy for film coefficients and pressure drops.
pub trait EstimationMethod {
    /// Shell-side film coefficient, referred to the outside tube surface.
    fn shell_heat_transfer(&self, geometry: &HxGeometry, flow: &SideFlow)
    -> Estimate<HeatTransfer>;

    /// Tube-side film coefficient, referred to the inside tube surface.
    fn tube_heat_transfer(&self, geometry: &HxGeometry, flow: &SideFlow) -> Estimate<HeatTransfer>;

    /// Shell-side pressure drop.
    fn shell_pressure_drop(&self, geometry: &HxGeometry, flow: &SideFlow) -> Estimate<Pressure>;

    /// Tube-side pressure drop.
    fn tube_pressure_drop(&self, geometry: &HxGeometry, flow: &SideFlow) -> Estimate<Pressure>;
}

/// Bell-Delaware method.
///
/// Every estimate is currently [`Estimate::Unavailable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BellDelaware;

/// Tinker stream analysis method.
///
/// Every estimate is currently [`Estimate::Unavailable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamAnalysis;

macro_rules! unavailable_method {
    ($method:ty) => {
        impl EstimationMethod for $method {
            fn shell_heat_transfer(&self, _: &HxGeometry, _: &SideFlow) -> Estimate<HeatTransfer> {
                Estimate::Unavailable
            }

            fn tube_heat_transfer(&self, _: &HxGeometry, _: &SideFlow) -> Estimate<HeatTransfer> {
                Estimate::Unavailable
            }

            fn shell_pressure_drop(&self, _: &HxGeometry, _: &SideFlow) -> Estimate<Pressure> {
                Estimate::Unavailable
            }

            fn tube_pressure_drop(&self, _: &HxGeometry, _: &SideFlow) -> Estimate<Pressure> {
                Estimate::Unavailable
            }
        }
    };
}

unavailable_method!(BellDelaware);
unavailable_method!(StreamAnalysis);
