use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P3, Z0},
};

/// Area-specific thermal resistance, m²·K/W in SI.
///
/// Dimensionally the inverse of a heat transfer coefficient. Used for fouling
/// factors and the tube wall resistance.
pub type FoulingResistance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Constructors and accessors for [`FoulingResistance`].
///
/// [`uom`] only generates unit constructors for its built-in quantities, so
/// this trait provides the single SI unit this crate needs.
pub trait FoulingResistanceExt {
    /// Creates a resistance from a value in m²·K/W.
    fn from_square_meter_kelvin_per_watt(value: f64) -> Self;

    /// Returns the resistance in m²·K/W.
    fn square_meter_kelvin_per_watt(&self) -> f64;
}

impl FoulingResistanceExt for FoulingResistance {
    fn from_square_meter_kelvin_per_watt(value: f64) -> Self {
        Quantity {
            dimension: PhantomData,
            units: PhantomData,
            value,
        }
    }

    fn square_meter_kelvin_per_watt(&self) -> f64 {
        self.value
    }
}
