//! Extensions to [`uom`].
//!
//! Every physical quantity in this crate is a [`uom`] quantity. This module
//! fills the gaps that matter for exchanger sizing.
//!
//! ## Temperature differences
//!
//! [`TemperatureArithmetic::minus`] subtracts one absolute temperature from
//! another and yields a [`TemperatureInterval`], which is what terminal
//! temperature differences and stream temperature changes are.
//!
//! ```
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//! use twine_hx_design::support::units::TemperatureArithmetic;
//!
//! let hot_in = ThermodynamicTemperature::new::<kelvin>(373.15);
//! let cold_out = ThermodynamicTemperature::new::<kelvin>(313.15);
//! let approach = hot_in.minus(cold_out);
//! assert!((approach.get::<delta_kelvin>() - 60.0).abs() < 1e-9);
//! ```
//!
//! ## Fouling resistance
//!
//! [`uom`] has no quantity for area-specific thermal resistance (m²·K/W), so
//! [`FoulingResistance`] is defined here as the inverse dimension of
//! [`HeatTransfer`](uom::si::f64::HeatTransfer).
//!
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval

mod fouling;
mod temperature_arithmetic;

pub use fouling::{FoulingResistance, FoulingResistanceExt};
pub use temperature_arithmetic::TemperatureArithmetic;
