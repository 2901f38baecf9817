use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Arithmetic on absolute temperatures that [`uom`] does not provide.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] does not
/// produce a [`TemperatureInterval`] (see
/// [#380](https://github.com/iliekturtles/uom/issues/380)), and averaging two
/// absolute temperatures is not expressible without going through raw values.
pub trait TemperatureArithmetic {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns the arithmetic mean of `self` and `other`.
    fn midpoint(self, other: Self) -> Self;
}

impl TemperatureArithmetic for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.get::<kelvin>() - other.get::<kelvin>())
    }

    fn midpoint(self, other: Self) -> Self {
        ThermodynamicTemperature::new::<kelvin>(0.5 * (self.get::<kelvin>() + other.get::<kelvin>()))
    }
}
