use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, MolarMass, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    molar_mass::gram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{FluidProperties, PropertyError, PropertyModel, checked};

/// Correlation coefficients for a liquid.
///
/// Molar coefficients are on a kmol basis, so dividing by a molar mass in
/// kg/kmol (numerically equal to g/mol) gives mass-basis properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidCoefficients {
    /// Heat capacity polynomial, `cp = C1 + C2·T + C3·T² + C4·T³ + C5·T⁴` in J/(kmol·K).
    pub cp: [f64; 5],

    /// Viscosity, `μ = A·exp(B/T)` in Pa·s.
    pub mu: [f64; 2],

    /// Thermal conductivity, `k = A + B·T` in W/(m·K).
    pub k: [f64; 2],

    /// Rackett-form density, `ρ = C1 / C2^(1 + (1 − T/C3)^C4)` in kmol/m³.
    pub rho: [f64; 4],
}

/// A liquid described by temperature-dependent correlations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Liquid {
    coefficients: LiquidCoefficients,
    molar_mass: MolarMass,
}

impl Liquid {
    #[must_use]
    pub fn new(coefficients: LiquidCoefficients, molar_mass: MolarMass) -> Self {
        Self {
            coefficients,
            molar_mass,
        }
    }
}

impl PropertyModel for Liquid {
    fn properties(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<FluidProperties, PropertyError> {
        let t = temperature.get::<kelvin>();
        let mw = self.molar_mass.get::<gram_per_mole>();
        let LiquidCoefficients { cp, mu, k, rho } = self.coefficients;

        let cp_molar = cp[0] + cp[1] * t + cp[2] * t.powi(2) + cp[3] * t.powi(3) + cp[4] * t.powi(4);
        let cp = checked(
            "heat capacity",
            temperature,
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp_molar / mw),
        )?;

        let mu = checked(
            "viscosity",
            temperature,
            DynamicViscosity::new::<pascal_second>(mu[0] * (mu[1] / t).exp()),
        )?;

        let k = checked(
            "thermal conductivity",
            temperature,
            ThermalConductivity::new::<watt_per_meter_kelvin>(k[0] + k[1] * t),
        )?;

        let rho_molar = rho[0] / rho[1].powf(1.0 + (1.0 - t / rho[2]).powf(rho[3]));
        let rho = checked(
            "density",
            temperature,
            MassDensity::new::<kilogram_per_cubic_meter>(rho_molar * mw),
        )?;

        Ok(FluidProperties { cp, mu, k, rho })
    }
}
