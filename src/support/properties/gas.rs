use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, MolarMass, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    molar_mass::gram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{FluidProperties, PropertyError, PropertyModel, checked};

/// Correlation coefficients for a low-pressure gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasCoefficients {
    /// Aly–Lee heat capacity in J/(kmol·K):
    /// `cp = C1 + C2·((C3/T)/sinh(C3/T))² + C4·((C5/T)/cosh(C5/T))²`.
    pub cp: [f64; 5],

    /// Viscosity, `μ = A·T^B / (1 + C/T)` in Pa·s.
    pub mu: [f64; 3],

    /// Thermal conductivity, `k = A·T^B / (1 + C/T + D/T²)` in W/(m·K).
    pub k: [f64; 4],
}

/// A gas described by temperature-dependent correlations.
///
/// Gas density depends on pressure through an equation of state, which is
/// outside the scope of these correlations, so it is supplied directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gas {
    coefficients: GasCoefficients,
    molar_mass: MolarMass,
    density: MassDensity,
}

impl Gas {
    #[must_use]
    pub fn new(coefficients: GasCoefficients, molar_mass: MolarMass, density: MassDensity) -> Self {
        Self {
            coefficients,
            molar_mass,
            density,
        }
    }
}

impl PropertyModel for Gas {
    fn properties(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<FluidProperties, PropertyError> {
        let t = temperature.get::<kelvin>();
        let mw = self.molar_mass.get::<gram_per_mole>();
        let GasCoefficients { cp, mu, k } = self.coefficients;

        let sinh_term = (cp[2] / t) / (cp[2] / t).sinh();
        let cosh_term = (cp[4] / t) / (cp[4] / t).cosh();
        let cp_molar = cp[0] + cp[1] * sinh_term.powi(2) + cp[3] * cosh_term.powi(2);
        let cp = checked(
            "heat capacity",
            temperature,
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp_molar / mw),
        )?;

        let mu = checked(
            "viscosity",
            temperature,
            DynamicViscosity::new::<pascal_second>(mu[0] * t.powf(mu[1]) / (1.0 + mu[2] / t)),
        )?;

        let k = checked(
            "thermal conductivity",
            temperature,
            ThermalConductivity::new::<watt_per_meter_kelvin>(
                k[0] * t.powf(k[1]) / (1.0 + k[2] / t + k[3] / t.powi(2)),
            ),
        )?;

        let rho = checked("density", temperature, self.density)?;

        Ok(FluidProperties { cp, mu, k, rho })
    }
}
