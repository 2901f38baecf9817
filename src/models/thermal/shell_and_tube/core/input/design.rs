use crate::support::properties::{FluidProperties, PropertyError, PropertyModel};

use super::{ProcessConditions, StreamRole, TubeGeometry, TubePitch};

/// Flow passage of the exchanger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Shell,
    Tube,
}

/// Everything the search needs besides its collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignInput {
    pub conditions: ProcessConditions,
    pub tubes: TubeGeometry,
    pub pitch: TubePitch,

    /// Hot stream properties at its mean temperature.
    pub hot: FluidProperties,

    /// Cold stream properties at its mean temperature.
    pub cold: FluidProperties,

    /// Passage occupied by the hot stream; the cold stream takes the other.
    pub hot_side: Side,
}

impl DesignInput {
    /// Builds an input by evaluating each stream's properties at its mean
    /// temperature.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if either model yields non-physical
    /// properties.
    pub fn from_property_models<H, C>(
        conditions: ProcessConditions,
        tubes: TubeGeometry,
        pitch: TubePitch,
        hot_model: &H,
        cold_model: &C,
        hot_side: Side,
    ) -> Result<Self, PropertyError>
    where
        H: PropertyModel + ?Sized,
        C: PropertyModel + ?Sized,
    {
        Ok(Self {
            hot: hot_model.properties(conditions.hot.mean_temperature())?,
            cold: cold_model.properties(conditions.cold.mean_temperature())?,
            conditions,
            tubes,
            pitch,
            hot_side,
        })
    }

    /// Returns the stream role occupying `side`.
    #[must_use]
    pub fn role_on(&self, side: Side) -> StreamRole {
        match (self.hot_side, side) {
            (Side::Shell, Side::Shell) | (Side::Tube, Side::Tube) => StreamRole::Hot,
            _ => StreamRole::Cold,
        }
    }

    /// Returns the properties of the stream with the given role.
    #[must_use]
    pub fn properties(&self, role: StreamRole) -> &FluidProperties {
        match role {
            StreamRole::Hot => &self.hot,
            StreamRole::Cold => &self.cold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::MolarMass, molar_mass::gram_per_mole, specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
    };

    use crate::{
        models::thermal::shell_and_tube::core::test_support::{conditions, design_input, tubes},
        support::properties::{Liquid, LiquidCoefficients},
    };

    #[test]
    fn roles_follow_hot_side() {
        let mut input = design_input();

        input.hot_side = Side::Shell;
        assert_eq!(input.role_on(Side::Shell), StreamRole::Hot);
        assert_eq!(input.role_on(Side::Tube), StreamRole::Cold);

        input.hot_side = Side::Tube;
        assert_eq!(input.role_on(Side::Shell), StreamRole::Cold);
        assert_eq!(input.role_on(Side::Tube), StreamRole::Hot);
        assert_eq!(input.properties(StreamRole::Cold), &input.cold);
    }

    #[test]
    fn properties_evaluated_at_mean_temperature() {
        // Heat capacity linear in temperature, J/(kmol·K), so the mean
        // temperature can be read back from cp.
        let liquid = Liquid::new(
            LiquidCoefficients {
                cp: [0.0, 100.0, 0.0, 0.0, 0.0],
                mu: [1.0e-5, 1000.0],
                k: [0.6, 0.0],
                rho: [5.459, 0.30542, 647.13, 0.081],
            },
            MolarMass::new::<gram_per_mole>(18.015),
        );

        let input = DesignInput::from_property_models(
            conditions(),
            tubes(),
            TubePitch::default(),
            &liquid,
            &liquid,
            Side::Tube,
        )
        .unwrap();

        let mean_hot = conditions().hot.mean_temperature().get::<kelvin>();
        let mean_cold = conditions().cold.mean_temperature().get::<kelvin>();
        assert_relative_eq!(
            input.hot.cp().get::<joule_per_kilogram_kelvin>(),
            100.0 * mean_hot / 18.015,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            input.cold.cp().get::<joule_per_kilogram_kelvin>(),
            100.0 * mean_cold / 18.015,
            max_relative = 1e-12
        );
        assert_eq!(input.role_on(Side::Tube), StreamRole::Hot);
    }
}
