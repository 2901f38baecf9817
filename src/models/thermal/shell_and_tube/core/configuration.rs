//! The discrete space of mechanical configurations and its F-correction.

use std::fmt;

use uom::si::thermodynamic_temperature::kelvin;

use super::ProcessConditions;

/// TEMA front-end stationary head type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadType {
    /// Channel with removable cover.
    A,
    /// Bonnet (integral cover).
    B,
    /// Channel integral with tubesheet, removable cover.
    C,
    /// Channel integral with tubesheet, non-removable cover.
    N,
    /// Special high-pressure closure.
    D,
}

/// One point of the configuration space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    pub head_type: HeadType,
    pub shell_passes: u16,
    pub tube_passes: u16,
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {}-{}",
            self.head_type, self.shell_passes, self.tube_passes
        )
    }
}

/// Finite, ordered lists spanning the configuration space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSpace {
    pub head_types: Vec<HeadType>,
    pub shell_passes: Vec<u16>,
    pub tube_passes: Vec<u16>,
}

impl Default for ConfigurationSpace {
    fn default() -> Self {
        Self {
            head_types: vec![HeadType::A, HeadType::B],
            shell_passes: vec![1, 2],
            tube_passes: vec![1, 2, 4, 6, 8],
        }
    }
}

impl ConfigurationSpace {
    /// Yields the full cartesian product.
    ///
    /// Ordering is fixed: head type outermost, then shell passes, then tube
    /// passes. Entries are neither deduplicated nor filtered.
    pub fn configurations(&self) -> impl Iterator<Item = Configuration> + '_ {
        self.head_types.iter().flat_map(move |&head_type| {
            self.shell_passes.iter().flat_map(move |&shell_passes| {
                self.tube_passes.iter().map(move |&tube_passes| Configuration {
                    head_type,
                    shell_passes,
                    tube_passes,
                })
            })
        })
    }

    /// Number of configurations [`Self::configurations`] yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.head_types.len() * self.shell_passes.len() * self.tube_passes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How the log-mean temperature difference is corrected for multi-pass flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectionMethod {
    /// Two-case rule of thumb.
    ///
    /// 0.9 for one shell pass with two or more tube passes, 0.95 for two
    /// shell passes with four or more tube passes, otherwise 1.0.
    #[default]
    Heuristic,

    /// Closed-form F for `N` shell passes and an even tube-pass count,
    /// evaluated from the process temperatures.
    ///
    /// A single tube pass is treated as pure counter-current (F = 1).
    ClosedForm,
}

impl CorrectionMethod {
    /// Returns the F-correction for a configuration, or `None` if it is
    /// undefined (odd tube passes above one, or temperatures outside the
    /// closed form's feasible region).
    #[must_use]
    pub fn factor(
        &self,
        configuration: &Configuration,
        conditions: &ProcessConditions,
    ) -> Option<f64> {
        match self {
            Self::Heuristic => Some(heuristic_factor(configuration)),
            Self::ClosedForm => closed_form_factor(configuration, conditions),
        }
    }
}

fn heuristic_factor(configuration: &Configuration) -> f64 {
    match (configuration.shell_passes, configuration.tube_passes) {
        (1, t) if t >= 2 => 0.9,
        (2, t) if t >= 4 => 0.95,
        _ => 1.0,
    }
}

fn closed_form_factor(
    configuration: &Configuration,
    conditions: &ProcessConditions,
) -> Option<f64> {
    let Configuration {
        shell_passes,
        tube_passes,
        ..
    } = *configuration;

    if shell_passes == 0 {
        return None;
    }
    if tube_passes == 1 {
        return Some(1.0);
    }
    if tube_passes % 2 != 0 {
        return None;
    }

    let hot_in = conditions.hot.inlet_temperature.get::<kelvin>();
    let hot_out = conditions.hot.outlet_temperature.get::<kelvin>();
    let cold_in = conditions.cold.inlet_temperature.get::<kelvin>();
    let cold_out = conditions.cold.outlet_temperature.get::<kelvin>();

    let r = (hot_in - hot_out) / (cold_out - cold_in);
    let p = (cold_out - cold_in) / (hot_in - cold_in);
    let n = f64::from(shell_passes);

    // Effectiveness of a single shell in an N-shell series.
    let p_1 = if (r - 1.0).abs() < 1e-9 {
        p / (n - p * (n - 1.0))
    } else {
        let x = ((1.0 - r * p) / (1.0 - p)).powf(1.0 / n);
        (1.0 - x) / (r - x)
    };

    let s = r.hypot(1.0);
    let f = if (r - 1.0).abs() < 1e-9 {
        (s * p_1 / (1.0 - p_1)) / ((2.0 - p_1 * (2.0 - s)) / (2.0 - p_1 * (2.0 + s))).ln()
    } else {
        s * ((1.0 - p_1) / (1.0 - r * p_1)).ln()
            / ((r - 1.0)
                * ((2.0 - p_1 * (r + 1.0 - s)) / (2.0 - p_1 * (r + 1.0 + s))).ln())
    };

    (f.is_finite() && f > 0.0 && f <= 1.0 + 1e-9).then_some(f.min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::ThermodynamicTemperature;

    use crate::models::thermal::shell_and_tube::core::test_support::conditions;

    fn config(shell_passes: u16, tube_passes: u16) -> Configuration {
        Configuration {
            head_type: HeadType::A,
            shell_passes,
            tube_passes,
        }
    }

    #[test]
    fn default_space_order() {
        let space = ConfigurationSpace::default();
        let all: Vec<_> = space.configurations().collect();

        assert_eq!(all.len(), 20);
        assert_eq!(space.len(), 20);
        assert_eq!(all[0], config(1, 1));
        assert_eq!(all[4], config(1, 8));
        assert_eq!(all[5], config(2, 1));
        assert_eq!(
            all[10],
            Configuration {
                head_type: HeadType::B,
                shell_passes: 1,
                tube_passes: 1,
            }
        );
        assert_eq!(all[19].to_string(), "B 2-8");
    }

    #[test]
    fn duplicates_are_kept() {
        let space = ConfigurationSpace {
            head_types: vec![HeadType::A],
            shell_passes: vec![1, 1],
            tube_passes: vec![2],
        };
        assert_eq!(space.configurations().count(), 2);

        let empty = ConfigurationSpace {
            tube_passes: vec![],
            ..ConfigurationSpace::default()
        };
        assert!(empty.is_empty());
        assert_eq!(empty.configurations().count(), 0);
    }

    #[test]
    fn heuristic_cases() {
        let conditions = conditions();
        let f = |s, t| CorrectionMethod::Heuristic.factor(&config(s, t), &conditions);

        assert_eq!(f(1, 1), Some(1.0));
        assert_eq!(f(1, 2), Some(0.9));
        assert_eq!(f(1, 8), Some(0.9));
        assert_eq!(f(2, 2), Some(1.0));
        assert_eq!(f(2, 4), Some(0.95));
        assert_eq!(f(3, 6), Some(1.0));
    }

    #[test]
    fn closed_form_reference_values() {
        // R = 2.5, P = 0.25
        let conditions = conditions();
        let f = |s, t| CorrectionMethod::ClosedForm.factor(&config(s, t), &conditions);

        assert_relative_eq!(f(1, 2).unwrap(), 0.900_869_707, max_relative = 1e-8);
        assert_relative_eq!(f(1, 8).unwrap(), 0.900_869_707, max_relative = 1e-8);
        assert_relative_eq!(f(2, 4).unwrap(), 0.977_205_304, max_relative = 1e-8);
        assert_eq!(f(1, 1), Some(1.0));
        assert_eq!(f(1, 3), None);
    }

    #[test]
    fn closed_form_is_undefined_past_the_feasible_region() {
        // A deep temperature cross cannot be achieved in one shell.
        let mut conditions = conditions();
        conditions.hot.outlet_temperature = ThermodynamicTemperature::new::<kelvin>(303.15);
        conditions.cold.outlet_temperature = ThermodynamicTemperature::new::<kelvin>(363.15);

        assert_eq!(
            CorrectionMethod::ClosedForm.factor(&config(1, 2), &conditions),
            None
        );
    }
}
