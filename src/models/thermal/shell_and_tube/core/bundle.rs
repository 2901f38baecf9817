//! Mapping between tube counts and realizable shell diameters.

use uom::si::{
    f64::Length,
    length::{meter, millimeter},
};

use super::{PitchLayout, TubePitch};

/// Realizes a required tube count as a concrete shell.
pub trait BundleSizer {
    /// Returns the smallest realizable shell holding at least
    /// `required_tubes`, or `None` if no shell fits.
    fn shell_diameter(
        &self,
        required_tubes: f64,
        tube_od: Length,
        pitch: &TubePitch,
        tube_passes: u16,
    ) -> Option<Length>;

    /// Returns the number of tubes that fit in a shell.
    fn tube_count(
        &self,
        shell_diameter: Length,
        tube_od: Length,
        pitch: &TubePitch,
        tube_passes: u16,
    ) -> u32;
}

/// Standard shell inside diameters, in meters (8 in to 60 in).
const STANDARD_SHELLS: [f64; 22] = [
    0.203, 0.254, 0.305, 0.337, 0.387, 0.438, 0.489, 0.540, 0.591, 0.635, 0.686, 0.737, 0.787,
    0.838, 0.889, 0.940, 0.991, 1.067, 1.143, 1.219, 1.372, 1.524,
];

/// Pitch ratio the tube-count constants are fitted for.
const REFERENCE_PITCH_RATIO: f64 = 1.25;

/// Tube-count constants `(K1, n1)` for the bundle-diameter correlation
/// `N_t = K1·(D_b/D_o)^n1`, indexed by pass count.
fn count_constants(layout: PitchLayout, tube_passes: u16) -> Option<(f64, f64)> {
    let constants = match (layout, tube_passes) {
        (PitchLayout::Triangular, 1) => (0.319, 2.142),
        (PitchLayout::Triangular, 2) => (0.249, 2.207),
        (PitchLayout::Triangular, 4) => (0.175, 2.285),
        (PitchLayout::Triangular, 6) => (0.0743, 2.499),
        (PitchLayout::Triangular, 8) => (0.0365, 2.675),
        (PitchLayout::Square, 1) => (0.215, 2.207),
        (PitchLayout::Square, 2) => (0.156, 2.291),
        (PitchLayout::Square, 4) => (0.158, 2.263),
        (PitchLayout::Square, 6) => (0.0402, 2.617),
        (PitchLayout::Square, 8) => (0.0331, 2.643),
        _ => return None,
    };
    Some(constants)
}

/// Tube-count estimates over a list of standard shells.
///
/// The bundle diameter is the shell diameter less a fixed diametral
/// clearance, and counts for pitch ratios other than 1.25 are scaled by the
/// inverse square of the ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardShells {
    shells: Vec<Length>,
    clearance: Length,
}

impl StandardShells {
    /// Creates a sizer over custom shells.
    ///
    /// Shells are sorted ascending; non-finite or non-positive entries are
    /// dropped.
    #[must_use]
    pub fn new(mut shells: Vec<Length>, clearance: Length) -> Self {
        shells.retain(|shell| shell.get::<meter>().is_finite() && shell.get::<meter>() > 0.0);
        shells.sort_by(|a, b| a.get::<meter>().total_cmp(&b.get::<meter>()));
        Self { shells, clearance }
    }

    #[must_use]
    pub fn shells(&self) -> &[Length] {
        &self.shells
    }

    #[must_use]
    pub fn clearance(&self) -> Length {
        self.clearance
    }
}

impl Default for StandardShells {
    fn default() -> Self {
        Self {
            shells: STANDARD_SHELLS
                .iter()
                .map(|&d| Length::new::<meter>(d))
                .collect(),
            clearance: Length::new::<millimeter>(15.0),
        }
    }
}

impl BundleSizer for StandardShells {
    fn shell_diameter(
        &self,
        required_tubes: f64,
        tube_od: Length,
        pitch: &TubePitch,
        tube_passes: u16,
    ) -> Option<Length> {
        if !required_tubes.is_finite() || required_tubes < 0.0 {
            return None;
        }
        count_constants(pitch.layout(), tube_passes)?;

        self.shells.iter().copied().find(|&shell| {
            f64::from(self.tube_count(shell, tube_od, pitch, tube_passes)) >= required_tubes
        })
    }

    fn tube_count(
        &self,
        shell_diameter: Length,
        tube_od: Length,
        pitch: &TubePitch,
        tube_passes: u16,
    ) -> u32 {
        let Some((k1, n1)) = count_constants(pitch.layout(), tube_passes) else {
            return 0;
        };

        let bundle = (shell_diameter - self.clearance).get::<meter>();
        let d_o = tube_od.get::<meter>();
        if !(bundle > 0.0 && d_o > 0.0) {
            return 0;
        }

        let pitch_scale = (REFERENCE_PITCH_RATIO / pitch.ratio()).powi(2);
        let count = (k1 * (bundle / d_o).powf(n1) * pitch_scale).floor();

        if count.is_finite() && count > 0.0 {
            // Float-to-int `as` saturates at `u32::MAX`.
            count as u32
        } else {
            0
        }
    }
}
