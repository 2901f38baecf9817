use uom::si::{
    f64::{Area, Length},
    length::meter,
};

use super::{Configuration, HeadType, PitchLayout, TubeGeometry, TubePitch};

/// Baffle spacing as a fraction of shell diameter.
pub const BAFFLE_SPACING_RATIO: f64 = 0.4;

/// Default baffle cut as a fraction of shell diameter.
pub const DEFAULT_BAFFLE_CUT: f64 = 0.25;

/// A candidate exchanger design.
///
/// Built only by the geometry converger, which applies the baffle rule
/// (spacing = 0.4 × shell diameter), so the rule holds for every instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HxGeometry {
    tubes: TubeGeometry,
    pitch: TubePitch,
    configuration: Configuration,
    shell_diameter: Length,
    num_tubes: u32,
    baffle_cut: f64,
    baffle_spacing: Length,
}

impl HxGeometry {
    pub(crate) fn new(
        tubes: TubeGeometry,
        pitch: TubePitch,
        configuration: Configuration,
        shell_diameter: Length,
        num_tubes: u32,
        baffle_cut: f64,
    ) -> Self {
        Self {
            tubes,
            pitch,
            configuration,
            shell_diameter,
            num_tubes,
            baffle_cut,
            baffle_spacing: shell_diameter * BAFFLE_SPACING_RATIO,
        }
    }

    #[must_use]
    pub fn tube_od(&self) -> Length {
        self.tubes.outer_diameter()
    }

    #[must_use]
    pub fn tube_id(&self) -> Length {
        self.tubes.inner_diameter()
    }

    #[must_use]
    pub fn tube_length(&self) -> Length {
        self.tubes.length()
    }

    #[must_use]
    pub fn tubes(&self) -> &TubeGeometry {
        &self.tubes
    }

    #[must_use]
    pub fn shell_diameter(&self) -> Length {
        self.shell_diameter
    }

    #[must_use]
    pub fn num_tubes(&self) -> u32 {
        self.num_tubes
    }

    #[must_use]
    pub fn tube_passes(&self) -> u16 {
        self.configuration.tube_passes
    }

    #[must_use]
    pub fn shell_passes(&self) -> u16 {
        self.configuration.shell_passes
    }

    #[must_use]
    pub fn head_type(&self) -> HeadType {
        self.configuration.head_type
    }

    #[must_use]
    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    #[must_use]
    pub fn pitch_ratio(&self) -> f64 {
        self.pitch.ratio()
    }

    #[must_use]
    pub fn pitch_layout(&self) -> PitchLayout {
        self.pitch.layout()
    }

    #[must_use]
    pub fn pitch(&self) -> TubePitch {
        self.pitch
    }

    #[must_use]
    pub fn baffle_cut(&self) -> f64 {
        self.baffle_cut
    }

    #[must_use]
    pub fn baffle_spacing(&self) -> Length {
        self.baffle_spacing
    }

    /// Outside tube surface available for heat transfer, `N_t·π·D_o·L`.
    #[must_use]
    pub fn provided_area(&self) -> Area {
        self.tubes.surface_per_tube() * f64::from(self.num_tubes)
    }

    /// Material-cost proxy used for ranking, `N_t × D_s` in tube·meters.
    #[must_use]
    pub fn cost_proxy(&self) -> f64 {
        f64::from(self.num_tubes) * self.shell_diameter.get::<meter>()
    }
}
