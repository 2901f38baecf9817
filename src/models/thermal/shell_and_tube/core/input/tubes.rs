use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use crate::models::thermal::shell_and_tube::core::DomainError;

/// Geometric arrangement of tubes in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PitchLayout {
    /// 30° layout; packs more tubes into a given shell.
    #[default]
    Triangular,
    /// 90° layout; allows mechanical cleaning between rows.
    Square,
}

/// Tube pitch as a multiple of tube outer diameter, plus layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubePitch {
    ratio: f64,
    layout: PitchLayout,
}

impl TubePitch {
    /// Creates a validated pitch.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPitch`] unless `ratio > 1`.
    pub fn new(ratio: f64, layout: PitchLayout) -> Result<Self, DomainError> {
        if ratio.is_finite() && ratio > 1.0 {
            Ok(Self { ratio, layout })
        } else {
            Err(DomainError::InvalidPitch { layout, ratio })
        }
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[must_use]
    pub fn layout(&self) -> PitchLayout {
        self.layout
    }

    /// Center-to-center tube spacing for tubes of outer diameter `tube_od`.
    #[must_use]
    pub fn spacing(&self, tube_od: Length) -> Length {
        tube_od * self.ratio
    }
}

impl Default for TubePitch {
    /// The common 1.25 triangular pitch.
    fn default() -> Self {
        Self {
            ratio: 1.25,
            layout: PitchLayout::Triangular,
        }
    }
}

/// Fixed tube dimensions shared by every candidate design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeGeometry {
    outer_diameter: Length,
    inner_diameter: Length,
    length: Length,
}

impl TubeGeometry {
    /// Creates validated tube dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTubes`] if any dimension is not strictly
    /// positive or the inner diameter is not smaller than the outer diameter.
    pub fn new(
        outer_diameter: Length,
        inner_diameter: Length,
        length: Length,
    ) -> Result<Self, DomainError> {
        let positive = |value: Length| value.get::<meter>() > 0.0 && value.get::<meter>().is_finite();

        if !positive(outer_diameter) || !positive(inner_diameter) {
            return Err(DomainError::InvalidTubes {
                context: "tube diameters must be strictly positive",
            });
        }
        if inner_diameter >= outer_diameter {
            return Err(DomainError::InvalidTubes {
                context: "inner diameter must be smaller than outer diameter",
            });
        }
        if !positive(length) {
            return Err(DomainError::InvalidTubes {
                context: "tube length must be strictly positive",
            });
        }

        Ok(Self {
            outer_diameter,
            inner_diameter,
            length,
        })
    }

    #[must_use]
    pub fn outer_diameter(&self) -> Length {
        self.outer_diameter
    }

    #[must_use]
    pub fn inner_diameter(&self) -> Length {
        self.inner_diameter
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Outside surface area of a single tube, `π·D_o·L`.
    #[must_use]
    pub fn surface_per_tube(&self) -> Area {
        Area::new::<square_meter>(PI * self.outer_diameter.get::<meter>() * self.length.get::<meter>())
    }

    /// Outer-to-inner diameter ratio used to refer tube-side resistances to
    /// the outside surface.
    #[must_use]
    pub fn diameter_ratio(&self) -> f64 {
        self.outer_diameter.get::<meter>() / self.inner_diameter.get::<meter>()
    }
}
