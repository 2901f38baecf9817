use std::f64::consts::PI;

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{HeatTransfer, Pressure},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::models::thermal::shell_and_tube::core::{HxGeometry, PitchLayout};

use super::{Estimate, EstimationMethod, SideFlow};

/// Upper Reynolds number of fully laminar tube flow.
const LAMINAR_LIMIT: f64 = 2100.0;

/// Lower Reynolds number of fully turbulent tube flow.
const TURBULENT_LIMIT: f64 = 10_000.0;

/// Lower bound on the laminar Nusselt number (fully developed, constant wall
/// temperature).
const LAMINAR_NUSSELT_FLOOR: f64 = 3.66;

/// Return-loss velocity heads per tube pass.
const RETURN_LOSS_HEADS: f64 = 2.5;

/// Kern's method.
///
/// The shell side uses an equivalent hydraulic diameter with the bundle
/// crossflow area at the shell centerline. The tube side uses Sieder-Tate in
/// laminar and turbulent flow, interpolating Nusselt number linearly in the
/// transition region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kern;

/// Dimensionless state of one side's flow.
#[derive(Debug, Clone, Copy)]
struct FlowState {
    reynolds: f64,
    prandtl: f64,
    viscosity_correction: f64,
    conductivity: f64,
    density: f64,
}

impl FlowState {
    fn new(flow: &SideFlow, mass_flux: f64, diameter: f64) -> Option<Self> {
        let props = &flow.properties;
        let mu = props.mu().get::<pascal_second>();
        let cp = props.cp().get::<joule_per_kilogram_kelvin>();
        let k = props.k().get::<watt_per_meter_kelvin>();
        let rho = props.rho().get::<kilogram_per_cubic_meter>();

        let viscosity_correction = match flow.wall_viscosity {
            Some(mu_w) => (mu / mu_w.get::<pascal_second>()).powf(0.14),
            None => 1.0,
        };

        let state = Self {
            reynolds: mass_flux * diameter / mu,
            prandtl: cp * mu / k,
            viscosity_correction,
            conductivity: k,
            density: rho,
        };

        (state.reynolds.is_finite()
            && state.reynolds > 0.0
            && state.viscosity_correction.is_finite()
            && state.viscosity_correction > 0.0)
            .then_some(state)
    }
}

/// Shell-side flow passage for Kern's method, in SI.
#[derive(Debug, Clone, Copy)]
struct ShellPassage {
    crossflow_area: f64,
    equivalent_diameter: f64,
}

impl ShellPassage {
    fn new(geometry: &HxGeometry) -> Option<Self> {
        let d_o = geometry.tube_od().get::<meter>();
        let pitch = geometry.pitch().spacing(geometry.tube_od()).get::<meter>();
        let d_s = geometry.shell_diameter().get::<meter>();
        let l_b = geometry.baffle_spacing().get::<meter>();

        let crossflow_area = (pitch - d_o) * d_s * l_b / pitch;
        let equivalent_diameter = match geometry.pitch_layout() {
            PitchLayout::Triangular => 1.10 / d_o * (pitch.powi(2) - 0.917 * d_o.powi(2)),
            PitchLayout::Square => 1.27 / d_o * (pitch.powi(2) - 0.785 * d_o.powi(2)),
        };

        (crossflow_area > 0.0 && equivalent_diameter > 0.0).then_some(Self {
            crossflow_area,
            equivalent_diameter,
        })
    }

    fn state(&self, flow: &SideFlow) -> Option<FlowState> {
        let mass_flux = flow.mass_flow.get::<kilogram_per_second>() / self.crossflow_area;
        FlowState::new(flow, mass_flux, self.equivalent_diameter)
    }
}

/// Tube-side flow passage for Kern's method, in SI.
#[derive(Debug, Clone, Copy)]
struct TubePassage {
    flow_area: f64,
    inner_diameter: f64,
    length: f64,
    passes: f64,
}

impl TubePassage {
    fn new(geometry: &HxGeometry) -> Option<Self> {
        let passes = geometry.tube_passes();
        if passes == 0 || geometry.num_tubes() < u32::from(passes) {
            return None;
        }

        let d_i = geometry.tube_id().get::<meter>();
        let tubes_per_pass = f64::from(geometry.num_tubes()) / f64::from(passes);

        Some(Self {
            flow_area: tubes_per_pass * PI * d_i.powi(2) / 4.0,
            inner_diameter: d_i,
            length: geometry.tube_length().get::<meter>(),
            passes: f64::from(passes),
        })
    }

    fn state(&self, flow: &SideFlow) -> Option<FlowState> {
        let mass_flux = flow.mass_flow.get::<kilogram_per_second>() / self.flow_area;
        FlowState::new(flow, mass_flux, self.inner_diameter)
    }

    fn laminar_nusselt(&self, reynolds: f64, prandtl: f64) -> f64 {
        let graetz = reynolds * prandtl * self.inner_diameter / self.length;
        (1.86 * graetz.cbrt()).max(LAMINAR_NUSSELT_FLOOR)
    }
}

fn turbulent_nusselt(reynolds: f64, prandtl: f64) -> f64 {
    0.027 * reynolds.powf(0.8) * prandtl.cbrt()
}

fn heat_transfer(value: f64) -> Estimate<HeatTransfer> {
    if value.is_finite() && value > 0.0 {
        Estimate::Value(HeatTransfer::new::<watt_per_square_meter_kelvin>(value))
    } else {
        Estimate::Unavailable
    }
}

fn pressure_drop(value: f64) -> Estimate<Pressure> {
    if value.is_finite() && value >= 0.0 {
        Estimate::Value(Pressure::new::<pascal>(value))
    } else {
        Estimate::Unavailable
    }
}

impl EstimationMethod for Kern {
    fn shell_heat_transfer(
        &self,
        geometry: &HxGeometry,
        flow: &SideFlow,
    ) -> Estimate<HeatTransfer> {
        let Some(passage) = ShellPassage::new(geometry) else {
            return Estimate::Unavailable;
        };
        let Some(state) = passage.state(flow) else {
            return Estimate::Unavailable;
        };

        let nusselt = 0.36
            * state.reynolds.powf(0.55)
            * state.prandtl.cbrt()
            * state.viscosity_correction;

        heat_transfer(nusselt * state.conductivity / passage.equivalent_diameter)
    }

    fn tube_heat_transfer(&self, geometry: &HxGeometry, flow: &SideFlow) -> Estimate<HeatTransfer> {
        let Some(passage) = TubePassage::new(geometry) else {
            return Estimate::Unavailable;
        };
        let Some(state) = passage.state(flow) else {
            return Estimate::Unavailable;
        };

        let FlowState {
            reynolds, prandtl, ..
        } = state;

        let nusselt = if reynolds >= TURBULENT_LIMIT {
            turbulent_nusselt(reynolds, prandtl)
        } else if reynolds <= LAMINAR_LIMIT {
            passage.laminar_nusselt(reynolds, prandtl)
        } else {
            let laminar = passage.laminar_nusselt(LAMINAR_LIMIT, prandtl);
            let turbulent = turbulent_nusselt(TURBULENT_LIMIT, prandtl);
            let weight = (reynolds - LAMINAR_LIMIT) / (TURBULENT_LIMIT - LAMINAR_LIMIT);
            laminar + weight * (turbulent - laminar)
        };

        heat_transfer(
            nusselt * state.viscosity_correction * state.conductivity / passage.inner_diameter,
        )
    }

    fn shell_pressure_drop(&self, geometry: &HxGeometry, flow: &SideFlow) -> Estimate<Pressure> {
        let Some(passage) = ShellPassage::new(geometry) else {
            return Estimate::Unavailable;
        };
        let Some(state) = passage.state(flow) else {
            return Estimate::Unavailable;
        };

        let mass_flux = flow.mass_flow.get::<kilogram_per_second>() / passage.crossflow_area;
        let friction = (0.576 - 0.19 * state.reynolds.ln()).exp();
        let crossings = geometry.tube_length().get::<meter>()
            / geometry.baffle_spacing().get::<meter>();

        let per_pass = friction
            * mass_flux.powi(2)
            * geometry.shell_diameter().get::<meter>()
            * crossings
            / (2.0 * state.density * passage.equivalent_diameter * state.viscosity_correction);

        pressure_drop(per_pass * f64::from(geometry.shell_passes()))
    }

    fn tube_pressure_drop(&self, geometry: &HxGeometry, flow: &SideFlow) -> Estimate<Pressure> {
        let Some(passage) = TubePassage::new(geometry) else {
            return Estimate::Unavailable;
        };
        let Some(state) = passage.state(flow) else {
            return Estimate::Unavailable;
        };

        let velocity =
            flow.mass_flow.get::<kilogram_per_second>() / (state.density * passage.flow_area);
        let fanning = if state.reynolds <= LAMINAR_LIMIT {
            16.0 / state.reynolds
        } else {
            0.046 * state.reynolds.powf(-0.2)
        };

        let velocity_head = state.density * velocity.powi(2) / 2.0;
        let heads = 4.0 * fanning * passage.length / passage.inner_diameter + RETURN_LOSS_HEADS;

        pressure_drop(passage.passes * heads * velocity_head)
    }
}
