use std::f64::consts::PI;

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, HeatTransfer, Length, MassDensity, MassRate, Pressure,
        SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::{meter, millimeter},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::{kilopascal, pascal},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    properties::FluidProperties,
    units::{FoulingResistance, FoulingResistanceExt},
};

use super::{
    BundleSizer, Configuration, ConvergenceConfig, Converger, DesignInput, DutyAndDrivingForce,
    Estimate, EstimationMethod, EvaluationDefaults, HeadType, HxGeometry, ProcessConditions, Side,
    SideFlow, Sides, StreamConditions, TubeGeometry, TubePitch, geometry::DEFAULT_BAFFLE_CUT,
};

fn water(cp: f64, mu: f64, k: f64, rho: f64) -> FluidProperties {
    FluidProperties::new(
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp),
        DynamicViscosity::new::<pascal_second>(mu),
        ThermalConductivity::new::<watt_per_meter_kelvin>(k),
        MassDensity::new::<kilogram_per_cubic_meter>(rho),
    )
    .unwrap()
}

/// Water near 75 °C.
pub(crate) fn hot_water() -> FluidProperties {
    water(4180.0, 5.0e-4, 0.65, 990.0)
}

/// Water near 30 °C.
pub(crate) fn cold_water() -> FluidProperties {
    water(4180.0, 1.0e-3, 0.60, 998.0)
}

/// Hot water 100 → 50 °C at 2 kg/s; cold water 20 → 40 °C, flow back-solved.
pub(crate) fn conditions() -> ProcessConditions {
    let fouling = FoulingResistance::from_square_meter_kelvin_per_watt(2.0e-4);

    ProcessConditions {
        hot: StreamConditions {
            mass_flow: Some(MassRate::new::<kilogram_per_second>(2.0)),
            inlet_temperature: ThermodynamicTemperature::new::<kelvin>(373.15),
            outlet_temperature: ThermodynamicTemperature::new::<kelvin>(323.15),
            inlet_pressure: Pressure::new::<kilopascal>(500.0),
            max_pressure_drop: Pressure::new::<kilopascal>(50.0),
            fouling,
        },
        cold: StreamConditions {
            mass_flow: None,
            inlet_temperature: ThermodynamicTemperature::new::<kelvin>(293.15),
            outlet_temperature: ThermodynamicTemperature::new::<kelvin>(313.15),
            inlet_pressure: Pressure::new::<kilopascal>(300.0),
            max_pressure_drop: Pressure::new::<kilopascal>(30.0),
            fouling,
        },
    }
}

/// One-inch tubes, 20 ft long.
pub(crate) fn tubes() -> TubeGeometry {
    TubeGeometry::new(
        Length::new::<millimeter>(25.4),
        Length::new::<millimeter>(21.0),
        Length::new::<meter>(6.096),
    )
    .unwrap()
}

/// Hot water on the shell side, 1.25 triangular pitch.
pub(crate) fn design_input() -> DesignInput {
    DesignInput {
        conditions: conditions(),
        tubes: tubes(),
        pitch: TubePitch::default(),
        hot: hot_water(),
        cold: cold_water(),
        hot_side: Side::Shell,
    }
}

pub(crate) fn driving_force() -> DutyAndDrivingForce {
    DutyAndDrivingForce::resolve(&conditions(), &hot_water(), &cold_water(), 0.01).unwrap()
}

pub(crate) fn geometry(
    shell_passes: u16,
    tube_passes: u16,
    shell_diameter_m: f64,
    num_tubes: u32,
) -> HxGeometry {
    HxGeometry::new(
        tubes(),
        TubePitch::default(),
        Configuration {
            head_type: HeadType::A,
            shell_passes,
            tube_passes,
        },
        Length::new::<meter>(shell_diameter_m),
        num_tubes,
        DEFAULT_BAFFLE_CUT,
    )
}

pub(crate) fn hot_side_flow() -> SideFlow {
    SideFlow {
        mass_flow: MassRate::new::<kilogram_per_second>(2.0),
        properties: hot_water(),
        wall_viscosity: None,
    }
}

pub(crate) fn cold_side_flow() -> SideFlow {
    SideFlow {
        mass_flow: MassRate::new::<kilogram_per_second>(5.0),
        properties: cold_water(),
        wall_viscosity: None,
    }
}

pub(crate) fn converger<'a, M: EstimationMethod, S: BundleSizer>(
    method: &'a M,
    sizer: &'a S,
    convergence: &'a ConvergenceConfig,
    evaluation: &'a EvaluationDefaults,
) -> Converger<'a, M, S> {
    let input = design_input();
    let driving_force = driving_force();

    Converger {
        tubes: input.tubes,
        pitch: input.pitch,
        sides: Sides::assign(&input, &driving_force),
        duty: driving_force.duty,
        lmtd: driving_force.lmtd,
        baffle_cut: DEFAULT_BAFFLE_CUT,
        method,
        sizer,
        convergence,
        evaluation,
    }
}

/// Returns the same coefficients and pressure drops for any geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ConstantMethod {
    pub(crate) shell: f64,
    pub(crate) tube: f64,
    pub(crate) pressure_drop: f64,
}

impl ConstantMethod {
    pub(crate) fn new(heat_transfer: f64, pressure_drop: f64) -> Self {
        Self {
            shell: heat_transfer,
            tube: heat_transfer,
            pressure_drop,
        }
    }
}

impl EstimationMethod for ConstantMethod {
    fn shell_heat_transfer(&self, _: &HxGeometry, _: &SideFlow) -> Estimate<HeatTransfer> {
        Estimate::Value(HeatTransfer::new::<watt_per_square_meter_kelvin>(self.shell))
    }

    fn tube_heat_transfer(&self, _: &HxGeometry, _: &SideFlow) -> Estimate<HeatTransfer> {
        Estimate::Value(HeatTransfer::new::<watt_per_square_meter_kelvin>(self.tube))
    }

    fn shell_pressure_drop(&self, _: &HxGeometry, _: &SideFlow) -> Estimate<Pressure> {
        Estimate::Value(Pressure::new::<pascal>(self.pressure_drop))
    }

    fn tube_pressure_drop(&self, _: &HxGeometry, _: &SideFlow) -> Estimate<Pressure> {
        Estimate::Value(Pressure::new::<pascal>(self.pressure_drop))
    }
}

/// Shells every 0.1 m up to 2 m, holding tubes by pitch area alone.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridBundle;

impl BundleSizer for GridBundle {
    fn shell_diameter(
        &self,
        required_tubes: f64,
        tube_od: Length,
        pitch: &TubePitch,
        tube_passes: u16,
    ) -> Option<Length> {
        (1..=20)
            .map(|i| Length::new::<meter>(f64::from(i) * 0.1))
            .find(|&shell| {
                f64::from(self.tube_count(shell, tube_od, pitch, tube_passes)) >= required_tubes
            })
    }

    fn tube_count(&self, shell_diameter: Length, tube_od: Length, pitch: &TubePitch, _: u16) -> u32 {
        let cells = shell_diameter.get::<meter>() / pitch.spacing(tube_od).get::<meter>();
        (PI / 4.0 * cells.powi(2)).floor() as u32
    }
}

/// A sizer for which no shell is ever large enough.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NeverFits;

impl BundleSizer for NeverFits {
    fn shell_diameter(&self, _: f64, _: Length, _: &TubePitch, _: u16) -> Option<Length> {
        None
    }

    fn tube_count(&self, _: Length, _: Length, _: &TubePitch, _: u16) -> u32 {
        0
    }
}
