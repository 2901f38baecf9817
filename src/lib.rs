//! # Twine HX Design
//!
//! Preliminary thermal-hydraulic sizing of shell-and-tube heat exchangers for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given the inlet and outlet temperatures of a hot and a cold stream, at
//! least one mass flow, and fixed tube dimensions, a sizing search tries every
//! combination of front-end head type, shell passes, and tube passes. Each
//! configuration is converged to a geometry whose calculated overall
//! coefficient matches the one assumed to size it, infeasible geometries are
//! dropped, and the rest are ranked by a material-cost proxy.
//!
//! ## Crate layout
//!
//! - [`models`]: The sizing search and its [`twine_core::Model`] adapter.
//! - [`support`]: Numeric constraints, [`uom`] extensions, and fluid property
//!   correlations.
//!
//! ## Example
//!
//! ```
//! use twine_core::Model;
//! use twine_hx_design::{
//!     models::thermal::shell_and_tube::{
//!         DesignInput, Kern, ProcessConditions, ShellAndTubeSizing, Side, StandardShells,
//!         StreamConditions, TubeGeometry, TubePitch,
//!     },
//!     support::{
//!         properties::FluidProperties,
//!         units::{FoulingResistance, FoulingResistanceExt},
//!     },
//! };
//! use uom::si::{
//!     dynamic_viscosity::pascal_second,
//!     f64::{
//!         DynamicViscosity, Length, MassDensity, MassRate, Pressure, SpecificHeatCapacity,
//!         ThermalConductivity, ThermodynamicTemperature,
//!     },
//!     length::{meter, millimeter},
//!     mass_density::kilogram_per_cubic_meter,
//!     mass_rate::kilogram_per_second,
//!     pressure::kilopascal,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let water = |mu: f64, k: f64, rho: f64| {
//!     FluidProperties::new(
//!         SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
//!         DynamicViscosity::new::<pascal_second>(mu),
//!         ThermalConductivity::new::<watt_per_meter_kelvin>(k),
//!         MassDensity::new::<kilogram_per_cubic_meter>(rho),
//!     )
//!     .unwrap()
//! };
//! let fouling = FoulingResistance::from_square_meter_kelvin_per_watt(2.0e-4);
//!
//! let input = DesignInput {
//!     conditions: ProcessConditions {
//!         hot: StreamConditions {
//!             mass_flow: Some(MassRate::new::<kilogram_per_second>(2.0)),
//!             inlet_temperature: ThermodynamicTemperature::new::<kelvin>(373.15),
//!             outlet_temperature: ThermodynamicTemperature::new::<kelvin>(323.15),
//!             inlet_pressure: Pressure::new::<kilopascal>(500.0),
//!             max_pressure_drop: Pressure::new::<kilopascal>(50.0),
//!             fouling,
//!         },
//!         cold: StreamConditions {
//!             mass_flow: None,
//!             inlet_temperature: ThermodynamicTemperature::new::<kelvin>(293.15),
//!             outlet_temperature: ThermodynamicTemperature::new::<kelvin>(313.15),
//!             inlet_pressure: Pressure::new::<kilopascal>(300.0),
//!             max_pressure_drop: Pressure::new::<kilopascal>(30.0),
//!             fouling,
//!         },
//!     },
//!     tubes: TubeGeometry::new(
//!         Length::new::<millimeter>(25.4),
//!         Length::new::<millimeter>(21.0),
//!         Length::new::<meter>(6.096),
//!     )
//!     .unwrap(),
//!     pitch: TubePitch::default(),
//!     hot: water(5.0e-4, 0.65, 990.0),
//!     cold: water(1.0e-3, 0.60, 998.0),
//!     hot_side: Side::Shell,
//! };
//!
//! let sizing = ShellAndTubeSizing::new(Kern, StandardShells::default());
//! let result = sizing.call(&input).unwrap();
//!
//! let best = result.best().expect("a feasible design");
//! assert!(best.metrics.provided_area >= best.metrics.required_area);
//! ```

pub mod models;
pub mod support;
