use thiserror::Error;
use uom::si::f64::{MassRate, Power, TemperatureInterval};

use super::{
    EvaluationFailure, EvaluationMetrics, Feasibility, StreamRole, input::PitchLayout,
};

/// Malformed global input that makes the whole search undefined.
///
/// Duty and driving force are shared by every configuration, so any of these
/// aborts the search before a single configuration is attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Neither stream has a specified mass flow, so the duty is unknown.
    #[error("at least one stream must have a specified mass flow")]
    MissingFlow,

    /// A specified mass flow is zero, negative, or not a number.
    #[error("{stream:?} stream mass flow must be strictly positive: {mass_flow:?}")]
    NonPositiveFlow {
        stream: StreamRole,
        mass_flow: MassRate,
    },

    /// A stream's temperature change has the wrong sign for its role.
    ///
    /// The hot stream must cool and the cold stream must heat.
    #[error("{stream:?} stream temperature change must be positive: {delta_t:?}")]
    NonPositiveDuty {
        stream: StreamRole,
        delta_t: TemperatureInterval,
    },

    /// Both flows are specified but their duties disagree.
    #[error("energy balance not satisfied: hot={hot_duty:?}, cold={cold_duty:?}")]
    EnergyImbalance { hot_duty: Power, cold_duty: Power },

    /// A terminal temperature difference is zero or negative.
    #[error("temperature cross: hot end {hot_end:?}, cold end {cold_end:?}")]
    TemperatureCross {
        /// `T_hot,in − T_cold,out`.
        hot_end: TemperatureInterval,
        /// `T_hot,out − T_cold,in`.
        cold_end: TemperatureInterval,
    },

    /// Equal terminal differences leave the log-mean undefined (`0 / ln 1`).
    #[error("terminal temperature differences are equal: {delta_t:?}")]
    ZeroDrivingForce { delta_t: TemperatureInterval },

    /// A fouling resistance is negative or not a number.
    #[error("{stream:?} stream fouling resistance must not be negative")]
    NegativeFouling { stream: StreamRole },

    /// An allowable pressure drop is negative or not a number.
    #[error("{stream:?} stream allowable pressure drop must not be negative")]
    NegativePressureDropLimit { stream: StreamRole },

    /// Tube dimensions are non-physical.
    #[error("invalid tube geometry: {context}")]
    InvalidTubes { context: &'static str },

    /// The pitch ratio does not leave a gap between tubes.
    #[error("{layout:?} pitch ratio must be greater than 1: {ratio}")]
    InvalidPitch { layout: PitchLayout, ratio: f64 },

    /// The baffle cut is not a fraction of the shell diameter.
    #[error("baffle cut must lie strictly between 0 and 1: {cut}")]
    InvalidBaffleCut { cut: f64 },

    /// A convergence setting is outside its valid range.
    #[error("invalid convergence setting {setting}: {value}")]
    InvalidConvergenceSetting { setting: &'static str, value: f64 },

    /// The energy-balance tolerance is negative or not a number.
    #[error("energy balance tolerance must not be negative: {tolerance}")]
    InvalidEnergyBalanceTolerance { tolerance: f64 },
}

/// Why a single configuration produced no design.
///
/// Rejections are recovered locally: the configuration is dropped and the
/// search continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// No realizable shell holds the required tube count.
    #[error("no shell fits {required_tubes:.1} tubes (iteration {iteration})")]
    NoShellFit {
        required_tubes: f64,
        iteration: usize,
    },

    /// The converged geometry violates an area or pressure-drop limit.
    #[error("converged design is infeasible: {feasibility:?}")]
    Infeasible {
        metrics: Box<EvaluationMetrics>,
        feasibility: Feasibility,
    },

    /// The overall coefficient did not settle within the iteration cap.
    #[error("no convergence after {iterations} iterations: relative error {relative_error:.3}")]
    NonConvergence {
        iterations: usize,
        relative_error: f64,
    },

    /// The candidate geometry could not be evaluated.
    #[error("evaluation failed")]
    EvaluationFailure(#[from] EvaluationFailure),

    /// The selected F-correction is undefined for this pass arrangement.
    #[error("correction factor undefined for {shell_passes} shell / {tube_passes} tube passes")]
    UndefinedCorrection { shell_passes: u16, tube_passes: u16 },
}
