//! Preliminary shell-and-tube exchanger sizing.
//!
//! Given fixed process conditions, a search enumerates every mechanical
//! configuration, converges each one to a geometry whose calculated overall
//! coefficient agrees with the coefficient assumed to size it, keeps the
//! feasible designs, and ranks them by a material-cost proxy.
//!
//! Collaborators are injected: an [`EstimationMethod`] supplies film
//! coefficients and pressure drops, and a [`BundleSizer`] maps tube counts
//! to realizable shells.

mod bundle;
mod configuration;
mod converge;
mod duty;
mod error;
mod evaluate;
mod geometry;
mod input;
mod method;
mod search;

#[cfg(test)]
pub(crate) mod test_support;

pub use bundle::{BundleSizer, StandardShells};
pub use configuration::{Configuration, ConfigurationSpace, CorrectionMethod, HeadType};
pub use converge::{ConvergenceConfig, Converger, Design};
pub use duty::{DutyAndDrivingForce, log_mean_temperature_difference};
pub use error::{DomainError, Rejection};
pub use evaluate::{
    EvaluationDefaults, EvaluationFailure, EvaluationMetrics, Feasibility, Sides, Substitutions,
    evaluate,
};
pub use geometry::{BAFFLE_SPACING_RATIO, DEFAULT_BAFFLE_CUT, HxGeometry};
pub use input::{
    DesignInput, PitchLayout, ProcessConditions, Side, StreamConditions, StreamRole,
    TubeGeometry, TubePitch,
};
pub use method::{BellDelaware, Estimate, EstimationMethod, Kern, SideFlow, StreamAnalysis};
pub use search::{RejectedConfiguration, Search, SearchConfig, rank, search};
