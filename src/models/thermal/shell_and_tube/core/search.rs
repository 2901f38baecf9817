//! Exhaustive search over the configuration space.

mod config;

pub use config::SearchConfig;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};
use uom::si::{power::kilowatt, temperature_interval::kelvin as delta_kelvin};

use crate::support::constraint::UnitIntervalOpen;

use super::{
    BundleSizer, Configuration, Converger, Design, DesignInput, DomainError, DutyAndDrivingForce,
    EstimationMethod, Rejection, Sides,
};

/// A configuration that produced no design, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedConfiguration {
    pub configuration: Configuration,
    pub reason: Rejection,
}

/// Outcome of a sizing search.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    /// Feasible designs, cheapest first.
    pub designs: Vec<Design>,

    /// Configurations that were dropped, in enumeration order.
    pub rejections: Vec<RejectedConfiguration>,

    /// Duty, driving force, and resolved flows shared by every design.
    pub driving_force: DutyAndDrivingForce,
}

impl Search {
    /// Returns the cheapest design, if any configuration was feasible.
    #[must_use]
    pub fn best(&self) -> Option<&Design> {
        self.designs.first()
    }
}

/// Sizes every configuration in `config.space` and ranks the feasible ones.
///
/// Duty and driving force are resolved once up front. Each configuration is
/// then converged independently; one that fails is recorded in
/// [`Search::rejections`] and skipped. An empty design list is a valid
/// outcome.
///
/// # Errors
///
/// Returns a [`DomainError`] if the process conditions, convergence
/// settings, energy-balance tolerance, or baffle cut are invalid, in which
/// case no configuration is attempted.
pub fn search<M, S>(
    input: &DesignInput,
    method: &M,
    sizer: &S,
    config: &SearchConfig,
) -> Result<Search, DomainError>
where
    M: EstimationMethod + Sync + ?Sized,
    S: BundleSizer + Sync + ?Sized,
{
    input.conditions.validate()?;
    config.convergence.validate()?;
    let baffle_cut = UnitIntervalOpen::new(config.baffle_cut)
        .map_err(|_| DomainError::InvalidBaffleCut {
            cut: config.baffle_cut,
        })?
        .into_inner();

    let driving_force = DutyAndDrivingForce::resolve(
        &input.conditions,
        &input.hot,
        &input.cold,
        config.energy_balance_tolerance,
    )?;

    info!(
        duty_kw = driving_force.duty.get::<kilowatt>(),
        lmtd_k = driving_force.lmtd.get::<delta_kelvin>(),
        configurations = config.space.len(),
        "starting sizing search"
    );

    let converger = Converger {
        tubes: input.tubes,
        pitch: input.pitch,
        sides: Sides::assign(input, &driving_force),
        duty: driving_force.duty,
        lmtd: driving_force.lmtd,
        baffle_cut,
        method,
        sizer,
        convergence: &config.convergence,
        evaluation: &config.evaluation,
    };

    let attempt = |configuration: Configuration| {
        let outcome = config
            .correction
            .factor(&configuration, &input.conditions)
            .ok_or(Rejection::UndefinedCorrection {
                shell_passes: configuration.shell_passes,
                tube_passes: configuration.tube_passes,
            })
            .and_then(|factor| converger.converge(configuration, factor));
        (configuration, outcome)
    };

    let configurations: Vec<Configuration> = config.space.configurations().collect();

    #[cfg(feature = "parallel")]
    let outcomes: Vec<_> = configurations.into_par_iter().map(attempt).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<_> = configurations.into_iter().map(attempt).collect();

    let mut designs = Vec::new();
    let mut rejections = Vec::new();
    for (configuration, outcome) in outcomes {
        match outcome {
            Ok(design) => designs.push(design),
            Err(reason) => {
                debug!(%configuration, %reason, "configuration rejected");
                rejections.push(RejectedConfiguration {
                    configuration,
                    reason,
                });
            }
        }
    }

    rank(&mut designs);

    info!(
        designs = designs.len(),
        rejected = rejections.len(),
        "sizing search finished"
    );

    Ok(Search {
        designs,
        rejections,
        driving_force,
    })
}

/// Orders designs by ascending cost proxy, `N_t × D_s`.
///
/// The sort is stable, so ties keep their enumeration order.
pub fn rank(designs: &mut [Design]) {
    designs.sort_by(|a, b| a.geometry.cost_proxy().total_cmp(&b.geometry.cost_proxy()));
}
