//! The solver module contains the iterated local search metaheuristic and its entry points.
//!
//! # Search loop
//!
//! A solve goes through the following phases:
//!
//! - **constructing**: an initial feasible solution is built by nearest insertion
//! - **local search**: first improvement descent with 2-opt, or-opt and inter route swap
//! - **perturbing**: double-bridge kick applied to a copy of the accepted solution
//!
//! After each local search the candidate is compared with the accepted solution using the
//! configured [`AcceptancePolicy`]; a strictly better candidate always becomes the new best
//! known solution. The loop stops when time or iteration bound is reached or when the caller
//! raises the cancellation flag.
//!
//! # Examples
//!
//! A solver with cancellation handle and progress callback:
//!
//! ```
//! use cvrp_core::prelude::*;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let problem = ProblemBuilder::default()
//!     .with_coordinates(vec![(0., 0.), (0., 1.), (0., -1.)])
//!     .with_demands(vec![0., 1., 1.])
//!     .with_capacity(1.)
//!     .build()
//!     .expect("cannot build problem");
//!
//! let improvements = Arc::new(AtomicUsize::new(0));
//! let counter = improvements.clone();
//!
//! let solver = Solver::new(SolverConfig { max_iterations: Some(5), ..SolverConfig::default() })
//!     .with_progress(Arc::new(move |_: &Progress| {
//!         counter.fetch_add(1, Ordering::Relaxed);
//!     }));
//!
//! let result = solver.solve(&problem).expect("cannot solve problem");
//!
//! assert_eq!(result.route_count(), 2);
//! assert_eq!(result.total_distance, 4.);
//! assert_eq!(result.status, SolveStatus::Completed);
//! assert!(improvements.load(Ordering::Relaxed) >= 1);
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::models::{Problem, SolverError};
use ils_common::prelude::*;
use ils_common::utils::parallel_collect;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

mod config;
pub use self::config::*;

mod ils;
pub use self::ils::SearchPhase;
use self::ils::IteratedLocalSearch;

pub mod perturbation;

mod result;
pub use self::result::*;

pub mod search;

mod telemetry;
use self::telemetry::Telemetry;

/// Solves the problem using given configuration and default settings: no logging, no
/// progress callback and no external cancellation.
pub fn solve(problem: &Problem, config: &SolverConfig) -> Result<SolveResult, SolverError> {
    Solver::new(config.clone()).solve(problem)
}

/// Runs independent solves in parallel, one per configuration, and returns the best result.
/// Ties are resolved in favor of the lowest configuration index, errors are reported in
/// configuration order.
pub fn solve_ensemble(problem: &Problem, configs: &[SolverConfig]) -> Result<SolveResult, SolverError> {
    if configs.is_empty() {
        return Err(SolverError::InvalidConfig("ensemble requires at least one configuration".to_string()));
    }

    configs.iter().try_for_each(|config| config.validate())?;

    let results = parallel_collect(configs, |config| solve(problem, config));

    let mut best: Option<SolveResult> = None;
    for result in results {
        let result = result?;
        if best.as_ref().is_none_or(|best| result.total_distance < best.total_distance) {
            best = Some(result);
        }
    }

    best.ok_or_else(|| SolverError::InvalidConfig("ensemble produced no result".to_string()))
}

/// Provides configurable way to run iterated local search on a problem.
///
/// Each call of [`Solver::solve`] owns its random generator seeded from configuration, so
/// repeated calls with the same configuration return identical results unless a time limit
/// or cancellation cuts the search at a different point.
pub struct Solver {
    config: SolverConfig,
    logger: Option<InfoLogger>,
    progress: Option<ProgressFn>,
    interrupt: InterruptQuota,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(config: SolverConfig) -> Self {
        Self { config, logger: None, progress: None, interrupt: InterruptQuota::default() }
    }

    /// Sets a logger which receives search progress messages. Solver is silent by default.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Sets a callback which is called every time a new best solution is found, including
    /// the initial one.
    pub fn with_progress(mut self, progress: ProgressFn) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Sets an external cancellation flag. Once the flag is raised, the search stops at the
    /// next checkpoint and returns the best known solution.
    pub fn with_cancellation(mut self, cancellation: Arc<AtomicBool>) -> Self {
        self.interrupt = InterruptQuota::new(cancellation);
        self
    }

    /// Returns a handle to the cancellation flag.
    pub fn cancellation(&self) -> Arc<AtomicBool> {
        self.interrupt.flag()
    }

    /// Returns solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves the problem.
    pub fn solve(&self, problem: &Problem) -> Result<SolveResult, SolverError> {
        self.config.validate()?;

        let interrupt = self.interrupt.clone();

        let mut quotas: Vec<Arc<dyn Quota + Send + Sync>> = vec![Arc::new(interrupt.clone())];
        if let Some(time_limit) = self.config.time_limit_seconds {
            quotas.push(Arc::new(TimeQuota::new(time_limit)));
        }

        let environment = Environment::new_with_seed(self.config.random_seed)
            .with_quota(Some(Arc::new(CompositeQuota::new(quotas))))
            .silent();
        let environment = match self.logger.clone() {
            Some(logger) => environment.with_logger(logger),
            None => environment,
        };

        let telemetry = Telemetry::new(environment.logger.clone(), self.progress.clone(), self.config.log_every);

        IteratedLocalSearch::new(problem, &self.config, environment, interrupt, telemetry).run()
    }
}
