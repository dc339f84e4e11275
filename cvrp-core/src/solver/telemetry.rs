//! A module which provides simple logging of the search progress.

use crate::models::solution::Solution;
use crate::solver::perturbation::Kick;
use crate::solver::search::LocalSearchStatistics;
use crate::solver::{Progress, ProgressFn, SolveStatus};
use ils_common::prelude::*;

/// Provides way to write information about search into log and notify about improvements.
pub(crate) struct Telemetry {
    logger: InfoLogger,
    progress: Option<ProgressFn>,
    log_every: Option<usize>,
    time: Timer,
    kicks: (usize, usize, usize),
}

impl Telemetry {
    pub fn new(logger: InfoLogger, progress: Option<ProgressFn>, log_every: Option<usize>) -> Self {
        Self { logger, progress, log_every, time: Timer::start(), kicks: (0, 0, 0) }
    }

    pub fn on_initial(&self, solution: &Solution, construction_time: Timer, statistics: &LocalSearchStatistics) {
        self.log(
            format!(
                "[{}s] created initial solution in {}ms: cost {:.2}, routes {}, local search moves {:?}",
                self.time.elapsed_secs(),
                construction_time.elapsed_millis(),
                solution.total_distance(),
                solution.route_count(),
                statistics.moves
            )
            .as_str(),
        );
    }

    pub fn on_best(&self, iteration: usize, solution: &Solution) {
        let progress = Progress {
            iteration,
            best_distance: solution.total_distance(),
            routes: solution.route_count(),
            elapsed_seconds: self.time.elapsed_secs_as_f64(),
        };

        if iteration > 0 {
            self.log(
                format!(
                    "[{}s] iteration {}: new best cost {:.2}, routes {}",
                    self.time.elapsed_secs(),
                    iteration,
                    progress.best_distance,
                    progress.routes
                )
                .as_str(),
            );
        }

        if let Some(progress_fn) = self.progress.as_ref() {
            progress_fn(&progress);
        }
    }

    pub fn on_kicks(&mut self, kicks: &[Kick]) {
        kicks.iter().for_each(|kick| match kick {
            Kick::InterRoute => self.kicks.0 += 1,
            Kick::IntraRoute => self.kicks.1 += 1,
            Kick::Unchanged => self.kicks.2 += 1,
        });
    }

    pub fn on_iteration(&self, statistics: &HeuristicStatistics, estimate: f64, current: &Solution, best: &Solution) {
        let should_log = self.log_every.is_some_and(|log_every| statistics.iteration % log_every == 0);

        if should_log {
            self.log(
                format!(
                    "[{}s] iteration {} ({:.0}%): current cost {:.2}, best cost {:.2}, stagnation {} ({:.2} it/sec)",
                    self.time.elapsed_secs(),
                    statistics.iteration,
                    estimate * 100.,
                    current.total_distance(),
                    best.total_distance(),
                    statistics.stagnation(),
                    self.speed(statistics)
                )
                .as_str(),
            );
        }
    }

    pub fn on_restart(&self, statistics: &HeuristicStatistics) {
        self.log(
            format!(
                "[{}s] iteration {}: no improvement for {} iterations, restarting from best solution",
                self.time.elapsed_secs(),
                statistics.iteration,
                statistics.stagnation()
            )
            .as_str(),
        );
    }

    pub fn on_finish(&self, statistics: &HeuristicStatistics, best: &Solution, status: SolveStatus) {
        let (inter_route, intra_route, unchanged) = self.kicks;

        self.log(
            format!(
                "[{}s] search finished ({:?}) after {} iterations ({:.2} it/sec): best cost {:.2}, routes {}, \
                 kicks inter/intra/none {}/{}/{}",
                self.time.elapsed_secs(),
                status,
                statistics.iteration,
                self.speed(statistics),
                best.total_distance(),
                best.route_count(),
                inter_route,
                intra_route,
                unchanged
            )
            .as_str(),
        );
    }

    fn speed(&self, statistics: &HeuristicStatistics) -> f64 {
        statistics.iteration as f64 / self.time.elapsed_secs_as_f64().max(f64::EPSILON)
    }

    fn log(&self, message: &str) {
        (self.logger)(message);
    }
}
