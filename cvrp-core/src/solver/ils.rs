#[cfg(test)]
#[path = "../../tests/unit/solver/ils_test.rs"]
mod ils_test;

use crate::construction::NearestInsertion;
use crate::models::solution::Solution;
use crate::models::{Problem, SolverError};
use crate::solver::perturbation::DoubleBridge;
use crate::solver::search::LocalSearch;
use crate::solver::telemetry::Telemetry;
use crate::solver::{SolveResult, SolveStatus, SolverConfig};
use ils_common::prelude::*;

/// Specifies a phase of the iterated local search state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    /// Building an initial solution.
    Constructing,
    /// Descending to a local optimum.
    LocalSearch,
    /// Kicking the accepted solution out of its local optimum.
    Perturbing,
    /// Search is over.
    Terminated,
}

/// Keeps the state of a single solve invocation.
struct SearchState {
    phase: SearchPhase,
    current: Solution,
    /// A copy of the accepted solution taken before perturbation, used to revert on rejection.
    accepted: Option<Solution>,
    best: Solution,
    statistics: HeuristicStatistics,
    last_restart: usize,
    status: SolveStatus,
}

/// Runs an iterated local search: construction, local search, then repeated
/// perturbation, local search and acceptance until termination or cancellation.
pub(crate) struct IteratedLocalSearch<'a> {
    problem: &'a Problem,
    config: &'a SolverConfig,
    environment: Environment,
    interrupt: InterruptQuota,
    termination: CompositeTermination,
    telemetry: Telemetry,
}

impl<'a> IteratedLocalSearch<'a> {
    pub fn new(
        problem: &'a Problem,
        config: &'a SolverConfig,
        environment: Environment,
        interrupt: InterruptQuota,
        telemetry: Telemetry,
    ) -> Self {
        Self { problem, config, environment, interrupt, termination: create_termination(config), telemetry }
    }

    pub fn run(mut self) -> Result<SolveResult, SolverError> {
        let local_search = LocalSearch::new(self.config.first_improvement_epsilon, self.config.max_local_search_moves);
        let perturbation = DoubleBridge::new(self.config.perturbation_kicks);

        let mut state = SearchState {
            phase: SearchPhase::Constructing,
            current: Solution::default(),
            accepted: None,
            best: Solution::default(),
            statistics: HeuristicStatistics::default(),
            last_restart: 0,
            status: SolveStatus::Completed,
        };
        let mut construction_time = Timer::start();

        while state.phase != SearchPhase::Terminated {
            state.phase = match state.phase {
                SearchPhase::Constructing => {
                    construction_time = Timer::start();
                    state.current = NearestInsertion::default().construct(self.problem)?;

                    SearchPhase::LocalSearch
                }
                SearchPhase::LocalSearch => {
                    let ls_statistics = local_search.improve(self.problem, &mut state.current, &self.environment);

                    match state.accepted.take() {
                        Some(previous) => self.accept(&mut state, previous),
                        None => {
                            state.best = state.current.clone();
                            self.telemetry.on_initial(&state.best, construction_time.clone(), &ls_statistics);
                            self.telemetry.on_best(0, &state.best);
                        }
                    }

                    SearchPhase::Perturbing
                }
                SearchPhase::Perturbing => {
                    if self.interrupt.is_reached() {
                        state.status = SolveStatus::Cancelled;
                        SearchPhase::Terminated
                    } else if self.termination.is_termination(&state.statistics) {
                        SearchPhase::Terminated
                    } else {
                        state.statistics.iteration += 1;
                        state.accepted = Some(state.current.clone());

                        let kicks =
                            perturbation.perturb(self.problem, &mut state.current, self.environment.random.as_ref());
                        self.telemetry.on_kicks(kicks.as_slice());

                        SearchPhase::LocalSearch
                    }
                }
                SearchPhase::Terminated => SearchPhase::Terminated,
            };
        }

        self.telemetry.on_finish(&state.statistics, &state.best, state.status);

        let mut best = state.best;
        best.recalculate(self.problem);

        Ok(SolveResult {
            routes: best.to_routes(),
            total_distance: best.total_distance(),
            iterations: state.statistics.iteration,
            elapsed_seconds: state.statistics.time.elapsed_secs_as_f64(),
            status: state.status,
        })
    }

    /// Decides whether the candidate in `state.current` replaces the previously accepted solution.
    fn accept(&self, state: &mut SearchState, previous: Solution) {
        let epsilon = self.config.first_improvement_epsilon;
        let candidate = state.current.total_distance();
        let is_new_best = candidate < state.best.total_distance() - epsilon;

        let is_accepted = is_new_best
            || self.config.acceptance.accepts(
                candidate,
                previous.total_distance(),
                epsilon,
                self.environment.random.as_ref(),
            );

        if !is_accepted {
            state.current = previous;
        }

        if is_new_best {
            state.best = state.current.clone();
            state.statistics.last_improvement = state.statistics.iteration;
            self.telemetry.on_best(state.statistics.iteration, &state.best);
        }

        let since_change = state.statistics.iteration - state.statistics.last_improvement.max(state.last_restart);
        if self.config.restart_after.is_some_and(|limit| since_change >= limit) {
            self.telemetry.on_restart(&state.statistics);
            state.current = state.best.clone();
            state.last_restart = state.statistics.iteration;
        }

        let estimate = self.termination.estimate(&state.statistics);
        self.telemetry.on_iteration(&state.statistics, estimate, &state.current, &state.best);
    }
}

fn create_termination(config: &SolverConfig) -> CompositeTermination {
    let mut terminations: Vec<Box<dyn Termination + Send + Sync>> = vec![];

    if let Some(limit) = config.time_limit_seconds {
        terminations.push(Box::new(MaxTime::new(limit)));
    }

    if let Some(limit) = config.max_iterations {
        terminations.push(Box::new(MaxIterations::new(limit)));
    }

    CompositeTermination::new(terminations)
}
