#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::models::{Distance, SolverError};
use ils_common::utils::{GenericResult, Random};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A default epsilon used to decide whether a move improves total distance.
pub const DEFAULT_EPSILON: f64 = 1E-9;

/// Specifies how a locally optimal candidate is compared with the current accepted solution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AcceptancePolicy {
    /// Accepts a candidate which is better or equal.
    #[default]
    NotWorse,
    /// Accepts only a strictly better candidate.
    Improving,
    /// Accepts a strictly better candidate or, with given probability, any other one.
    Diversifying {
        /// A probability to accept a candidate which is not better.
        #[serde(rename = "worseProbability")]
        worse_probability: f64,
    },
}

impl AcceptancePolicy {
    /// Returns true if candidate distance is accepted against the current one.
    pub fn accepts(&self, candidate: Distance, current: Distance, epsilon: f64, random: &dyn Random) -> bool {
        let is_better = candidate < current - epsilon;

        match self {
            Self::NotWorse => candidate <= current + epsilon,
            Self::Improving => is_better,
            Self::Diversifying { worse_probability } => is_better || random.is_hit(*worse_probability),
        }
    }
}

/// Specifies solver configuration. No search bound is set by default: at least one of
/// `time_limit_seconds` and `max_iterations` has to be provided.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverConfig {
    /// A wall clock time limit in seconds.
    pub time_limit_seconds: Option<f64>,
    /// A maximum amount of perturbation cycles.
    pub max_iterations: Option<usize>,
    /// A seed of random generator.
    pub random_seed: u64,
    /// A minimal distance decrease considered as an improvement.
    pub first_improvement_epsilon: f64,
    /// An acceptance policy.
    pub acceptance: AcceptancePolicy,
    /// Amount of iterations without a new best solution after which the search restarts from the best one.
    pub restart_after: Option<usize>,
    /// Amount of double-bridge kicks applied in one perturbation.
    pub perturbation_kicks: usize,
    /// A move budget of a single local search descent.
    pub max_local_search_moves: Option<usize>,
    /// Specifies how often (in iterations) progress is logged.
    pub log_every: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_seconds: None,
            max_iterations: None,
            random_seed: 0,
            first_improvement_epsilon: DEFAULT_EPSILON,
            acceptance: AcceptancePolicy::default(),
            restart_after: None,
            perturbation_kicks: 1,
            max_local_search_moves: None,
            log_every: None,
        }
    }
}

impl SolverConfig {
    /// Reads and validates configuration from json.
    pub fn from_reader<R: Read>(reader: R) -> GenericResult<Self> {
        let config: Self =
            serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: {err}"))?;
        config.validate()?;

        Ok(config)
    }

    /// Checks that configuration is usable.
    pub fn validate(&self) -> Result<(), SolverError> {
        let invalid = |reason: &str| Err(SolverError::InvalidConfig(reason.to_string()));

        if self.time_limit_seconds.is_none() && self.max_iterations.is_none() {
            return invalid("either time limit or max iterations must be set");
        }

        if let Some(time_limit) = self.time_limit_seconds {
            if !time_limit.is_finite() || time_limit <= 0. {
                return invalid(format!("time limit must be positive, got {time_limit}").as_str());
            }
        }

        if !self.first_improvement_epsilon.is_finite() || self.first_improvement_epsilon < 0. {
            return invalid("first improvement epsilon must be non-negative");
        }

        if let AcceptancePolicy::Diversifying { worse_probability } = self.acceptance {
            if !(0. ..=1.).contains(&worse_probability) {
                return invalid(format!("worse probability must be in [0, 1], got {worse_probability}").as_str());
            }
        }

        if self.perturbation_kicks == 0 {
            return invalid("perturbation kicks must be positive");
        }

        if self.restart_after == Some(0) {
            return invalid("restart threshold must be positive");
        }

        if self.log_every == Some(0) {
            return invalid("log frequency must be positive");
        }

        Ok(())
    }
}
