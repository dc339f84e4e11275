#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{DefaultRandom, Random, Timer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Specifies a computational quota for a long running operation.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as user cancellation, timer, etc.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// A time quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: f64,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_f64() >= self.limit_in_secs
    }
}

/// A quota which is reached when a shared stop flag is raised by the caller.
#[derive(Clone, Default)]
pub struct InterruptQuota {
    flag: Arc<AtomicBool>,
}

impl InterruptQuota {
    /// Creates a new instance of `InterruptQuota` observing the given flag.
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Raises the stop flag.
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Returns a handle to the underlying flag.
    pub fn flag(&self) -> Arc<AtomicBool> {
        self.flag.clone()
    }
}

impl Quota for InterruptQuota {
    fn is_reached(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// A quota which is reached as soon as any of inner quotas is reached.
pub struct CompositeQuota {
    inner: Vec<Arc<dyn Quota + Send + Sync>>,
}

impl CompositeQuota {
    /// Creates a new instance of `CompositeQuota`.
    pub fn new(inner: Vec<Arc<dyn Quota + Send + Sync>>) -> Self {
        Self { inner }
    }
}

impl Quota for CompositeQuota {
    fn is_reached(&self) -> bool {
        self.inner.iter().any(|quota| quota.is_reached())
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
/// Each solve owns its environment: nothing in it is shared with other solves unless the
/// caller explicitly clones the logger or the quota.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A global execution quota.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with seeded random generator and stdout logger.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }

    /// Replaces the quota.
    pub fn with_quota(self, quota: Option<Arc<dyn Quota + Send + Sync>>) -> Self {
        Self { quota, ..self }
    }

    /// Replaces the logger.
    pub fn with_logger(self, logger: InfoLogger) -> Self {
        Self { logger, ..self }
    }

    /// Replaces the logger with the one which ignores all messages.
    pub fn silent(self) -> Self {
        self.with_logger(Arc::new(|_: &str| {}))
    }

    /// Returns true if quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { random: Arc::new(DefaultRandom::default()), quota: None, logger: Arc::new(|msg: &str| println!("{msg}")) }
    }
}
