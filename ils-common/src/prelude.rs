//! This module reimports a common used types.

pub use crate::termination::CompositeTermination;
pub use crate::termination::HeuristicStatistics;
pub use crate::termination::MaxIterations;
pub use crate::termination::MaxTime;
pub use crate::termination::Termination;

pub use crate::utils::compare_floats;
pub use crate::utils::CompositeQuota;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::InterruptQuota;
pub use crate::utils::Quota;
pub use crate::utils::Random;
pub use crate::utils::TimeQuota;
pub use crate::utils::Timer;
