//! This crate exposes problem agnostic building blocks which are used to assemble an iterated
//! local search solver: seeded randomization, timing and computational quotas, termination
//! criteria and some helper functionality.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod prelude;
pub mod termination;
pub mod utils;
