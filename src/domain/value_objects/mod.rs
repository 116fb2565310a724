//! Domain Value Objects
//!
//! Immutable value types shared by the enumerators, reconciler and executor.

mod cancel_flag;
mod clean_patterns;
mod connection;
mod pattern_set;

pub use cancel_flag::CancelFlag;
pub use clean_patterns::CleanPatterns;
pub use connection::{ConnectionParams, DEFAULT_SSH_PORT};
pub use pattern_set::{PatternSet, RejectedPattern};
