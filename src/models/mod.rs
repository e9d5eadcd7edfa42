//! Fill-scheduling domain models.
//!
//! Core data types for stating a fill problem and reporting its solution.
//!
//! | Type | Role |
//! |------|------|
//! | `FillRequest` | Queue of containers + tap bank + walk/rate parameters |
//! | `FillOutcome` | Makespan split into fill and walk components |
//! | `TapUsage` | Final busy time of one tap |

mod outcome;
mod request;

pub use outcome::{FillOutcome, TapUsage};
pub use request::{FillRequest, DEFAULT_FLOW_RATE};
