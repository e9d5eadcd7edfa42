//! Fill-time scheduling for a queue of containers at a bank of taps.
//!
//! Models how long a queue of people takes to fill water containers of
//! varying sizes, under three refinements: uniform tap rates, uniform
//! rates plus a walk delay, and per-tap rates plus a walk delay. The
//! core is a greedy scheduler that assigns each container to the tap
//! that frees up soonest and reports the makespan.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `FillRequest`, `FillOutcome`, `TapUsage`
//! - **`validation`**: Precondition checks and the `InvalidArgument` error
//! - **`scheduler`**: The greedy scheduler and its three entry points
//!
//! # Example
//!
//! ```
//! use fill_schedule::scheduler::fill_time;
//!
//! let makespan = fill_time(&[400, 750, 500, 1000], 2)?;
//! assert_eq!(makespan, 17.5);
//! # Ok::<(), fill_schedule::validation::InvalidArgument>(())
//! ```
//!
//! # References
//!
//! - Graham (1966), "Bounds for Certain Multiprocessing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod scheduler;
pub mod validation;
