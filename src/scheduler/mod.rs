//! Greedy fill-time scheduling.
//!
//! Provides the fill scheduler and its three entry points, one per
//! refinement of the model:
//!
//! 1. [`fill_time`] — uniform flow rate
//! 2. [`fill_time_with_walk`] — uniform rate plus a walk delay
//! 3. [`fill_time_with_walk_and_rates`] — per-tap rates plus a walk delay
//!
//! # Algorithm
//!
//! Greedy list scheduling: each container goes to the tap that frees up
//! soonest. Not optimal in general, but matches the first-come
//! first-served behavior of a real queue at a bank of taps.
//!
//! # References
//!
//! - Graham (1966), "Bounds for Certain Multiprocessing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod fill;

pub use fill::{fill_time, fill_time_with_walk, fill_time_with_walk_and_rates, FillScheduler};
