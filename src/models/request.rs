//! Fill request model.
//!
//! Describes one fill-scheduling problem: a queue of containers, a bank
//! of taps, and the optional walk delay and per-tap flow rates of the
//! refined models. Queue order is service order.

use serde::{Deserialize, Serialize};

/// Flow rate assumed for every tap when no per-tap rates are given
/// (volume units per second).
pub const DEFAULT_FLOW_RATE: i64 = 100;

/// Input container for a fill-scheduling problem.
///
/// # Example
///
/// ```
/// use fill_schedule::models::FillRequest;
///
/// let request = FillRequest::new(vec![400, 750, 500, 1000], 2)
///     .with_walk_time(2)
///     .with_tap_rates(vec![100, 50]);
/// assert_eq!(request.tap_count, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillRequest {
    /// Container capacities in queue order (volume units).
    pub queue: Vec<i64>,
    /// Number of taps in the bank.
    pub tap_count: usize,
    /// Time for one person to walk from the queue to a tap (seconds).
    #[serde(default)]
    pub walk_time_s: i64,
    /// Per-tap flow rates (units/second), co-indexed with the taps.
    /// `None` means every tap runs at [`DEFAULT_FLOW_RATE`].
    #[serde(default)]
    pub tap_rates: Option<Vec<i64>>,
}

impl FillRequest {
    /// Creates a request with no walk delay and uniform tap rates.
    pub fn new(queue: Vec<i64>, tap_count: usize) -> Self {
        Self {
            queue,
            tap_count,
            walk_time_s: 0,
            tap_rates: None,
        }
    }

    /// Sets the per-person walk time.
    pub fn with_walk_time(mut self, walk_time_s: i64) -> Self {
        self.walk_time_s = walk_time_s;
        self
    }

    /// Sets per-tap flow rates. Length must match `tap_count`.
    pub fn with_tap_rates(mut self, tap_rates: Vec<i64>) -> Self {
        self.tap_rates = Some(tap_rates);
        self
    }

    /// Whether every tap can take a container at once.
    #[inline]
    pub fn is_fully_parallel(&self) -> bool {
        self.queue.len() <= self.tap_count
    }
}
