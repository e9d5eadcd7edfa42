//! Greedy fill-time scheduler.
//!
//! # Algorithm
//!
//! 1. Validate the request (capacities, tap count, walk time, rates).
//! 2. With at least as many taps as containers, everyone fills at once
//!    and the largest container dominates the makespan.
//! 3. Otherwise, assign each container in queue order to the tap that
//!    frees up soonest, tracked with a min-heap keyed by cumulative
//!    busy time. The busiest tap's finish time is the fill time.
//! 4. Walk overhead is added on top: once under full parallelism, once
//!    per queued person under contention.
//!
//! # Complexity
//! O(n log k) for n containers and k taps.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::models::{FillOutcome, FillRequest, TapUsage, DEFAULT_FLOW_RATE};
use crate::validation::{self, InvalidArgument, InvalidArgumentKind};

/// Computes the time to fill a queue of containers at `tap_count` taps,
/// each running at the default flow rate of 100 units/second.
///
/// # Example
///
/// ```
/// use fill_schedule::scheduler::fill_time;
///
/// // Five taps, four containers: the 1000-unit container dominates.
/// assert_eq!(fill_time(&[400, 750, 500, 1000], 5).unwrap(), 10.0);
///
/// // Two taps: containers queue up behind each other.
/// assert_eq!(fill_time(&[400, 750, 500, 1000], 2).unwrap(), 17.5);
/// ```
pub fn fill_time(queue: &[i64], tap_count: usize) -> Result<f64, InvalidArgument> {
    let request = FillRequest::new(queue.to_vec(), tap_count);
    FillScheduler::new().solve(&request).map(|o| o.total_s())
}

/// Like [`fill_time`], with a fixed walk from the queue to a tap.
///
/// Under contention the walk is charged once per queued person: every
/// person individually walks to whichever tap opens up.
///
/// # Example
///
/// ```
/// use fill_schedule::scheduler::fill_time_with_walk;
///
/// assert_eq!(fill_time_with_walk(&[400, 750, 500, 1000], 2, 2).unwrap(), 25.5);
/// ```
pub fn fill_time_with_walk(
    queue: &[i64],
    tap_count: usize,
    walk_time_s: i64,
) -> Result<f64, InvalidArgument> {
    let request = FillRequest::new(queue.to_vec(), tap_count).with_walk_time(walk_time_s);
    FillScheduler::new().solve(&request).map(|o| o.total_s())
}

/// Like [`fill_time_with_walk`], with one flow rate per tap.
///
/// # Example
///
/// ```
/// use fill_schedule::scheduler::fill_time_with_walk_and_rates;
///
/// let t = fill_time_with_walk_and_rates(&[400, 750, 500, 1000], 2, 2, &[100, 50]).unwrap();
/// assert_eq!(t, 27.0);
/// ```
pub fn fill_time_with_walk_and_rates(
    queue: &[i64],
    tap_count: usize,
    walk_time_s: i64,
    tap_rates: &[i64],
) -> Result<f64, InvalidArgument> {
    let request = FillRequest::new(queue.to_vec(), tap_count)
        .with_walk_time(walk_time_s)
        .with_tap_rates(tap_rates.to_vec());
    FillScheduler::new().solve(&request).map(|o| o.total_s())
}

/// Greedy assign-to-soonest-free-tap scheduler.
///
/// Stateless between calls; `solve` is a pure function of the request.
///
/// # Example
///
/// ```
/// use fill_schedule::models::FillRequest;
/// use fill_schedule::scheduler::FillScheduler;
///
/// let request = FillRequest::new(vec![400, 750, 500, 1000], 2);
/// let outcome = FillScheduler::new().solve(&request).unwrap();
/// assert_eq!(outcome.total_s(), 17.5);
/// assert_eq!(outcome.taps.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FillScheduler {
    default_rate: i64,
}

impl FillScheduler {
    /// Creates a scheduler with the default uniform flow rate.
    pub fn new() -> Self {
        Self {
            default_rate: DEFAULT_FLOW_RATE,
        }
    }

    /// Overrides the flow rate used when the request carries no
    /// per-tap rates. Must be positive.
    pub fn with_default_rate(mut self, rate: i64) -> Self {
        self.default_rate = rate;
        self
    }

    /// Solves a fill request.
    ///
    /// # Returns
    /// The makespan breakdown, or `InvalidArgument` if any precondition
    /// is violated. Validation runs before the empty-queue short-circuit.
    pub fn solve(&self, request: &FillRequest) -> Result<FillOutcome, InvalidArgument> {
        if self.default_rate <= 0 {
            return Err(InvalidArgument::new(
                InvalidArgumentKind::NonPositiveRate,
                format!("default flow rate must be positive, got {}", self.default_rate),
            ));
        }
        validation::validate_request(request)?;

        let rate_profile: Vec<i64> = match &request.tap_rates {
            Some(rates) => rates.clone(),
            None => vec![self.default_rate; request.tap_count],
        };

        if request.queue.is_empty() {
            return Ok(FillOutcome::idle(&rate_profile));
        }

        if request.is_fully_parallel() {
            return Ok(solve_parallel(request, &rate_profile));
        }

        let taps = simulate(&request.queue, &rate_profile);
        let fill_s = taps.iter().map(|t| t.busy_s).fold(0.0_f64, f64::max);
        Ok(FillOutcome {
            fill_s,
            walk_s: (request.walk_time_s * request.queue.len() as i64) as f64,
            taps,
        })
    }
}

impl Default for FillScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Full-parallelism case: at least one tap per queued person, so each
/// person takes the tap at their queue position and nobody waits.
fn solve_parallel(request: &FillRequest, rate_profile: &[i64]) -> FillOutcome {
    // First occurrence of the largest container.
    let mut max_idx = 0;
    for (i, &capacity) in request.queue.iter().enumerate() {
        if capacity > request.queue[max_idx] {
            max_idx = i;
        }
    }

    // The fill time divides the largest capacity by the rate of the tap
    // at that container's queue position. The lookup is keyed by queue
    // index, not by which tap ends up holding the container.
    let fill_s = request.queue[max_idx] as f64 / rate_profile[max_idx] as f64;

    let taps = rate_profile
        .iter()
        .enumerate()
        .map(|(i, &rate)| TapUsage {
            rate,
            busy_s: match request.queue.get(i) {
                Some(&capacity) => capacity as f64 / rate as f64,
                None => 0.0,
            },
        })
        .collect();

    FillOutcome {
        fill_s,
        walk_s: request.walk_time_s as f64,
        taps,
    }
}

/// One tap's position in the scheduling heap.
///
/// `seq` orders taps with equal busy time the way a stable re-sort of
/// the bank would: initial slots keep bank order, and a just-assigned
/// tap sorts before older equals. Assignments draw `seq` from a
/// decreasing counter, so on a busy-time tie the next container goes to
/// the most recently assigned tap.
#[derive(Debug, Clone, Copy)]
struct TapSlot {
    busy_s: f64,
    rate: i64,
    seq: i64,
}

impl PartialEq for TapSlot {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TapSlot {}

impl PartialOrd for TapSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TapSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.busy_s
            .total_cmp(&other.busy_s)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Contended case: each container in queue order goes to the tap with
/// the minimum cumulative busy time, each tap filling at its own rate.
///
/// Returns the final per-tap busy times, ascending.
fn simulate(queue: &[i64], rates: &[i64]) -> Vec<TapUsage> {
    let mut heap: BinaryHeap<Reverse<TapSlot>> = rates
        .iter()
        .enumerate()
        .map(|(i, &rate)| {
            Reverse(TapSlot {
                busy_s: 0.0,
                rate,
                seq: i as i64,
            })
        })
        .collect();
    let mut next_seq: i64 = -1;

    for &capacity in queue {
        // The heap is never empty: tap_count >= 2 is validated upstream.
        if let Some(mut top) = heap.peek_mut() {
            top.0.busy_s += capacity as f64 / top.0.rate as f64;
            top.0.seq = next_seq;
            next_seq -= 1;
        }
    }

    let mut taps: Vec<TapUsage> = heap
        .into_iter()
        .map(|Reverse(slot)| TapUsage {
            rate: slot.rate,
            busy_s: slot.busy_s,
        })
        .collect();
    taps.sort_by(|a, b| a.busy_s.total_cmp(&b.busy_s));
    taps
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUEUE: [i64; 4] = [400, 750, 500, 1000];

    #[test]
    fn test_full_parallelism() {
        // Largest container (1000 units) at 100 units/s.
        assert_eq!(fill_time(&QUEUE, 5).unwrap(), 10.0);
        assert_eq!(fill_time(&QUEUE, 4).unwrap(), 10.0);
    }

    #[test]
    fn test_contended_reference_trace() {
        // Two taps, greedy by soonest-free:
        //   400 -> tap A (4.0), 750 -> tap B (7.5),
        //   500 -> tap A (9.0), 1000 -> tap B (17.5).
        assert_eq!(fill_time(&QUEUE, 2).unwrap(), 17.5);
    }

    #[test]
    fn test_contended_three_taps() {
        // 400 -> A (4), 750 -> B (7.5), 500 -> C (5), 1000 -> A (14).
        assert_eq!(fill_time(&QUEUE, 3).unwrap(), 14.0);
    }

    #[test]
    fn test_walk_full_parallelism() {
        // One walk for everyone: 2 + 1000/100.
        assert_eq!(fill_time_with_walk(&QUEUE, 5, 2).unwrap(), 12.0);
    }

    #[test]
    fn test_walk_charged_per_person_under_contention() {
        assert_eq!(fill_time_with_walk(&QUEUE, 2, 2).unwrap(), 25.5);

        let base = fill_time(&QUEUE, 2).unwrap();
        let walked = fill_time_with_walk(&QUEUE, 2, 3).unwrap();
        assert_eq!(walked, base + 3.0 * QUEUE.len() as f64);
    }

    #[test]
    fn test_zero_walk_matches_plain() {
        assert_eq!(
            fill_time_with_walk(&QUEUE, 2, 0).unwrap(),
            fill_time(&QUEUE, 2).unwrap()
        );
    }

    #[test]
    fn test_rates_contended_reference_trace() {
        // Taps at 100 and 50 units/s, walk 2:
        //   400 -> A@100 (4), 750 -> B@50 (15),
        //   500 -> A (9), 1000 -> A (19); 19 + 2*4 = 27.
        let t = fill_time_with_walk_and_rates(&QUEUE, 2, 2, &[100, 50]).unwrap();
        assert_eq!(t, 27.0);
    }

    #[test]
    fn test_rates_stay_paired_with_their_tap() {
        // Three equal containers on taps at 100 and 50: the fast tap
        // takes the first and third, the slow tap the second.
        let t = fill_time_with_walk_and_rates(&[100, 100, 100], 2, 0, &[100, 50]).unwrap();
        assert_eq!(t, 2.0);
    }

    #[test]
    fn test_tie_goes_to_most_recently_assigned_tap() {
        // After the first two containers both taps sit at 1.0s. A
        // stable re-sort of the bank leaves the just-assigned rate-50
        // tap in front, so the tie sends the third container there:
        // 1 + 100/50 = 3, not 1 + 100/100 = 2.
        let t = fill_time_with_walk_and_rates(&[100, 50, 100], 2, 0, &[100, 50]).unwrap();
        assert_eq!(t, 3.0);
    }

    #[test]
    fn test_uniform_rates_match_plain() {
        let t = fill_time_with_walk_and_rates(&QUEUE, 2, 0, &[100, 100]).unwrap();
        assert_eq!(t, fill_time(&QUEUE, 2).unwrap());
    }

    #[test]
    fn test_parallel_rate_keyed_by_queue_position() {
        // The largest container sits at queue index 3, so its fill rate
        // comes from the tap at index 3 (10 units/s), regardless of
        // which tap actually serves it: 2 + 1000/10.
        let t = fill_time_with_walk_and_rates(&QUEUE, 5, 2, &[100, 50, 25, 10, 80]).unwrap();
        assert_eq!(t, 102.0);
    }

    #[test]
    fn test_parallel_rate_uses_first_occurrence_of_max() {
        // Duplicate maxima: index 0 wins, rate 10 applies.
        let t = fill_time_with_walk_and_rates(&[1000, 400, 1000], 3, 0, &[10, 100, 100]).unwrap();
        assert_eq!(t, 100.0);
    }

    #[test]
    fn test_empty_queue_is_zero_for_all_operations() {
        assert_eq!(fill_time(&[], 2).unwrap(), 0.0);
        assert_eq!(fill_time_with_walk(&[], 2, 7).unwrap(), 0.0);
        assert_eq!(fill_time_with_walk_and_rates(&[], 2, 7, &[100, 50]).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let err = fill_time(&[400, -1], 2).unwrap_err();
        assert_eq!(err.kind, InvalidArgumentKind::NonPositiveCapacity);

        let err = fill_time(&[400], 1).unwrap_err();
        assert_eq!(err.kind, InvalidArgumentKind::TooFewTaps);

        let err = fill_time_with_walk(&QUEUE, 2, -1).unwrap_err();
        assert_eq!(err.kind, InvalidArgumentKind::NegativeWalkTime);

        let err = fill_time_with_walk_and_rates(&QUEUE, 2, 1, &[100]).unwrap_err();
        assert_eq!(err.kind, InvalidArgumentKind::RateCountMismatch);
    }

    #[test]
    fn test_determinism_and_non_negativity() {
        let first = fill_time(&QUEUE, 2).unwrap();
        for _ in 0..10 {
            let t = fill_time(&QUEUE, 2).unwrap();
            assert_eq!(t, first);
            assert!(t >= 0.0);
        }
    }

    #[test]
    fn test_outcome_breakdown() {
        let request = FillRequest::new(QUEUE.to_vec(), 2).with_walk_time(2);
        let outcome = FillScheduler::new().solve(&request).unwrap();

        assert_eq!(outcome.fill_s, 17.5);
        assert_eq!(outcome.walk_s, 8.0);
        assert_eq!(outcome.taps.len(), 2);
        // Tap A filled 400 + 500, tap B filled 750 + 1000.
        assert_eq!(outcome.taps[0].busy_s, 9.0);
        assert_eq!(outcome.taps[1].busy_s, 17.5);

        let util = outcome.utilization_by_tap();
        assert!((util[0] - 9.0 / 17.5).abs() < 1e-10);
        assert!((util[1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_custom_default_rate() {
        let request = FillRequest::new(QUEUE.to_vec(), 5);
        let outcome = FillScheduler::new()
            .with_default_rate(50)
            .solve(&request)
            .unwrap();
        assert_eq!(outcome.total_s(), 20.0);

        let err = FillScheduler::new()
            .with_default_rate(0)
            .solve(&request)
            .unwrap_err();
        assert_eq!(err.kind, InvalidArgumentKind::NonPositiveRate);
    }

    #[test]
    fn test_solve_from_json_request() {
        let request: FillRequest = serde_json::from_str(
            r#"{
                "queue": [400, 750, 500, 1000],
                "tap_count": 2,
                "walk_time_s": 2,
                "tap_rates": [100, 50]
            }"#,
        )
        .unwrap();

        let outcome = FillScheduler::new().solve(&request).unwrap();
        assert_eq!(outcome.total_s(), 27.0);
    }
}
