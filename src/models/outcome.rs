//! Fill outcome (solution) model.
//!
//! The result of solving a fill request: the makespan split into its
//! fill and walk components, plus the final per-tap busy times from
//! which simple utilization figures can be derived.

use serde::{Deserialize, Serialize};

/// Final state of one tap after all containers are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TapUsage {
    /// Flow rate of this tap (units/second).
    pub rate: i64,
    /// Cumulative time the tap spent filling (seconds).
    pub busy_s: f64,
}

/// Solution to a fill-scheduling problem.
///
/// `total_s()` is the makespan: the elapsed time until the last
/// container is full, including walk overhead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FillOutcome {
    /// Time until the busiest tap finishes filling (seconds).
    pub fill_s: f64,
    /// Total walk overhead charged to the makespan (seconds).
    pub walk_s: f64,
    /// Final per-tap busy times.
    pub taps: Vec<TapUsage>,
}

impl FillOutcome {
    /// An outcome for an empty queue: nothing to fill, all taps idle.
    pub fn idle(rates: &[i64]) -> Self {
        Self {
            fill_s: 0.0,
            walk_s: 0.0,
            taps: rates.iter().map(|&rate| TapUsage { rate, busy_s: 0.0 }).collect(),
        }
    }

    /// Makespan: fill time plus walk overhead (seconds).
    #[inline]
    pub fn total_s(&self) -> f64 {
        self.fill_s + self.walk_s
    }

    /// Per-tap utilization: busy time over the longest busy time.
    ///
    /// An idle bank yields all zeros.
    pub fn utilization_by_tap(&self) -> Vec<f64> {
        let max_busy = self
            .taps
            .iter()
            .map(|t| t.busy_s)
            .fold(0.0_f64, f64::max);
        if max_busy <= 0.0 {
            return vec![0.0; self.taps.len()];
        }
        self.taps.iter().map(|t| t.busy_s / max_busy).collect()
    }

    /// Mean utilization across the bank (0.0 for an empty bank).
    pub fn avg_utilization(&self) -> f64 {
        let by_tap = self.utilization_by_tap();
        if by_tap.is_empty() {
            return 0.0;
        }
        by_tap.iter().sum::<f64>() / by_tap.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_outcome() {
        let outcome = FillOutcome::idle(&[100, 50]);
        assert_eq!(outcome.total_s(), 0.0);
        assert_eq!(outcome.taps.len(), 2);
        assert_eq!(outcome.utilization_by_tap(), vec![0.0, 0.0]);
        assert_eq!(outcome.avg_utilization(), 0.0);
    }

    #[test]
    fn test_total_includes_walk() {
        let outcome = FillOutcome {
            fill_s: 17.5,
            walk_s: 8.0,
            taps: vec![],
        };
        assert!((outcome.total_s() - 25.5).abs() < 1e-10);
    }

    #[test]
    fn test_utilization() {
        let outcome = FillOutcome {
            fill_s: 10.0,
            walk_s: 0.0,
            taps: vec![
                TapUsage { rate: 100, busy_s: 5.0 },
                TapUsage { rate: 100, busy_s: 10.0 },
            ],
        };
        let util = outcome.utilization_by_tap();
        assert!((util[0] - 0.5).abs() < 1e-10);
        assert!((util[1] - 1.0).abs() < 1e-10);
        assert!((outcome.avg_utilization() - 0.75).abs() < 1e-10);
    }
}
