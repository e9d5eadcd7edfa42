//! Input validation for fill requests.
//!
//! Checks preconditions before any scheduling work. Detects:
//! - Non-positive container capacities
//! - A tap bank too small to schedule over (fewer than 2 taps)
//! - Negative walk time
//! - Non-positive or mismatched-length tap rates
//!
//! Every violation is immediately fatal to the call: no partial results,
//! no defaults substituted.

use std::error::Error;
use std::fmt;

use crate::models::FillRequest;

/// An argument that violates the scheduler's preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    /// Error category.
    pub kind: InvalidArgumentKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of argument errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgumentKind {
    /// A container capacity is zero or negative.
    NonPositiveCapacity,
    /// The tap bank has fewer than 2 taps.
    TooFewTaps,
    /// The walk time is negative.
    NegativeWalkTime,
    /// A tap flow rate is zero or negative.
    NonPositiveRate,
    /// The rate list length does not match the tap count.
    RateCountMismatch,
}

impl InvalidArgument {
    /// Creates a new argument error.
    pub fn new(kind: InvalidArgumentKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid argument: {}", self.message)
    }
}

impl Error for InvalidArgument {}

/// Validates a fill request.
///
/// Checks:
/// 1. Every container capacity is a positive integer
/// 2. At least 2 taps
/// 3. Non-negative walk time
/// 4. If per-tap rates are given: all positive, one per tap
///
/// # Returns
/// `Ok(())` if all checks pass, `Err` with the first violation found.
pub fn validate_request(request: &FillRequest) -> Result<(), InvalidArgument> {
    for &capacity in &request.queue {
        if capacity <= 0 {
            return Err(InvalidArgument::new(
                InvalidArgumentKind::NonPositiveCapacity,
                format!("container capacity must be positive, got {capacity}"),
            ));
        }
    }

    if request.tap_count < 2 {
        return Err(InvalidArgument::new(
            InvalidArgumentKind::TooFewTaps,
            format!("tap count must be greater than 1, got {}", request.tap_count),
        ));
    }

    if request.walk_time_s < 0 {
        return Err(InvalidArgument::new(
            InvalidArgumentKind::NegativeWalkTime,
            format!("walk time must be non-negative, got {}", request.walk_time_s),
        ));
    }

    if let Some(rates) = &request.tap_rates {
        for &rate in rates {
            if rate <= 0 {
                return Err(InvalidArgument::new(
                    InvalidArgumentKind::NonPositiveRate,
                    format!("tap flow rate must be positive, got {rate}"),
                ));
            }
        }
        if rates.len() != request.tap_count {
            return Err(InvalidArgument::new(
                InvalidArgumentKind::RateCountMismatch,
                format!(
                    "expected one flow rate per tap ({} taps), got {}",
                    request.tap_count,
                    rates.len()
                ),
            ));
        }
    }

    Ok(())
}
