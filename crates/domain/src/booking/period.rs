use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::BookingError;

/// A half-open stay interval `[from, to)`: the guest checks in on `from` and
/// the room is free again on `to`.
///
/// Construction enforces `from < to`; a zero-night or inverted period never
/// exists as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayPeriod {
    from: NaiveDate,
    to: NaiveDate,
}

impl StayPeriod {
    /// Builds a period; check-in must fall strictly before check-out.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, BookingError> {
        if from >= to {
            return Err(BookingError::InvalidPeriod { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.from
    }

    pub fn check_out(&self) -> NaiveDate {
        self.to
    }

    /// Number of nights spent in the room.
    pub fn nights(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// True when the two intervals share at least one night.
    ///
    /// Boundaries touching is not overlap: a check-out on another booking's
    /// check-in day leaves the room free to hand over.
    pub fn overlaps(&self, other: StayPeriod) -> bool {
        !(self.to <= other.from || self.from >= other.to)
    }
}
