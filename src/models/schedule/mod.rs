// Schedule models
// Busy intervals, per-person schedules, and the proposed common slot

use std::collections::{BTreeMap, BTreeSet};

/// One contiguous busy period for one person on one day.
///
/// Created by the optimizer contract mapping; read-only to the rendering
/// core. `start_hour < end_hour`, both within the grid's day bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    pub day: String,
    pub start_hour: f64,
    pub end_hour: f64,
}

impl Interval {
    pub fn new(day: impl Into<String>, start_hour: f64, end_hour: f64) -> Self {
        Self {
            day: day.into(),
            start_hour,
            end_hour,
        }
    }
}

/// Busy intervals per person, keyed by display name.
///
/// A BTreeMap keeps card order deterministic across renders.
pub type PersonSchedules = BTreeMap<String, Vec<Interval>>;

/// The proposed common free period returned by the optimization service.
///
/// `start_hour` is already numeric: clock strings are parsed once at the
/// contract edge, never inside rendering logic.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSlot {
    pub day: String,
    pub start_hour: f64,
    pub duration_hours: f64,
    /// Persons whose card receives the highlight overlay.
    pub eligible: BTreeSet<String>,
    pub available: usize,
    pub total: usize,
}

impl CandidateSlot {
    pub fn end_hour(&self) -> f64 {
        self.start_hour + self.duration_hours
    }

    /// The occupied interval this slot would claim on the grid.
    pub fn interval(&self) -> Interval {
        Interval::new(self.day.clone(), self.start_hour, self.end_hour())
    }

    pub fn is_eligible(&self, person: &str) -> bool {
        self.eligible.contains(person)
    }
}
