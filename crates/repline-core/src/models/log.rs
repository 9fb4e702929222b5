// ABOUTME: Immutable workout log records: one logged exercise with its sets
// ABOUTME: Weight/rep pairs are zipped positionally and fixed at creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One performed set: weight moved for a number of repetitions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    /// Weight in kilograms
    pub weight: f64,
    /// Repetition count
    pub reps: u32,
}

impl LoggedSet {
    /// Render the weight without a trailing `.0` for whole numbers
    #[must_use]
    pub fn weight_display(&self) -> String {
        if self.weight.fract() == 0.0 {
            format!("{}", self.weight as i64)
        } else {
            format!("{}", self.weight)
        }
    }
}

/// An immutable record of one exercise's performed sets on a specific date.
///
/// Invariant: `sets` is non-empty and its length equals the set count the
/// user declared; the engine validates this before construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Date the sets were performed
    pub date: NaiveDate,
    /// Name of the logged exercise
    pub exercise: String,
    /// Performed sets in order
    pub sets: Vec<LoggedSet>,
}

impl LogEntry {
    /// Build an entry by zipping weights and reps positionally.
    ///
    /// Callers must have validated that the two sequences have equal length;
    /// extra elements on either side are dropped by the zip.
    #[must_use]
    pub fn new(date: NaiveDate, exercise: impl Into<String>, weights: &[f64], reps: &[u32]) -> Self {
        let sets = weights
            .iter()
            .zip(reps.iter())
            .map(|(&weight, &reps)| LoggedSet { weight, reps })
            .collect();
        Self {
            date,
            exercise: exercise.into(),
            sets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zips_weights_and_reps_positionally() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
        let entry = LogEntry::new(date, "benchpress", &[60.0, 70.0, 80.0], &[5, 8, 10]);
        assert_eq!(entry.sets.len(), 3);
        assert_eq!(entry.sets[1], LoggedSet { weight: 70.0, reps: 8 });
    }

    #[test]
    fn weight_display_trims_whole_numbers() {
        let set = LoggedSet { weight: 60.0, reps: 5 };
        assert_eq!(set.weight_display(), "60");
        let set = LoggedSet { weight: 62.5, reps: 5 };
        assert_eq!(set.weight_display(), "62.5");
    }
}
