// ABOUTME: Append-only workout log history bucketed per calendar date
// ABOUTME: Dates are listed in first-insertion order, never sorted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::collections::HashMap;
use std::fmt::Write;

use chrono::NaiveDate;

use repline_core::models::LogEntry;

/// Per-date buckets of log entries plus the distinct dates observed.
///
/// Entries within a date keep logging order; the date listing keeps
/// first-insertion order. There is no deletion path, and the history is
/// session-local: it is never persisted.
#[derive(Debug, Default)]
pub struct LogHistory {
    by_date: HashMap<NaiveDate, Vec<LogEntry>>,
    order: Vec<NaiveDate>,
}

impl LogHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to its date bucket
    pub fn append(&mut self, entry: LogEntry) {
        let bucket = self.by_date.entry(entry.date).or_default();
        if bucket.is_empty() {
            self.order.push(entry.date);
        }
        bucket.push(entry);
    }

    /// Entries logged on the given date, in logging order
    #[must_use]
    pub fn entries_on(&self, date: NaiveDate) -> &[LogEntry] {
        self.by_date.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Distinct logged dates in first-insertion order
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.order
    }

    /// Whether nothing has been logged this session
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Render one date's entries as a numbered exercise list with numbered sets
#[must_use]
pub fn day_listing(date: NaiveDate, entries: &[LogEntry]) -> String {
    let mut out = format!("Listing exercises on {date}:");
    for (position, entry) in entries.iter().enumerate() {
        let _ = write!(out, "\n{}. {}", position + 1, entry.exercise);
        for (set_number, set) in entry.sets.iter().enumerate() {
            let _ = write!(
                out,
                "\n   Set {}: {}kg, {} reps",
                set_number + 1,
                set.weight_display(),
                set.reps
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use repline_core::models::LoggedSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dates_keep_first_insertion_order() {
        let mut history = LogHistory::new();
        let earlier = date(2024, 3, 25);
        let later = date(2024, 4, 1);
        history.append(LogEntry::new(later, "deadlift", &[100.0], &[5]));
        history.append(LogEntry::new(earlier, "benchpress", &[60.0], &[5]));
        history.append(LogEntry::new(later, "benchpress", &[60.0], &[5]));
        assert_eq!(history.dates(), &[later, earlier]);
        assert_eq!(history.entries_on(later).len(), 2);
    }

    #[test]
    fn day_listing_numbers_exercises_and_sets() {
        let day = date(2024, 3, 25);
        let entries = vec![LogEntry {
            date: day,
            exercise: "benchpress".to_owned(),
            sets: vec![
                LoggedSet { weight: 60.0, reps: 5 },
                LoggedSet { weight: 70.0, reps: 8 },
            ],
        }];
        let listing = day_listing(day, &entries);
        assert!(listing.contains("1. benchpress"));
        assert!(listing.contains("Set 1: 60kg, 5 reps"));
        assert!(listing.contains("Set 2: 70kg, 8 reps"));
    }
}
