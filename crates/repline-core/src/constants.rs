// ABOUTME: Shared constants for the Repline fitness tracker
// ABOUTME: Pure data constants organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Application constants grouped by domain rather than scattered through the
//! code that uses them.

/// Command-line grammar constants
pub mod grammar {
    /// Prefix character that opens a flag token
    pub const FLAG_SENTINEL: char = '/';

    /// Format accepted by `/date` values (ISO calendar date)
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Schedule constants
pub mod schedule {
    /// Number of slots in the weekly schedule
    pub const DAYS_PER_WEEK: usize = 7;

    /// Label shown for an unassigned day
    pub const REST_DAY: &str = "Rest day";
}

/// Console output constants
pub mod output {
    /// Prefix printed before every tracker response
    pub const RESPONSE_PREFIX: &str = "[REPLINE]> ";

    /// Separator line printed after every tracker response
    pub const SEPARATOR: &str = "-------------------------------------------------";
}
