// ABOUTME: Weekday enumeration for the 7 fixed schedule slots
// ABOUTME: Resolves user day tokens (full names and aliases) to canonical days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};

/// The seven fixed schedule days.
///
/// User input is resolved case-insensitively through [`Weekday::resolve`],
/// which accepts canonical names and a fixed alias table ("mon", "thurs",
/// ...). Aliases exist only at parse time; everything downstream works with
/// the canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    /// First schedule slot
    Monday,
    /// Second schedule slot
    Tuesday,
    /// Third schedule slot
    Wednesday,
    /// Fourth schedule slot
    Thursday,
    /// Fifth schedule slot
    Friday,
    /// Sixth schedule slot
    Saturday,
    /// Seventh schedule slot
    Sunday,
}

impl Weekday {
    /// All days in schedule order, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Resolve a user token to a canonical day.
    ///
    /// Matching is case-insensitive and accepts the canonical full name plus
    /// the fixed abbreviation aliases. Returns `None` for anything else;
    /// callers decide whether that is an input error.
    #[must_use]
    pub fn resolve(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "mon" | "monday" => Some(Self::Monday),
            "tue" | "tues" | "tuesday" => Some(Self::Tuesday),
            "wed" | "wednesday" => Some(Self::Wednesday),
            "thu" | "thur" | "thurs" | "thursday" => Some(Self::Thursday),
            "fri" | "friday" => Some(Self::Friday),
            "sat" | "saturday" => Some(Self::Saturday),
            "sun" | "sunday" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Canonical uppercase name used in schedule listings
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }

    /// Lowercase key used in the persisted archive
    #[must_use]
    pub const fn archive_key(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Position of this day in schedule order, 0-based from Monday
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Map a `chrono` weekday onto the schedule day
    #[must_use]
    pub const fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_aliases_any_casing() {
        assert_eq!(Weekday::resolve("THURS"), Some(Weekday::Thursday));
        assert_eq!(Weekday::resolve("Thursday"), Some(Weekday::Thursday));
        assert_eq!(Weekday::resolve("tue"), Some(Weekday::Tuesday));
        assert_eq!(Weekday::resolve("SuN"), Some(Weekday::Sunday));
    }

    #[test]
    fn resolve_rejects_unknown_tokens() {
        assert_eq!(Weekday::resolve("noday"), None);
        assert_eq!(Weekday::resolve("2024-03-11"), None);
        assert_eq!(Weekday::resolve(""), None);
    }

    #[test]
    fn schedule_order_is_stable() {
        assert_eq!(Weekday::ALL.len(), 7);
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Sunday.index(), 6);
    }
}
