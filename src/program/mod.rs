// ABOUTME: Weekly schedule and log engine: assign/clear/log/today/history/list
// ABOUTME: Seven fixed slots hold workout names by reference; logs append per date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Weekly Program Engine
//!
//! A small state machine over the seven schedule slots plus the append-only
//! [`LogHistory`]. Slots store the assigned workout's *name*; workout
//! lifetime belongs entirely to the activity store. Every operation returns
//! a reply string or an error; nothing here prints.

pub mod logs;

use std::fmt::Write;

use chrono::Local;
use tracing::debug;

use repline_core::constants::schedule::{DAYS_PER_WEEK, REST_DAY};
use repline_core::errors::{AppError, AppResult};
use repline_core::models::{LogEntry, Weekday};

use crate::commands::{grammar, Operation};
use crate::store::{ExerciseStore, WorkoutStore};

pub use logs::LogHistory;

/// The weekly schedule: one optional workout name per day, plus the session's
/// log history
#[derive(Debug, Default)]
pub struct WeeklyProgram {
    slots: [Option<String>; DAYS_PER_WEEK],
    logs: LogHistory,
}

impl WeeklyProgram {
    /// Create a program with all seven slots empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Workout name assigned to the given day, if any
    #[must_use]
    pub fn assigned(&self, day: Weekday) -> Option<&str> {
        self.slots[day.index()].as_deref()
    }

    /// Whether every slot is empty and nothing has been logged
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.slots.iter().all(Option::is_none) && self.logs.is_empty()
    }

    /// Read access to the log history
    #[must_use]
    pub const fn logs(&self) -> &LogHistory {
        &self.logs
    }

    /// Occupy a day's slot with a workout name.
    ///
    /// `force` overwrites an occupied slot; only the bulk loader uses it.
    ///
    /// # Errors
    /// `ActivityExists` when the slot is occupied and `force` is false
    pub fn assign(&mut self, workout: &str, day: Weekday, force: bool) -> AppResult<()> {
        if !force {
            if let Some(existing) = self.assigned(day) {
                return Err(AppError::already_assigned(format!(
                    "Workout '{existing}' is already assigned to {}. Clear it first",
                    day.display_name()
                )));
            }
        }
        debug!(workout, day = day.display_name(), "assigning workout");
        self.slots[day.index()] = Some(workout.to_owned());
        Ok(())
    }

    /// Empty one day's slot; clearing an empty slot succeeds silently
    pub fn clear_day(&mut self, day: Weekday) {
        self.slots[day.index()] = None;
    }

    /// Empty all seven slots
    pub fn clear_all(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Render the 7-day schedule, one line per day
    #[must_use]
    pub fn schedule_listing(&self) -> String {
        let mut out = String::from("Your workouts for the week:");
        for day in Weekday::ALL {
            let assigned = self.assigned(day).unwrap_or(REST_DAY);
            let _ = write!(out, "\n\t{}: {}", day.display_name(), assigned);
        }
        out
    }

    /// Append a validated log entry to its date bucket
    pub fn append_log(&mut self, entry: LogEntry) {
        self.logs.append(entry);
    }
}

/// Execute a validated `program` operation.
///
/// # Errors
/// Propagates engine and store errors unchanged; the REPL reports them and
/// continues
pub fn execute(
    program: &mut WeeklyProgram,
    exercises: &ExerciseStore,
    workouts: &WorkoutStore,
    op: &Operation<'_>,
) -> AppResult<String> {
    match op.name() {
        "assign" => {
            let workout = op.primary();
            let day_token = op.flag_joined("to").unwrap_or_default();
            let day = grammar::parse_day(&day_token)?;
            if !workouts.contains(&workout) {
                return Err(AppError::not_found(&workout));
            }
            program.assign(&workout, day, false)?;
            Ok(format!("Workout {workout} assigned to {day_token}"))
        }
        "clear" => {
            let target = op.primary();
            if target.is_empty() {
                program.clear_all();
                Ok("Your weekly program has been cleared".to_owned())
            } else {
                let day = grammar::parse_day(&target)?;
                program.clear_day(day);
                Ok(format!(
                    "Your workout for {} has been cleared",
                    day.display_name()
                ))
            }
        }
        "log" => execute_log(program, exercises, op),
        "today" => {
            let today = Local::now().date_naive();
            let entries = program.logs().entries_on(today);
            if entries.is_empty() {
                Ok(format!("No exercises logged on {today}"))
            } else {
                Ok(logs::day_listing(today, entries))
            }
        }
        "history" => {
            if program.logs().is_empty() {
                Ok("No workout logs found".to_owned())
            } else {
                let mut out = String::from("Listing workout logs:\n");
                let _ = write!(
                    out,
                    "{}",
                    crate::ui::numbered(program.logs().dates().iter().map(ToString::to_string))
                );
                Ok(out)
            }
        }
        "list" => Ok(program.schedule_listing()),
        other => Err(AppError::internal(format!(
            "Unhandled program action '{other}'"
        ))),
    }
}

/// Build and append one log entry from a validated `log` operation.
///
/// The date defaults to the calendar date at execution time, not parse time,
/// so a command replayed across midnight logs against execution time.
fn execute_log(
    program: &mut WeeklyProgram,
    exercises: &ExerciseStore,
    op: &Operation<'_>,
) -> AppResult<String> {
    let exercise = op.primary();
    if !exercises.contains(&exercise) {
        return Err(AppError::not_found(&exercise));
    }

    let weights = parse_all(op.flag("weight").unwrap_or(&[]), |token| {
        grammar::parse_number("weight", token)
    })?;
    let reps = parse_all(op.flag("reps").unwrap_or(&[]), |token| {
        grammar::parse_integer("reps", token)
    })?;
    let sets = weights.len();

    let date = match op.flag_joined("date") {
        Some(token) => grammar::parse_date(&token)?,
        None => Local::now().date_naive(),
    };

    let entry = LogEntry::new(date, &exercise, &weights, &reps);
    let weight_summary: Vec<String> = entry
        .sets
        .iter()
        .map(|set| format!("{}kg", set.weight_display()))
        .collect();
    let rep_summary: Vec<String> = reps.iter().map(ToString::to_string).collect();
    program.append_log(entry);

    Ok(format!(
        "Successfully logged {exercise} with weights of {} and {} reps across {sets} sets on {date}",
        weight_summary.join(","),
        rep_summary.join(","),
    ))
}

fn parse_all<T>(
    tokens: &[String],
    parse: impl Fn(&str) -> AppResult<T>,
) -> AppResult<Vec<T>> {
    tokens.iter().map(|token| parse(token)).collect()
}
