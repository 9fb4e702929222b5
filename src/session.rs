// ABOUTME: Session context struct owning all tracker state for one run
// ABOUTME: Routes each validated command to its handler; no ambient globals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use repline_core::errors::{AppError, AppResult};

use crate::commands;
use crate::help;
use crate::program::{self, WeeklyProgram};
use crate::store::{self, ExerciseStore, WorkoutStore};

/// What the REPL should do after one executed command
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this reply and read the next line
    Reply(String),
    /// Leave the read loop and save the snapshot
    Exit,
}

/// All state for one interactive run: the two catalogs and the weekly
/// program engine. Passed explicitly to every operation; constructing a
/// second `Session` gives full test isolation.
#[derive(Debug, Default)]
pub struct Session {
    exercises: ExerciseStore,
    workouts: WorkoutStore,
    program: WeeklyProgram,
}

impl Session {
    /// Create a session with empty catalogs and an all-rest schedule
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the exercise catalog
    #[must_use]
    pub const fn exercises(&self) -> &ExerciseStore {
        &self.exercises
    }

    /// Mutable access to the exercise catalog (bulk load)
    pub fn exercises_mut(&mut self) -> &mut ExerciseStore {
        &mut self.exercises
    }

    /// Read access to the workout catalog
    #[must_use]
    pub const fn workouts(&self) -> &WorkoutStore {
        &self.workouts
    }

    /// Mutable access to the workout catalog (bulk load)
    pub fn workouts_mut(&mut self) -> &mut WorkoutStore {
        &mut self.workouts
    }

    /// Read access to the weekly program engine
    #[must_use]
    pub const fn program(&self) -> &WeeklyProgram {
        &self.program
    }

    /// Mutable access to the weekly program engine (bulk load)
    pub fn program_mut(&mut self) -> &mut WeeklyProgram {
        &mut self.program
    }

    /// Whether nothing has been added, assigned, or logged yet.
    ///
    /// The snapshot loader requires a clean session before populating.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.exercises.is_empty() && self.workouts.is_empty() && self.program.is_clean()
    }

    /// Parse, validate, and apply one input line.
    ///
    /// One command is fully applied before the next line is read; errors
    /// leave already-applied state untouched and the session continues.
    ///
    /// # Errors
    /// Every grammar, store, and engine error is surfaced unchanged
    pub fn execute(&mut self, line: &str) -> AppResult<Outcome> {
        let cmd = commands::parse(line);
        match cmd.action.as_str() {
            "exercise" => {
                let op = commands::validate(&cmd)?;
                store::exercises::execute(&mut self.exercises, &op).map(Outcome::Reply)
            }
            "workout" => {
                let op = commands::validate(&cmd)?;
                store::workouts::execute(&mut self.workouts, &self.exercises, &op)
                    .map(Outcome::Reply)
            }
            "program" => {
                let op = commands::validate(&cmd)?;
                program::execute(&mut self.program, &self.exercises, &self.workouts, &op)
                    .map(Outcome::Reply)
            }
            "help" => help::execute(&cmd).map(Outcome::Reply),
            "exit" | "bye" => Ok(Outcome::Exit),
            "" => Err(AppError::invalid_input(
                "Empty input. Type 'help' to see what I can do",
            )),
            other => Err(AppError::invalid_input(format!(
                "Unknown command '{other}'. Type 'help' to see what I can do"
            ))),
        }
    }
}
