// ABOUTME: Workout catalog: create/delete/edit/assign/unassign/info/search/list
// ABOUTME: Workout plans hold ordered exercise names drawn from the exercise store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt::Write;

use tracing::debug;

use repline_core::errors::{AppError, AppResult};
use repline_core::models::Workout;

use crate::commands::Operation;
use crate::store::ExerciseStore;
use crate::ui;

/// Insertion-ordered, name-keyed workout catalog
#[derive(Debug, Default)]
pub struct WorkoutStore {
    items: Vec<Workout>,
}

impl WorkoutStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the named workout exists (exact, case-sensitive match)
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|w| w.name == name)
    }

    /// Number of stored workouts
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stored workouts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.items.iter()
    }

    /// Look up a workout by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Workout> {
        self.items.iter().find(|w| w.name == name)
    }

    /// Create a new empty workout plan.
    ///
    /// # Errors
    /// `ActivityAddFailed` when a workout with this name already exists
    pub fn create(&mut self, name: &str) -> AppResult<()> {
        if self.contains(name) {
            return Err(AppError::add_failed(format!(
                "The workout '{name}' already exists"
            )));
        }
        debug!(workout = name, "creating workout");
        self.items.push(Workout::new(name));
        Ok(())
    }

    /// Remove a workout by name.
    ///
    /// Schedule slots referencing the workout keep the name they hold.
    ///
    /// # Errors
    /// `ActivityNotFound` when no workout has this name
    pub fn delete(&mut self, name: &str) -> AppResult<Workout> {
        let position = self
            .items
            .iter()
            .position(|w| w.name == name)
            .ok_or_else(|| AppError::not_found(name))?;
        Ok(self.items.remove(position))
    }

    /// Rename a workout in place.
    ///
    /// # Errors
    /// `ActivityNotFound` for an unknown old name, `ActivityAddFailed` when
    /// the new name is already taken
    pub fn rename(&mut self, old: &str, new: &str) -> AppResult<()> {
        if self.contains(new) {
            return Err(AppError::add_failed(format!(
                "The workout '{new}' already exists"
            )));
        }
        let entry = self
            .items
            .iter_mut()
            .find(|w| w.name == old)
            .ok_or_else(|| AppError::not_found(old))?;
        new.clone_into(&mut entry.name);
        Ok(())
    }

    /// Append an exercise name to a workout plan.
    ///
    /// The same exercise may appear more than once in a plan.
    ///
    /// # Errors
    /// `ActivityNotFound` when the workout does not exist
    pub fn add_exercise(&mut self, workout: &str, exercise: &str) -> AppResult<()> {
        let entry = self
            .items
            .iter_mut()
            .find(|w| w.name == workout)
            .ok_or_else(|| AppError::not_found(workout))?;
        entry.exercises.push(exercise.to_owned());
        Ok(())
    }

    /// Remove the first occurrence of an exercise name from a workout plan.
    ///
    /// # Errors
    /// `ActivityNotFound` when the workout does not exist or the exercise is
    /// not part of it
    pub fn remove_exercise(&mut self, workout: &str, exercise: &str) -> AppResult<()> {
        let entry = self
            .items
            .iter_mut()
            .find(|w| w.name == workout)
            .ok_or_else(|| AppError::not_found(workout))?;
        let position = entry
            .exercises
            .iter()
            .position(|e| e == exercise)
            .ok_or_else(|| {
                AppError::new(
                    repline_core::errors::ErrorCode::ActivityNotFound,
                    format!("Exercise '{exercise}' is not part of workout '{workout}'"),
                )
            })?;
        entry.exercises.remove(position);
        Ok(())
    }

    /// Workout names containing the search term, case-insensitively
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&str> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|w| w.name.to_lowercase().contains(&needle))
            .map(|w| w.name.as_str())
            .collect()
    }
}

/// Execute a validated `workout` operation against the catalogs.
///
/// # Errors
/// Propagates store errors unchanged; the REPL reports them and continues
pub fn execute(
    workouts: &mut WorkoutStore,
    exercises: &ExerciseStore,
    op: &Operation<'_>,
) -> AppResult<String> {
    match op.name() {
        "create" => {
            let name = op.primary();
            workouts.create(&name)?;
            Ok(format!("Added workout plan: {name}"))
        }
        "delete" => {
            let name = op.primary();
            workouts.delete(&name)?;
            Ok(format!("Deleted workout plan: {name}"))
        }
        "edit" => {
            let old = op.primary();
            let new = op.flag_joined("to").unwrap_or_default();
            workouts.rename(&old, &new)?;
            Ok(format!("Edited workout plan from {old} to {new}"))
        }
        "assign" => {
            let exercise = op.primary();
            let workout = op.flag_joined("to").unwrap_or_default();
            if !exercises.contains(&exercise) {
                return Err(AppError::not_found(&exercise));
            }
            workouts.add_exercise(&workout, &exercise)?;
            Ok(format!(
                "Assigned exercise '{exercise}' to workout plan '{workout}'"
            ))
        }
        "unassign" => {
            let exercise = op.primary();
            let workout = op.flag_joined("from").unwrap_or_default();
            workouts.remove_exercise(&workout, &exercise)?;
            Ok(format!(
                "Unassigned exercise '{exercise}' from workout plan '{workout}'"
            ))
        }
        "info" => {
            let name = op.primary();
            let workout = workouts.get(&name).ok_or_else(|| AppError::not_found(&name))?;
            if workout.exercises.is_empty() {
                Ok(format!("Your workout plan '{name}' is empty"))
            } else {
                let mut out = format!("'{name}' contains the following exercises:\n");
                let _ = write!(
                    out,
                    "{}",
                    ui::numbered(workout.exercises.iter().map(String::as_str))
                );
                Ok(out)
            }
        }
        "search" => {
            let term = op.primary();
            let matches = workouts.search(&term);
            if matches.is_empty() {
                Ok(format!("No workouts matching '{term}' found"))
            } else {
                let mut out = String::from("Search results:\n");
                let _ = write!(out, "{}", ui::numbered(matches.into_iter()));
                Ok(out)
            }
        }
        "list" => {
            if workouts.is_empty() {
                Ok("Your workout list is empty".to_owned())
            } else {
                let mut out = String::from("Listing workout plans:\n");
                let _ = write!(
                    out,
                    "{}",
                    ui::numbered(workouts.iter().map(|w| w.name.as_str()))
                );
                Ok(out)
            }
        }
        other => Err(AppError::internal(format!(
            "Unhandled workout action '{other}'"
        ))),
    }
}
