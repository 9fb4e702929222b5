// ABOUTME: Exercise catalog: add/delete/edit/search/list over named exercises
// ABOUTME: Backs both user commands and the log engine's existence checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt::Write;

use tracing::debug;

use repline_core::errors::{AppError, AppResult};
use repline_core::models::Exercise;

use crate::commands::Operation;
use crate::ui;

/// Insertion-ordered, name-keyed exercise catalog
#[derive(Debug, Default)]
pub struct ExerciseStore {
    items: Vec<Exercise>,
}

impl ExerciseStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the named exercise exists (exact, case-sensitive match)
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|e| e.name == name)
    }

    /// Number of stored exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exercise names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|e| e.name.as_str())
    }

    /// Add a new exercise.
    ///
    /// # Errors
    /// `ActivityAddFailed` when an exercise with this name already exists
    pub fn add(&mut self, name: &str) -> AppResult<()> {
        if self.contains(name) {
            return Err(AppError::add_failed(format!(
                "The exercise '{name}' already exists"
            )));
        }
        debug!(exercise = name, "adding exercise");
        self.items.push(Exercise::new(name));
        Ok(())
    }

    /// Remove an exercise by name.
    ///
    /// Workouts referencing the exercise keep the name; slots and plans hold
    /// names, not references.
    ///
    /// # Errors
    /// `ActivityNotFound` when no exercise has this name
    pub fn delete(&mut self, name: &str) -> AppResult<Exercise> {
        let position = self
            .items
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| AppError::not_found(name))?;
        Ok(self.items.remove(position))
    }

    /// Rename an exercise in place.
    ///
    /// # Errors
    /// `ActivityNotFound` for an unknown old name, `ActivityAddFailed` when
    /// the new name is already taken
    pub fn rename(&mut self, old: &str, new: &str) -> AppResult<()> {
        if self.contains(new) {
            return Err(AppError::add_failed(format!(
                "The exercise '{new}' already exists"
            )));
        }
        let entry = self
            .items
            .iter_mut()
            .find(|e| e.name == old)
            .ok_or_else(|| AppError::not_found(old))?;
        new.clone_into(&mut entry.name);
        Ok(())
    }

    /// Names containing the search term, case-insensitively, in order
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&str> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .map(|e| e.name.as_str())
            .collect()
    }
}

/// Execute a validated `exercise` operation against the store.
///
/// # Errors
/// Propagates store errors unchanged; the REPL reports them and continues
pub fn execute(store: &mut ExerciseStore, op: &Operation<'_>) -> AppResult<String> {
    match op.name() {
        "add" => {
            let name = op.primary();
            store.add(&name)?;
            Ok(format!("Added exercise: {name}"))
        }
        "delete" => {
            let name = op.primary();
            store.delete(&name)?;
            Ok(format!("Deleted exercise: {name}"))
        }
        "edit" => {
            let old = op.primary();
            // Grammar guarantees the flag is present and non-empty
            let new = op.flag_joined("to").unwrap_or_default();
            store.rename(&old, &new)?;
            Ok(format!("Edited exercise from {old} to {new}"))
        }
        "search" => {
            let term = op.primary();
            let matches = store.search(&term);
            if matches.is_empty() {
                Ok(format!("No exercises matching '{term}' found"))
            } else {
                let mut out = String::from("Search results:\n");
                let _ = write!(out, "{}", ui::numbered(matches.into_iter()));
                Ok(out)
            }
        }
        "list" => {
            if store.is_empty() {
                Ok("Your exercise list is empty".to_owned())
            } else {
                let mut out = String::from("Listing exercises:\n");
                let _ = write!(out, "{}", ui::numbered(store.names()));
                Ok(out)
            }
        }
        other => Err(AppError::internal(format!(
            "Unhandled exercise action '{other}'"
        ))),
    }
}
