// ABOUTME: JSON snapshot persistence invoked only at session boundaries
// ABOUTME: Saves catalogs and schedule; log history never round-trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Snapshot Storage
//!
//! One JSON file holds the exercise names, the workouts with their ordered
//! exercise-name lists, and the 7-entry day-to-workout mapping. Log history
//! is deliberately session-local and absent from the snapshot. Loading
//! requires clean containers and repopulates them through the same store and
//! engine operations user commands go through (assignment forced).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use repline_core::errors::{AppError, AppResult};
use repline_core::models::Weekday;

use crate::session::Session;

/// Persisted snapshot shape
#[derive(Debug, Serialize, Deserialize)]
struct Archive {
    exercises: Vec<String>,
    workouts: Vec<ArchivedWorkout>,
    weekly_program: BTreeMap<String, String>,
}

/// One workout plan in the snapshot
#[derive(Debug, Serialize, Deserialize)]
struct ArchivedWorkout {
    name: String,
    #[serde(default)]
    exercises: Vec<String>,
}

/// Reader/writer for the single snapshot file
#[derive(Debug)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Create storage bound to the given snapshot path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the session snapshot.
    ///
    /// # Errors
    /// `SerializationError` when encoding fails, `StorageError` when the
    /// file or its directory cannot be written
    pub fn save(&self, session: &Session) -> AppResult<()> {
        let archive = Archive {
            exercises: session.exercises().names().map(str::to_owned).collect(),
            workouts: session
                .workouts()
                .iter()
                .map(|workout| ArchivedWorkout {
                    name: workout.name.clone(),
                    exercises: workout.exercises.clone(),
                })
                .collect(),
            weekly_program: Weekday::ALL
                .iter()
                .map(|day| {
                    let assigned = session.program().assigned(*day).unwrap_or_default();
                    (day.archive_key().to_owned(), assigned.to_owned())
                })
                .collect(),
        };

        let encoded = serde_json::to_string(&archive).map_err(|e| {
            AppError::serialization("Failed to encode the snapshot").with_source(e)
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::storage(format!(
                        "Failed to create snapshot directory {}",
                        parent.display()
                    ))
                    .with_source(e)
                })?;
            }
        }

        fs::write(&self.path, encoded).map_err(|e| {
            AppError::storage(format!(
                "Failed to write snapshot file {}",
                self.path.display()
            ))
            .with_source(e)
        })?;

        debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    /// Populate a clean session from the snapshot file.
    ///
    /// Returns the message to show the user: a fresh-start greeting when no
    /// snapshot exists yet, a loaded confirmation otherwise.
    ///
    /// # Errors
    /// `InternalError` when the session is not clean, `StorageError` when
    /// the file cannot be read, `SerializationError` for corrupt content,
    /// and store/engine errors when the archive references unknown names.
    /// On failure the caller discards the partially populated session.
    pub fn load(&self, session: &mut Session) -> AppResult<String> {
        if !session.is_clean() {
            return Err(AppError::internal(
                "Snapshot load requires a clean session",
            ));
        }

        if !self.path.exists() {
            info!(path = %self.path.display(), "no snapshot found, starting fresh");
            return Ok("Looks like you're starting fresh!".to_owned());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::storage(format!(
                "Failed to read snapshot file {}",
                self.path.display()
            ))
            .with_source(e)
        })?;

        let archive: Archive = serde_json::from_str(&content).map_err(|e| {
            AppError::serialization(format!(
                "Snapshot file {} is corrupt",
                self.path.display()
            ))
            .with_source(e)
        })?;

        for name in &archive.exercises {
            session.exercises_mut().add(name)?;
        }

        for workout in &archive.workouts {
            session.workouts_mut().create(&workout.name)?;
            for exercise in &workout.exercises {
                if !session.exercises().contains(exercise) {
                    return Err(AppError::not_found(exercise));
                }
                session.workouts_mut().add_exercise(&workout.name, exercise)?;
            }
        }

        for day in Weekday::ALL {
            let assigned = archive
                .weekly_program
                .get(day.archive_key())
                .map(String::as_str)
                .unwrap_or_default();
            if !assigned.is_empty() {
                if !session.workouts().contains(assigned) {
                    return Err(AppError::not_found(assigned));
                }
                session.program_mut().assign(assigned, day, true)?;
            }
        }

        info!(
            path = %self.path.display(),
            exercises = session.exercises().len(),
            workouts = session.workouts().len(),
            "snapshot loaded"
        );
        Ok("Data loaded successfully!".to_owned())
    }
}
