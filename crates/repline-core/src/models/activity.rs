// ABOUTME: Exercise and Workout catalog entries owned by the activity store
// ABOUTME: Workouts hold ordered exercise-name lists, never live references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};

/// A named exercise known to the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// User-given name, the store key (case-sensitive)
    pub name: String,
}

impl Exercise {
    /// Create an exercise with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named workout plan composed of exercises.
///
/// Exercises are referenced by name in insertion order. The workout does not
/// own the exercises; the store does. A name staying in this list after the
/// exercise is deleted from the store is visible as-is in `info` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// User-given name, the store key (case-sensitive)
    pub name: String,
    /// Ordered exercise names composing this workout
    #[serde(default)]
    pub exercises: Vec<String>,
}

impl Workout {
    /// Create an empty workout plan with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exercises: Vec::new(),
        }
    }

    /// Whether the named exercise is part of this workout
    #[must_use]
    pub fn contains(&self, exercise_name: &str) -> bool {
        self.exercises.iter().any(|e| e == exercise_name)
    }
}
