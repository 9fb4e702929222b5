// ABOUTME: Name-keyed exercise and workout catalogs with their command handlers
// ABOUTME: Insertion-ordered stores; lookups are case-sensitive exact matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Activity Store
//!
//! The session's exercise and workout catalogs. Both stores preserve
//! insertion order for listings and key entries by their exact user-given
//! name. The weekly program engine consumes these through simple lookups;
//! it never owns or copies the stored entities.

pub mod exercises;
pub mod workouts;

pub use exercises::ExerciseStore;
pub use workouts::WorkoutStore;
