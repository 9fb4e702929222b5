// ABOUTME: Domain data models for the Repline fitness tracker
// ABOUTME: Re-exports Exercise, Workout, Weekday and workout log types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Core data structures shared across the workspace.
//!
//! ## Design Principles
//!
//! - **Name-keyed**: activities are identified by their user-given name;
//!   schedule slots reference workouts by name, never by pointer
//! - **Serializable**: archive-facing types support JSON serialization
//! - **Type Safe**: week days and logged sets are strong types, not strings
//!
//! ## Core Models
//!
//! - `Exercise` / `Workout`: catalog entries owned by the activity store
//! - `Weekday`: the 7 fixed schedule days with parse-time alias resolution
//! - `LoggedSet` / `LogEntry`: immutable records of performed sets

mod activity;
mod log;
mod weekday;

pub use activity::{Exercise, Workout};
pub use log::{LogEntry, LoggedSet};
pub use weekday::Weekday;
