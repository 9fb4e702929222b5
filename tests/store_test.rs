// ABOUTME: Integration tests for the exercise and workout catalogs
// ABOUTME: Covers CRUD, plan composition, search, and duplicate handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

mod common;

use common::{failure, reply, seeded_session};
use repline::errors::ErrorCode;
use repline::session::Session;

#[test]
fn test_add_and_list_exercises_in_order() {
    let mut session = seeded_session();
    let listing = reply(&mut session, "exercise /list");
    assert_eq!(
        listing,
        "Listing exercises:\n1. benchpress\n2. deadlift\n3. barbell squat"
    );
}

#[test]
fn test_duplicate_exercise_add_fails() {
    let mut session = seeded_session();
    let error = failure(&mut session, "exercise /add benchpress");
    assert_eq!(error.code, ErrorCode::ActivityAddFailed);
}

#[test]
fn test_exercise_names_are_case_sensitive() {
    let mut session = seeded_session();
    reply(&mut session, "exercise /add Benchpress");
    let error = failure(&mut session, "exercise /delete BENCHPRESS");
    assert_eq!(error.code, ErrorCode::ActivityNotFound);
}

#[test]
fn test_delete_exercise() {
    let mut session = seeded_session();
    assert_eq!(
        reply(&mut session, "exercise /delete deadlift"),
        "Deleted exercise: deadlift"
    );
    let error = failure(&mut session, "exercise /delete deadlift");
    assert_eq!(error.code, ErrorCode::ActivityNotFound);
}

#[test]
fn test_edit_exercise_keeps_position() {
    let mut session = seeded_session();
    reply(&mut session, "exercise /edit deadlift /to romanian deadlift");
    let listing = reply(&mut session, "exercise /list");
    assert_eq!(
        listing,
        "Listing exercises:\n1. benchpress\n2. romanian deadlift\n3. barbell squat"
    );
}

#[test]
fn test_edit_to_taken_name_fails() {
    let mut session = seeded_session();
    let error = failure(&mut session, "exercise /edit deadlift /to benchpress");
    assert_eq!(error.code, ErrorCode::ActivityAddFailed);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let mut session = seeded_session();
    let result = reply(&mut session, "exercise /search DEAD");
    assert_eq!(result, "Search results:\n1. deadlift");
    let result = reply(&mut session, "exercise /search press");
    assert_eq!(result, "Search results:\n1. benchpress");
    let result = reply(&mut session, "exercise /search cardio");
    assert_eq!(result, "No exercises matching 'cardio' found");
}

#[test]
fn test_empty_listings() {
    let mut session = Session::new();
    assert_eq!(
        reply(&mut session, "exercise /list"),
        "Your exercise list is empty"
    );
    assert_eq!(
        reply(&mut session, "workout /list"),
        "Your workout list is empty"
    );
}

#[test]
fn test_compose_workout_plan() {
    let mut session = seeded_session();
    reply(&mut session, "workout /assign barbell squat /to leg day");
    reply(&mut session, "workout /assign deadlift /to leg day");
    let info = reply(&mut session, "workout /info leg day");
    assert_eq!(
        info,
        "'leg day' contains the following exercises:\n1. barbell squat\n2. deadlift"
    );
}

#[test]
fn test_assign_unknown_exercise_to_workout_fails() {
    let mut session = seeded_session();
    let error = failure(&mut session, "workout /assign snooze /to leg day");
    assert_eq!(error.code, ErrorCode::ActivityNotFound);
}

#[test]
fn test_assign_to_unknown_workout_fails() {
    let mut session = seeded_session();
    let error = failure(&mut session, "workout /assign benchpress /to laze day");
    assert_eq!(error.code, ErrorCode::ActivityNotFound);
}

#[test]
fn test_unassign_exercise_from_workout() {
    let mut session = seeded_session();
    reply(&mut session, "workout /assign benchpress /to full day");
    reply(&mut session, "workout /unassign benchpress /from full day");
    assert_eq!(
        reply(&mut session, "workout /info full day"),
        "Your workout plan 'full day' is empty"
    );

    let error = failure(&mut session, "workout /unassign benchpress /from full day");
    assert_eq!(error.code, ErrorCode::ActivityNotFound);
}

#[test]
fn test_delete_exercise_leaves_plan_name_dangling() {
    let mut session = seeded_session();
    reply(&mut session, "workout /assign deadlift /to full day");
    reply(&mut session, "exercise /delete deadlift");
    // Plans hold names, not references; the entry stays visible
    let info = reply(&mut session, "workout /info full day");
    assert!(info.contains("1. deadlift"));
}

#[test]
fn test_workout_crud_and_search() {
    let mut session = seeded_session();
    reply(&mut session, "workout /edit full day /to push day");
    let listing = reply(&mut session, "workout /list");
    assert_eq!(listing, "Listing workout plans:\n1. leg day\n2. push day");

    assert_eq!(
        reply(&mut session, "workout /search push"),
        "Search results:\n1. push day"
    );

    reply(&mut session, "workout /delete push day");
    let error = failure(&mut session, "workout /info push day");
    assert_eq!(error.code, ErrorCode::ActivityNotFound);
}

#[test]
fn test_unknown_command_and_actions() {
    let mut session = seeded_session();
    let error = failure(&mut session, "excercise /add bench");
    assert_eq!(error.code, ErrorCode::InvalidInput);
    let error = failure(&mut session, "exercise /remove bench");
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
