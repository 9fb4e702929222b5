// ABOUTME: Unit tests for the declarative flag grammar validator
// ABOUTME: Covers missing flags, arity, value types, and unknown flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use repline::commands::{parse, validate};
use repline::errors::ErrorCode;

fn code_for(line: &str) -> ErrorCode {
    validate(&parse(line)).unwrap_err().code
}

#[test]
fn test_valid_operations_pass() {
    for line in [
        "exercise /add benchpress",
        "exercise /list",
        "workout /assign benchpress /to leg day",
        "program /assign leg day /to thurs",
        "program /clear",
        "program /clear wed",
        "program /log bench /weight 60 70 80 /sets 3 /reps 5 8 10",
        "program /log bench /weight 62.5 /sets 1 /reps 5 /date 2024-03-25",
        "program /today",
        "help /exercise 2",
    ] {
        assert!(validate(&parse(line)).is_ok(), "expected '{line}' to pass");
    }
}

#[test]
fn test_no_subaction_is_invalid_input() {
    assert_eq!(code_for("exercise"), ErrorCode::InvalidInput);
    assert_eq!(code_for("program benchpress"), ErrorCode::InvalidInput);
}

#[test]
fn test_unknown_subaction_is_invalid_input() {
    assert_eq!(code_for("program /add bench"), ErrorCode::InvalidInput);
    assert_eq!(code_for("exercise /create bench"), ErrorCode::InvalidInput);
}

#[test]
fn test_unknown_flag_is_invalid_input() {
    assert_eq!(
        code_for("program /log bench /weight 60 /sets 1 /reps 5 /tempo 3"),
        ErrorCode::InvalidInput
    );
}

#[test]
fn test_missing_required_flags() {
    assert_eq!(code_for("program /assign leg day"), ErrorCode::MissingRequiredField);
    assert_eq!(
        code_for("program /log bench /weight 60 /sets 1"),
        ErrorCode::MissingRequiredField
    );
    assert_eq!(
        code_for("program /log bench /weight /sets 1 /reps 5"),
        ErrorCode::MissingRequiredField
    );
    assert_eq!(
        code_for("program /log bench /weight 60 /sets /reps 5"),
        ErrorCode::MissingRequiredField
    );
}

#[test]
fn test_empty_required_name_is_invalid_input() {
    assert_eq!(code_for("program /assign /to thurs"), ErrorCode::InvalidInput);
    assert_eq!(
        code_for("program /log /weight 60 /sets 1 /reps 5"),
        ErrorCode::InvalidInput
    );
    assert_eq!(code_for("exercise /add"), ErrorCode::InvalidInput);
}

#[test]
fn test_numeric_type_violations_are_invalid_format() {
    assert_eq!(
        code_for("program /log bench /weight abc /sets 1 /reps 5"),
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        code_for("program /log bench /weight 60 /sets one /reps 5"),
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        code_for("program /log bench /weight 60 /sets 1 /reps five"),
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        code_for("program /log bench /weight -60 /sets 1 /reps 5"),
        ErrorCode::InvalidFormat
    );
}

#[test]
fn test_day_violations_are_invalid_input() {
    assert_eq!(code_for("program /assign leg day /to noday"), ErrorCode::InvalidInput);
    assert_eq!(
        code_for("program /assign leg day /to 2024-03-11"),
        ErrorCode::InvalidInput
    );
    assert_eq!(code_for("program /clear noday"), ErrorCode::InvalidInput);
}

#[test]
fn test_date_violations_are_invalid_format() {
    assert_eq!(
        code_for("program /log bench /weight 60 /sets 1 /reps 5 /date 25-03-2024"),
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        code_for("program /log bench /weight 60 /sets 1 /reps 5 /date 2024-2323-23"),
        ErrorCode::InvalidFormat
    );
    // Impossible calendar dates are rejected, never clamped
    assert_eq!(
        code_for("program /log bench /weight 60 /sets 1 /reps 5 /date 2024-02-30"),
        ErrorCode::InvalidFormat
    );
}

#[test]
fn test_set_count_cross_rule() {
    assert_eq!(
        code_for("program /log bench /weight 60 70 /sets 3 /reps 5 8 10"),
        ErrorCode::ArityMismatch
    );
    assert_eq!(
        code_for("program /log bench /weight 60 70 80 /sets 3 /reps 5"),
        ErrorCode::ArityMismatch
    );
    assert_eq!(
        code_for("program /log bench /weight 60 /sets 0 /reps 5"),
        ErrorCode::ArityMismatch
    );
}

#[test]
fn test_flagless_operations_reject_values() {
    assert_eq!(code_for("program /today now"), ErrorCode::InvalidInput);
    assert_eq!(code_for("exercise /list all"), ErrorCode::InvalidInput);
}

#[test]
fn test_validated_operation_exposes_primary() {
    let cmd = parse("program /assign leg day /to thurs");
    let op = validate(&cmd).unwrap();
    assert_eq!(op.name(), "assign");
    assert_eq!(op.primary(), "leg day");
    assert_eq!(op.flag_joined("to").as_deref(), Some("thurs"));
}
