// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Seeds a session with the standard exercise and workout catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(dead_code, clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc)]

//! Shared test utilities for `repline`
//!
//! Provides common session setup to reduce duplication across integration
//! tests.

use repline::session::{Outcome, Session};

/// Build a session seeded with the standard exercises and workouts
pub fn seeded_session() -> Session {
    let mut session = Session::new();
    for input in [
        "exercise /add benchpress",
        "exercise /add deadlift",
        "exercise /add barbell squat",
        "workout /create leg day",
        "workout /create full day",
    ] {
        reply(&mut session, input);
    }
    session
}

/// Execute a line expected to succeed and return its reply text
pub fn reply(session: &mut Session, line: &str) -> String {
    match session.execute(line) {
        Ok(Outcome::Reply(text)) => text,
        other => panic!("expected a reply for '{line}', got {other:?}"),
    }
}

/// Execute a line expected to fail and return the error
pub fn failure(session: &mut Session, line: &str) -> repline::errors::AppError {
    match session.execute(line) {
        Err(error) => error,
        other => panic!("expected an error for '{line}', got {other:?}"),
    }
}
