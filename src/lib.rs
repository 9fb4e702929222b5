// ABOUTME: Main library entry point for the Repline fitness tracker
// ABOUTME: Wires the command grammar, activity store, and weekly program engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Repline
//!
//! A line-command fitness tracker for one interactive terminal session.
//! Users define exercises, compose them into workouts, assign workouts to
//! days of a weekly schedule, log completed sets, and query history.
//!
//! ## Architecture
//!
//! One command is fully parsed, validated, and applied before the next line
//! is read. All state lives in a [`session::Session`] value passed
//! explicitly; nothing is a global.
//!
//! - **commands**: tokenizer producing [`commands::ParsedCommand`] and the
//!   declarative per-operation grammar tables consulted by one validator
//! - **store**: name-keyed exercise and workout catalogs
//! - **program**: the weekly schedule and log engine (assign/clear/log/
//!   today/history/list)
//! - **storage**: JSON snapshot persistence at session boundaries
//! - **session**: the context struct routing validated operations to
//!   handlers
//!
//! Handlers return strings or [`repline_core::errors::AppError`]; only the
//! binary prints.

/// Line tokenizer and per-operation flag grammar validation
pub mod commands;

/// Environment-derived application configuration
pub mod config;

/// Help-text catalog for the interactive command surface
pub mod help;

/// Logging configuration and `tracing` subscriber setup
pub mod logging;

/// Weekly schedule and workout log engine
pub mod program;

/// Session context struct and command dispatch
pub mod session;

/// Name-keyed exercise and workout catalogs
pub mod store;

/// JSON snapshot persistence for session boundaries
pub mod storage;

/// Console rendering for tracker replies and errors
pub mod ui;

pub use repline_core::errors;
pub use repline_core::models;
