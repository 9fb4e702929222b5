// ABOUTME: Command parsing and validation for the line-command surface
// ABOUTME: Re-exports the tokenizer output and the grammar validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Command Parsing
//!
//! Two stages, strictly separated:
//!
//! 1. [`parser`] tokenizes a raw input line into a [`ParsedCommand`] with no
//!    domain knowledge and no failure mode.
//! 2. [`grammar`] validates the parsed shape against a declarative
//!    per-operation grammar table and yields a typed [`grammar::Operation`]
//!    for the handlers.

pub mod grammar;
pub mod parser;

pub use grammar::{validate, Operation};
pub use parser::{parse, ParsedCommand};
