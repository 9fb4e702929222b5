// ABOUTME: Logging configuration and tracing subscriber setup
// ABOUTME: Level and format come from the environment; output goes to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Logging configuration with structured output
//!
//! Diagnostics go to stderr through `tracing` so they never interleave with
//! tracker replies on stdout.

use std::env;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };
        Self { level, format }
    }

    /// Install the global tracing subscriber.
    ///
    /// # Errors
    /// Fails when the level filter is malformed or a subscriber is already
    /// installed
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level)?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);
        match self.format {
            LogFormat::Pretty => builder.pretty().try_init().map_err(|e| anyhow::anyhow!(e))?,
            LogFormat::Compact => builder.compact().try_init().map_err(|e| anyhow::anyhow!(e))?,
        }
        Ok(())
    }
}

/// Initialize logging from environment variables
///
/// # Errors
/// See [`LoggingConfig::init`]
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
