// ABOUTME: Application configuration resolved from environment variables
// ABOUTME: CLI arguments override the environment; defaults come from dirs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::env;
use std::path::PathBuf;

/// File name of the snapshot inside the default data directory
const SNAPSHOT_FILE: &str = "repline.json";

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the JSON snapshot file
    pub data_file: PathBuf,
}

impl AppConfig {
    /// Resolve configuration: CLI override, then `REPLINE_DATA_FILE`, then
    /// the platform data directory, then the working directory.
    #[must_use]
    pub fn resolve(cli_data_file: Option<PathBuf>) -> Self {
        let data_file = cli_data_file
            .or_else(|| env::var("REPLINE_DATA_FILE").ok().map(PathBuf::from))
            .or_else(|| dirs::data_dir().map(|dir| dir.join("repline").join(SNAPSHOT_FILE)))
            .unwrap_or_else(|| PathBuf::from(SNAPSHOT_FILE));
        Self { data_file }
    }

    /// One-line summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!("data file: {}", self.data_file.display())
    }
}
