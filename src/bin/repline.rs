// ABOUTME: Repline binary: argument parsing, snapshot load, REPL loop, save
// ABOUTME: One command is read, applied, and reported at a time until exit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Repline Binary
//!
//! Usage:
//! ```bash
//! # Start a session against the default data file
//! repline
//!
//! # Use a specific data file and debug logging
//! repline --data-file ./my-training.json --verbose
//! ```

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};

use repline::config::AppConfig;
use repline::logging::LoggingConfig;
use repline::session::{Outcome, Session};
use repline::storage::Storage;
use repline::ui;

#[derive(Parser)]
#[command(
    name = "repline",
    about = "Line-command fitness tracker for weekly programming and set logging"
)]
struct Cli {
    /// Snapshot file override
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = AppConfig::resolve(cli.data_file);
    info!("Starting Repline {}", env!("CARGO_PKG_VERSION"));
    info!("{}", config.summary());

    let storage = Storage::new(&config.data_file);
    let mut session = Session::new();
    match storage.load(&mut session) {
        Ok(message) => ui::print_reply(&message),
        Err(load_error) => {
            // A failed load aborts the load, not the session
            warn!(%load_error, "snapshot load failed, starting empty");
            ui::print_error(&load_error);
            session = Session::new();
        }
    }

    ui::print_welcome();
    run_repl(&mut session)?;

    match storage.save(&session) {
        Ok(()) => ui::print_reply("All your workouts and exercises have been saved"),
        Err(save_error) => {
            error!(%save_error, "snapshot save failed");
            ui::print_error(&save_error);
        }
    }
    ui::print_goodbye();
    Ok(())
}

/// Read and apply commands until `exit` or end of input
fn run_repl(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        ui::print_prompt();
        let Some(line) = lines.next() else {
            // End of input behaves like exit
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match session.execute(&line) {
            Ok(Outcome::Reply(reply)) => ui::print_reply(&reply),
            Ok(Outcome::Exit) => break,
            Err(command_error) => {
                if !command_error.code.is_user_error() {
                    warn!(%command_error, "command failed");
                }
                ui::print_error(&command_error);
            }
        }
    }
    Ok(())
}
