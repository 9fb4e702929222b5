// ABOUTME: Console rendering for tracker replies, errors, and banners
// ABOUTME: The only module that prints; engine modules return strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt::{Display, Write as _};
use std::io::{self, Write as _};

use repline_core::constants::output::{RESPONSE_PREFIX, SEPARATOR};
use repline_core::errors::AppError;

/// Render items as a numbered list, one per line, no trailing newline
pub fn numbered<I, T>(items: I) -> String
where
    I: Iterator<Item = T>,
    T: Display,
{
    let mut out = String::new();
    for (position, item) in items.enumerate() {
        if position > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{}. {item}", position + 1);
    }
    out
}

/// Print a tracker reply with the response prefix and separator line
pub fn print_reply(message: &str) {
    println!("{RESPONSE_PREFIX}{message}");
    println!("{SEPARATOR}");
}

/// Print an error the same way a reply is printed
pub fn print_error(error: &AppError) {
    println!("{RESPONSE_PREFIX}{error}");
    println!("{SEPARATOR}");
}

/// Print the session banner
pub fn print_welcome() {
    print_reply(concat!(
        "Welcome to Repline ",
        env!("CARGO_PKG_VERSION"),
        "! Type 'help' to see what I can do"
    ));
}

/// Print the parting message
pub fn print_goodbye() {
    print_reply("See you next session!");
}

/// Print the input prompt without a trailing newline
pub fn print_prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_list_starts_at_one() {
        let out = numbered(["benchpress", "deadlift"].into_iter());
        assert_eq!(out, "1. benchpress\n2. deadlift");
    }

    #[test]
    fn numbered_list_of_nothing_is_empty() {
        let out = numbered(std::iter::empty::<&str>());
        assert_eq!(out, "");
    }
}
