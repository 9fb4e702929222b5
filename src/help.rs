// ABOUTME: Help-text catalog for the interactive command surface
// ABOUTME: Guidance, per-command menus, and per-entry command formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use repline_core::errors::{AppError, AppResult};

use crate::commands::{self, ParsedCommand};
use crate::ui;

const HELP_GUIDANCE: &str = "To see what each command can do, enter:\n\
    help /exercise\n\
    help /workout\n\
    help /program\n\
    Add an entry number (e.g. 'help /exercise 1') for the exact command format";

const EXERCISE_FUNCTIONS: &[&str] = &[
    "add an exercise",
    "delete an exercise",
    "edit an exercise's name",
    "search your exercises",
    "list all exercises",
];

const EXERCISE_FORMATS: &[&str] = &[
    "exercise /add <EXERCISE>",
    "exercise /delete <EXERCISE>",
    "exercise /edit <OLD_EXERCISE> /to <NEW_EXERCISE>",
    "exercise /search <TERM>",
    "exercise /list",
];

const WORKOUT_FUNCTIONS: &[&str] = &[
    "create a workout plan",
    "delete a workout plan",
    "edit a workout plan's name",
    "assign an exercise to a workout plan",
    "unassign an exercise from a workout plan",
    "view a workout plan's exercises",
    "search your workout plans",
    "list all workout plans",
];

const WORKOUT_FORMATS: &[&str] = &[
    "workout /create <WORKOUT>",
    "workout /delete <WORKOUT>",
    "workout /edit <OLD_WORKOUT> /to <NEW_WORKOUT>",
    "workout /assign <EXERCISE> /to <WORKOUT>",
    "workout /unassign <EXERCISE> /from <WORKOUT>",
    "workout /info <WORKOUT>",
    "workout /search <TERM>",
    "workout /list",
];

const PROGRAM_FUNCTIONS: &[&str] = &[
    "assign a workout plan to a day of the week",
    "view your weekly program",
    "log the sets you performed for an exercise",
    "view everything logged today",
    "view the dates you have logged",
    "clear a day, or your whole program",
];

const PROGRAM_FORMATS: &[&str] = &[
    "program /assign <WORKOUT> /to <DAY>",
    "program /list",
    "program /log <EXERCISE> /weight <W1 W2 ...> /sets <N> /reps <R1 R2 ...> [/date <YYYY-MM-DD>]",
    "program /today",
    "program /history",
    "program /clear [DAY]",
];

/// Execute a `help` command.
///
/// `help` alone is a signal for the general guidance message, not an error.
/// A sub-action selects a command menu; a trailing entry number selects one
/// entry's exact command format.
///
/// # Errors
/// `InvalidInput` for unknown menus, non-numeric selections, or entry
/// numbers outside the menu
pub fn execute(cmd: &ParsedCommand) -> AppResult<String> {
    if cmd.flag_count() == 0 {
        return Ok(HELP_GUIDANCE.to_owned());
    }

    let op = commands::validate(cmd)?;
    let (functions, formats) = match op.name() {
        "exercise" => (EXERCISE_FUNCTIONS, EXERCISE_FORMATS),
        "workout" => (WORKOUT_FUNCTIONS, WORKOUT_FORMATS),
        "program" => (PROGRAM_FUNCTIONS, PROGRAM_FORMATS),
        other => {
            return Err(AppError::internal(format!(
                "Unhandled help menu '{other}'"
            )))
        }
    };

    let selection = op.primary();
    if selection.is_empty() {
        return Ok(format!(
            "The '{}' command can:\n{}",
            op.name(),
            ui::numbered(functions.iter())
        ));
    }

    // Grammar guarantees the selection parses as an unsigned integer
    let choice: usize = selection
        .parse()
        .map_err(|_| AppError::invalid_input(format!("'{selection}' is not a help menu entry")))?;
    choice
        .checked_sub(1)
        .and_then(|index| formats.get(index))
        .map(|format| (*format).to_owned())
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "No help menu entry {choice} for '{}'",
                op.name()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn bare_help_returns_guidance() {
        let reply = execute(&parse("help")).unwrap();
        assert!(reply.contains("help /exercise"));
    }

    #[test]
    fn menu_lists_numbered_functions() {
        let reply = execute(&parse("help /program")).unwrap();
        assert!(reply.contains("1. assign a workout plan"));
    }

    #[test]
    fn entry_number_returns_command_format() {
        let reply = execute(&parse("help /exercise 1")).unwrap();
        assert_eq!(reply, "exercise /add <EXERCISE>");
    }

    #[test]
    fn out_of_range_entry_is_rejected() {
        let error = execute(&parse("help /exercise 99")).unwrap_err();
        assert!(error.to_string().contains("No help menu entry"));
    }

    #[test]
    fn non_numeric_entry_is_rejected() {
        let error = execute(&parse("help /exercise abc")).unwrap_err();
        assert!(error.to_string().contains("not a help menu entry"));
    }
}
