// ABOUTME: Declarative per-operation flag grammar tables and the validator
// ABOUTME: One generic validator checks presence, arity, and value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Flag Grammar
//!
//! Every operation on the command surface declares its grammar in one static
//! table: which flag introduces it, what its own value tokens must look
//! like, and which further flags it accepts. [`validate`] is the only
//! validation code path; handlers receive an [`Operation`] whose shape has
//! already been checked and use the typed accessors here for values.
//!
//! Failures report the most specific violated rule: missing flag, bad
//! arity, bad value type, or unknown day, each as a distinct error code.

use chrono::NaiveDate;
use repline_core::constants::grammar::DATE_FORMAT;
use repline_core::errors::{AppError, AppResult};
use repline_core::models::Weekday;

use super::parser::ParsedCommand;

/// Shape and type constraints for one flag's value tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSpec {
    /// No value tokens allowed
    None,
    /// One or more tokens joined into a non-empty free-text name
    Name,
    /// Zero tokens, or tokens resolving to a week day
    OptionalDay,
    /// Tokens resolving to a week day
    Day,
    /// Exactly one unsigned integer token
    Integer,
    /// One or more unsigned integer tokens
    IntegerList,
    /// One or more non-negative number tokens
    NumberList,
    /// One token parsing as an ISO calendar date
    Date,
    /// Zero tokens or one menu-entry number
    OptionalInteger,
}

/// Grammar rule for one flag of an operation
#[derive(Debug, Clone, Copy)]
pub struct FlagRule {
    /// Flag name without the sentinel
    pub name: &'static str,
    /// Whether the flag must be present
    pub required: bool,
    /// Constraint on the flag's value tokens
    pub spec: ValueSpec,
}

/// Cross-field rule applied after per-flag checks pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossRule {
    /// No cross-field constraint
    None,
    /// `/weight`, `/reps`, and `/sets` counts must agree
    SetCountsAgree,
}

/// Grammar of one operation: an action plus the flag that introduces it
#[derive(Debug)]
pub struct OperationGrammar {
    /// Top-level action the operation belongs to
    pub action: &'static str,
    /// Sub-action flag that selects the operation
    pub name: &'static str,
    /// Constraint on the sub-action flag's own values (the operation's
    /// primary parameter)
    pub primary: ValueSpec,
    /// Remaining flags the operation accepts
    pub flags: &'static [FlagRule],
    /// Cross-field constraint
    pub cross: CrossRule,
}

const fn required(name: &'static str, spec: ValueSpec) -> FlagRule {
    FlagRule {
        name,
        required: true,
        spec,
    }
}

const fn optional(name: &'static str, spec: ValueSpec) -> FlagRule {
    FlagRule {
        name,
        required: false,
        spec,
    }
}

/// The complete command surface, one entry per operation
pub static OPERATIONS: &[OperationGrammar] = &[
    // exercise catalog
    OperationGrammar {
        action: "exercise",
        name: "add",
        primary: ValueSpec::Name,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "exercise",
        name: "delete",
        primary: ValueSpec::Name,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "exercise",
        name: "edit",
        primary: ValueSpec::Name,
        flags: &[required("to", ValueSpec::Name)],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "exercise",
        name: "search",
        primary: ValueSpec::Name,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "exercise",
        name: "list",
        primary: ValueSpec::None,
        flags: &[],
        cross: CrossRule::None,
    },
    // workout catalog
    OperationGrammar {
        action: "workout",
        name: "create",
        primary: ValueSpec::Name,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "workout",
        name: "delete",
        primary: ValueSpec::Name,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "workout",
        name: "edit",
        primary: ValueSpec::Name,
        flags: &[required("to", ValueSpec::Name)],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "workout",
        name: "assign",
        primary: ValueSpec::Name,
        flags: &[required("to", ValueSpec::Name)],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "workout",
        name: "unassign",
        primary: ValueSpec::Name,
        flags: &[required("from", ValueSpec::Name)],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "workout",
        name: "info",
        primary: ValueSpec::Name,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "workout",
        name: "search",
        primary: ValueSpec::Name,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "workout",
        name: "list",
        primary: ValueSpec::None,
        flags: &[],
        cross: CrossRule::None,
    },
    // weekly program
    OperationGrammar {
        action: "program",
        name: "assign",
        primary: ValueSpec::Name,
        flags: &[required("to", ValueSpec::Day)],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "program",
        name: "clear",
        primary: ValueSpec::OptionalDay,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "program",
        name: "log",
        primary: ValueSpec::Name,
        flags: &[
            required("weight", ValueSpec::NumberList),
            required("sets", ValueSpec::Integer),
            required("reps", ValueSpec::IntegerList),
            optional("date", ValueSpec::Date),
        ],
        cross: CrossRule::SetCountsAgree,
    },
    OperationGrammar {
        action: "program",
        name: "today",
        primary: ValueSpec::None,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "program",
        name: "history",
        primary: ValueSpec::None,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "program",
        name: "list",
        primary: ValueSpec::None,
        flags: &[],
        cross: CrossRule::None,
    },
    // help menus
    OperationGrammar {
        action: "help",
        name: "exercise",
        primary: ValueSpec::OptionalInteger,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "help",
        name: "workout",
        primary: ValueSpec::OptionalInteger,
        flags: &[],
        cross: CrossRule::None,
    },
    OperationGrammar {
        action: "help",
        name: "program",
        primary: ValueSpec::OptionalInteger,
        flags: &[],
        cross: CrossRule::None,
    },
];

/// A command whose shape passed grammar validation
#[derive(Debug)]
pub struct Operation<'a> {
    grammar: &'static OperationGrammar,
    cmd: &'a ParsedCommand,
}

impl Operation<'_> {
    /// Sub-action name that selected this operation
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.grammar.name
    }

    /// The operation's primary parameter: the sub-action flag's value tokens
    /// joined with single spaces (empty when the grammar forbids values)
    #[must_use]
    pub fn primary(&self) -> String {
        self.cmd.flag_joined(self.grammar.name).unwrap_or_default()
    }

    /// Value tokens of a declared flag, if present in the input
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&[String]> {
        self.cmd.flag(name)
    }

    /// Joined value of a declared flag, if present in the input
    #[must_use]
    pub fn flag_joined(&self, name: &str) -> Option<String> {
        self.cmd.flag_joined(name)
    }
}

/// Validate a parsed command against the grammar table.
///
/// # Errors
/// `InvalidInput` for unknown sub-actions, unknown flags, unresolvable day
/// tokens, or an empty required name; `MissingRequiredField` for absent
/// required flags or values; `InvalidFormat` for unparseable numbers and
/// dates; `ArityMismatch` when the `log` value counts disagree.
pub fn validate(cmd: &ParsedCommand) -> AppResult<Operation<'_>> {
    let Some(sub) = cmd.flag_names().next() else {
        return Err(AppError::invalid_input(format!(
            "No action specified for '{}'. Try 'help /{}'",
            cmd.action, cmd.action
        )));
    };

    let grammar = OPERATIONS
        .iter()
        .find(|g| g.action == cmd.action && g.name == sub)
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown action '/{sub}' for '{}'. Try 'help /{}'",
                cmd.action, cmd.action
            ))
        })?;

    // The sub-action flag's own values form the operation's primary parameter
    let primary_values = cmd.flag(sub).unwrap_or(&[]);
    check_values(grammar, sub, primary_values, grammar.primary)?;

    for rule in grammar.flags {
        match cmd.flag(rule.name) {
            Some(values) => check_values(grammar, rule.name, values, rule.spec)?,
            None if rule.required => {
                return Err(AppError::missing_field(format!(
                    "Missing required flag '/{}' for '{} /{}'",
                    rule.name, grammar.action, grammar.name
                )));
            }
            None => {}
        }
    }

    for name in cmd.flag_names() {
        if name != sub && !grammar.flags.iter().any(|rule| rule.name == name) {
            return Err(AppError::invalid_input(format!(
                "Unknown flag '/{name}' for '{} /{}'",
                grammar.action, grammar.name
            )));
        }
    }

    check_cross(grammar, cmd)?;

    Ok(Operation { grammar, cmd })
}

fn check_values(
    grammar: &OperationGrammar,
    flag: &str,
    values: &[String],
    spec: ValueSpec,
) -> AppResult<()> {
    let joined = values.join(" ");
    match spec {
        ValueSpec::None => {
            if !values.is_empty() {
                return Err(AppError::invalid_input(format!(
                    "'{} /{}' takes no value, got '{joined}'",
                    grammar.action, grammar.name
                )));
            }
        }
        ValueSpec::Name => {
            if joined.is_empty() {
                return Err(AppError::invalid_input(format!(
                    "'{} /{flag}' requires a name",
                    grammar.action
                )));
            }
        }
        ValueSpec::OptionalDay => {
            if !joined.is_empty() {
                parse_day(&joined)?;
            }
        }
        ValueSpec::Day => {
            if joined.is_empty() {
                return Err(AppError::missing_field(format!(
                    "Flag '/{flag}' requires a day"
                )));
            }
            parse_day(&joined)?;
        }
        ValueSpec::Integer => {
            if values.len() != 1 {
                return Err(AppError::missing_field(format!(
                    "Flag '/{flag}' requires exactly one value"
                )));
            }
            parse_integer(flag, &values[0])?;
        }
        ValueSpec::IntegerList => {
            if values.is_empty() {
                return Err(AppError::missing_field(format!(
                    "Flag '/{flag}' requires at least one value"
                )));
            }
            for token in values {
                parse_integer(flag, token)?;
            }
        }
        ValueSpec::NumberList => {
            if values.is_empty() {
                return Err(AppError::missing_field(format!(
                    "Flag '/{flag}' requires at least one value"
                )));
            }
            for token in values {
                parse_number(flag, token)?;
            }
        }
        ValueSpec::Date => {
            parse_date(&joined)?;
        }
        ValueSpec::OptionalInteger => {
            if values.len() > 1 {
                return Err(AppError::invalid_input(format!(
                    "'{} /{flag}' takes at most one menu entry",
                    grammar.action
                )));
            }
            if let Some(token) = values.first() {
                token.parse::<usize>().map_err(|_| {
                    AppError::invalid_input(format!("'{token}' is not a help menu entry"))
                })?;
            }
        }
    }
    Ok(())
}

fn check_cross(grammar: &OperationGrammar, cmd: &ParsedCommand) -> AppResult<()> {
    match grammar.cross {
        CrossRule::None => Ok(()),
        CrossRule::SetCountsAgree => {
            // Per-flag checks already guaranteed presence and numeric form
            let weights = cmd.flag("weight").unwrap_or(&[]).len();
            let reps = cmd.flag("reps").unwrap_or(&[]).len();
            let sets = cmd
                .flag("sets")
                .and_then(|v| v.first())
                .and_then(|token| token.parse::<usize>().ok())
                .unwrap_or(0);
            if weights == reps && reps == sets && sets >= 1 {
                Ok(())
            } else {
                Err(AppError::arity_mismatch(format!(
                    "Got {weights} weights and {reps} reps across {sets} sets; counts must match"
                )))
            }
        }
    }
}

/// Parse a non-negative weight value
///
/// # Errors
/// `InvalidFormat` when the token is not a finite non-negative number
pub fn parse_number(flag: &str, token: &str) -> AppResult<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .ok_or_else(|| {
            AppError::invalid_format(format!("'{token}' is not a valid number for '/{flag}'"))
        })
}

/// Parse an unsigned integer value
///
/// # Errors
/// `InvalidFormat` when the token is not an unsigned integer
pub fn parse_integer(flag: &str, token: &str) -> AppResult<u32> {
    token.parse::<u32>().map_err(|_| {
        AppError::invalid_format(format!("'{token}' is not a valid integer for '/{flag}'"))
    })
}

/// Resolve a day token through the alias table
///
/// # Errors
/// `InvalidInput` when the token is not a recognized day name or alias
pub fn parse_day(text: &str) -> AppResult<Weekday> {
    Weekday::resolve(text).ok_or_else(|| AppError::invalid_input(format!("Unknown day '{text}'")))
}

/// Parse an ISO calendar date, never clamping impossible dates
///
/// # Errors
/// `InvalidFormat` when the text is not a valid `YYYY-MM-DD` calendar date
pub fn parse_date(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| {
        AppError::invalid_format(format!("'{text}' is not a valid date (expected YYYY-MM-DD)"))
    })
}
