// ABOUTME: Tokenizer turning a raw input line into a typed command shape
// ABOUTME: Splits action, primary parameter, and ordered flag value lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use repline_core::constants::grammar::FLAG_SENTINEL;

/// A raw input line tokenized into `{action, primary, flags}`.
///
/// Built fresh per input line and immutable once constructed. The parser has
/// no domain knowledge: absence or emptiness of anything is reported by the
/// grammar validator, never here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    /// Top-level verb, lower-cased; empty for a blank line
    pub action: String,
    /// Free text between the action and the first flag, trimmed
    pub primary: String,
    /// Flags in first-seen order with their whitespace-split value tokens
    flags: Vec<(String, Vec<String>)>,
}

impl ParsedCommand {
    /// Value tokens of the named flag, if present
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&[String]> {
        self.flags
            .iter()
            .find(|(flag, _)| flag == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Whether the named flag appeared in the input
    #[must_use]
    pub fn has_flag(&self, name: &str) -> bool {
        self.flag(name).is_some()
    }

    /// Flag value tokens joined back into one space-separated string
    #[must_use]
    pub fn flag_joined(&self, name: &str) -> Option<String> {
        self.flag(name).map(|values| values.join(" "))
    }

    /// Flag names in first-seen order
    pub fn flag_names(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(|(name, _)| name.as_str())
    }

    /// Number of distinct flags
    #[must_use]
    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }

    fn insert_flag(&mut self, name: String, values: Vec<String>) {
        // Repeated flag: last occurrence wins, position keeps first-seen order
        if let Some(slot) = self.flags.iter_mut().find(|(flag, _)| *flag == name) {
            slot.1 = values;
        } else {
            self.flags.push((name, values));
        }
    }
}

/// Tokenize a raw input line.
///
/// The first whitespace run splits the action (lower-cased) from the
/// remainder. Tokens beginning with the flag sentinel open a flag; everything
/// before the first flag is the primary parameter, and each flag collects the
/// tokens up to the next flag. Never fails: a blank line yields an empty
/// action with no primary and no flags.
#[must_use]
pub fn parse(raw_line: &str) -> ParsedCommand {
    let trimmed = raw_line.trim();
    let (action, remainder) = match trimmed.split_once(char::is_whitespace) {
        Some((action, rest)) => (action, rest.trim()),
        None => (trimmed, ""),
    };

    let mut cmd = ParsedCommand {
        action: action.to_lowercase(),
        ..ParsedCommand::default()
    };

    let mut primary_tokens: Vec<&str> = Vec::new();
    let mut current_flag: Option<(String, Vec<String>)> = None;

    for token in remainder.split_whitespace() {
        if let Some(name) = token.strip_prefix(FLAG_SENTINEL) {
            if let Some((name, values)) = current_flag.take() {
                cmd.insert_flag(name, values);
            }
            current_flag = Some((name.to_lowercase(), Vec::new()));
        } else if let Some((_, values)) = current_flag.as_mut() {
            values.push(token.to_owned());
        } else {
            primary_tokens.push(token);
        }
    }

    if let Some((name, values)) = current_flag.take() {
        cmd.insert_flag(name, values);
    }

    cmd.primary = primary_tokens.join(" ");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_action_primary_and_flags() {
        let cmd = parse("program extra words /assign leg day /to thurs");
        assert_eq!(cmd.action, "program");
        assert_eq!(cmd.primary, "extra words");
        assert_eq!(
            cmd.flag("assign"),
            Some(&["leg".to_owned(), "day".to_owned()][..])
        );
        assert_eq!(cmd.flag_joined("to").as_deref(), Some("thurs"));
    }

    #[test]
    fn blank_line_yields_empty_command() {
        let cmd = parse("   ");
        assert_eq!(cmd.action, "");
        assert_eq!(cmd.primary, "");
        assert_eq!(cmd.flag_count(), 0);
    }

    #[test]
    fn action_is_lowercased() {
        let cmd = parse("PROGRAM /List");
        assert_eq!(cmd.action, "program");
        assert!(cmd.has_flag("list"));
    }

    #[test]
    fn repeated_flag_last_occurrence_wins() {
        let cmd = parse("program /log bench /weight 50 /weight 60 70");
        assert_eq!(
            cmd.flag("weight"),
            Some(&["60".to_owned(), "70".to_owned()][..])
        );
        // Order stays first-seen
        let names: Vec<_> = cmd.flag_names().collect();
        assert_eq!(names, vec!["log", "weight"]);
    }

    #[test]
    fn flag_with_no_values_is_present_and_empty() {
        let cmd = parse("program /today");
        assert_eq!(cmd.flag("today"), Some(&[][..]));
    }

    #[test]
    fn bare_sentinel_opens_empty_named_flag() {
        let cmd = parse("exercise /add bench / press");
        assert!(cmd.has_flag(""));
        assert_eq!(cmd.flag_joined("").as_deref(), Some("press"));
    }
}
