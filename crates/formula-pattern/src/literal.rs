use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chain::{MatchError, ParseState};

/// Matches a fixed run of characters at the cursor, case-sensitively and
/// all-or-nothing: a correct-case prefix that runs out of input is a
/// mismatch like any other, and the cursor stays at the entry position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralMatcher {
    token: String,
}

impl LiteralMatcher {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn attempt(&self, input: &str, state: &mut ParseState) -> Result<(), MatchError> {
        if !input[state.cursor..].starts_with(self.token.as_str()) {
            return Err(MatchError::LiteralMismatch {
                position: state.cursor,
                expected: self.token.clone(),
            });
        }
        state.cursor += self.token.len();
        if !self.token.is_empty() {
            state.consumed_any = true;
        }
        Ok(())
    }
}

impl fmt::Display for LiteralMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// Matches exactly one space or horizontal tab. Stateless; space and tab are
/// fully interchangeable on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitespaceMatcher;

impl WhitespaceMatcher {
    pub(crate) fn attempt(&self, input: &str, state: &mut ParseState) -> Result<(), MatchError> {
        match input[state.cursor..].chars().next() {
            Some(ch @ (' ' | '\t')) => {
                state.cursor += ch.len_utf8();
                state.consumed_any = true;
                Ok(())
            }
            _ => Err(MatchError::WhitespaceMismatch {
                position: state.cursor,
            }),
        }
    }
}

impl fmt::Display for WhitespaceMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" ")
    }
}
