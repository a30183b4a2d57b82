use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::digit::DigitMatcher;
use crate::literal::{LiteralMatcher, WhitespaceMatcher};
use crate::token::{DateTimeField, DateTimeFieldKind};
use crate::Separators;

/// Why a match attempt rejected its input.
///
/// Rejection is the routine "this pattern does not apply" outcome, not a
/// fault: callers typically move on to the next candidate pattern. Every
/// variant carries the byte position the rejecting step started at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("expected at least {min} digit(s) at byte {position}")]
    MissingDigits { position: usize, min: usize },
    #[error("mandatory fractional digits but no decimal point at byte {position}")]
    MissingDecimalPoint { position: usize },
    #[error("literal {expected:?} does not match the input at byte {position}")]
    LiteralMismatch { position: usize, expected: String },
    #[error("expected a space or tab at byte {position}")]
    WhitespaceMismatch { position: usize },
    #[error("expected a {field} digit at byte {position}")]
    DateTimeMismatch { position: usize, field: &'static str },
    #[error("input continues past the end of the pattern at byte {position}")]
    TrailingInput { position: usize },
}

impl MatchError {
    /// Byte position of the input the rejecting step was attempted at.
    pub fn position(&self) -> usize {
        match *self {
            MatchError::MissingDigits { position, .. }
            | MatchError::MissingDecimalPoint { position }
            | MatchError::LiteralMismatch { position, .. }
            | MatchError::WhitespaceMismatch { position }
            | MatchError::DateTimeMismatch { position, .. }
            | MatchError::TrailingInput { position } => position,
        }
    }
}

/// Mutable state owned by one match attempt.
///
/// Steps commit to this only on their own success; a rejecting step leaves
/// the cursor and accumulators exactly as it found them.
#[derive(Debug, Default)]
pub(crate) struct ParseState {
    pub(crate) cursor: usize,
    pub(crate) int_digits: String,
    pub(crate) dec_digits: String,
    pub(crate) saw_decimal_point: bool,
    pub(crate) consumed_any: bool,
    pub(crate) datetime: Vec<DateTimeValue>,
}

/// One matched date/time field, in pattern order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeValue {
    pub kind: DateTimeFieldKind,
    pub value: u32,
}

/// The accumulated data of a successful match, handed to an external value
/// constructor. This crate deliberately stops short of building the final
/// typed value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchParts {
    /// Digits matched before the decimal point, most significant first.
    pub int_digits: String,
    /// Digits matched after the decimal point, in input order.
    pub dec_digits: String,
    pub saw_decimal_point: bool,
    /// Date/time fields in the order the pattern listed them.
    pub datetime: Vec<DateTimeValue>,
    /// Total bytes of input consumed (the full input on success).
    pub consumed: usize,
    /// Whether any step consumed at least one character. `false` means every
    /// step was optional and the input was empty: the pattern "matched"
    /// without applying to anything.
    pub consumed_any: bool,
}

/// One compiled step of a matcher chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Matcher {
    Digit(DigitMatcher),
    Literal(LiteralMatcher),
    Whitespace(WhitespaceMatcher),
    /// Consumes the locale decimal separator when present and records that
    /// the fractional region has started. Absence is not a failure by
    /// itself; a following mandatory fractional digit turns it into one.
    DecimalPoint,
    DateTime(DateTimeField),
}

impl Matcher {
    /// Run this step at the state's cursor. `Ok` means the step consumed
    /// whatever it decided to and hands control to its continuation (the
    /// next step in the chain); `Err` aborts the whole attempt.
    fn attempt(
        &self,
        input: &str,
        state: &mut ParseState,
        separators: &Separators,
    ) -> Result<(), MatchError> {
        match self {
            Matcher::Digit(matcher) => matcher.attempt(input, state, separators),
            Matcher::Literal(matcher) => matcher.attempt(input, state),
            Matcher::Whitespace(matcher) => matcher.attempt(input, state),
            Matcher::DecimalPoint => {
                if input[state.cursor..].starts_with(separators.decimal) {
                    state.cursor += separators.decimal.len_utf8();
                    state.saw_decimal_point = true;
                    state.consumed_any = true;
                }
                Ok(())
            }
            Matcher::DateTime(field) => attempt_datetime(*field, input, state),
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Digit(matcher) => fmt::Display::fmt(matcher, f),
            Matcher::Literal(matcher) => fmt::Display::fmt(matcher, f),
            Matcher::Whitespace(matcher) => fmt::Display::fmt(matcher, f),
            Matcher::DecimalPoint => f.write_str("."),
            Matcher::DateTime(field) => {
                for _ in 0..field.width {
                    write!(f, "{}", field.kind.code_char())?;
                }
                Ok(())
            }
        }
    }
}

fn attempt_datetime(
    field: DateTimeField,
    input: &str,
    state: &mut ParseState,
) -> Result<(), MatchError> {
    let start = state.cursor;
    let max = field.kind.max_input_digits();
    let mut value: u32 = 0;
    let mut end = start;
    let mut taken = 0usize;
    for ch in input[start..].chars() {
        if taken == max {
            break;
        }
        let Some(digit) = ch.to_digit(10) else { break };
        value = value * 10 + digit;
        end += ch.len_utf8();
        taken += 1;
    }
    if taken == 0 {
        return Err(MatchError::DateTimeMismatch {
            position: start,
            field: field.kind.name(),
        });
    }
    state.datetime.push(DateTimeValue {
        kind: field.kind,
        value,
    });
    state.cursor = end;
    state.consumed_any = true;
    Ok(())
}

/// An ordered chain of matchers compiled from one pattern, plus the
/// separators it was compiled under.
///
/// A chain is immutable after compilation; each [`matches`](Self::matches)
/// call owns its own state, so one chain can serve concurrent attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchChain {
    steps: Vec<Matcher>,
    separators: Separators,
}

impl MatchChain {
    /// Build a chain directly from steps. [`crate::compile`] is the usual
    /// entry point; this exists for composing and testing individual steps.
    pub fn new(steps: Vec<Matcher>, separators: Separators) -> Self {
        Self { steps, separators }
    }

    pub fn steps(&self) -> &[Matcher] {
        &self.steps
    }

    pub fn separators(&self) -> Separators {
        self.separators
    }

    /// Drive the chain against `input`.
    ///
    /// Steps run in compiled order, each deciding for itself how much input
    /// it consumes before handing off; the first rejection aborts the whole
    /// attempt (there is no backtracking across steps). Success additionally
    /// requires the input to be fully consumed.
    pub fn matches(&self, input: &str) -> Result<MatchParts, MatchError> {
        let mut state = ParseState::default();
        for step in &self.steps {
            step.attempt(input, &mut state, &self.separators)?;
        }
        if state.cursor < input.len() {
            return Err(MatchError::TrailingInput {
                position: state.cursor,
            });
        }
        Ok(MatchParts {
            int_digits: state.int_digits,
            dec_digits: state.dec_digits,
            saw_decimal_point: state.saw_decimal_point,
            datetime: state.datetime,
            consumed: state.cursor,
            consumed_any: state.consumed_any,
        })
    }
}

impl fmt::Display for MatchChain {
    /// The chain's template form: each step's textual form in order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            fmt::Display::fmt(step, f)?;
        }
        Ok(())
    }
}
