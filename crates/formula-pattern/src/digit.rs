use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chain::{MatchError, ParseState};
use crate::Separators;

/// Matching policy for a digit run, selected by its position relative to the
/// decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitMode {
    /// Digits before the decimal point.
    Integer,
    /// The first digit run after the decimal point. Additionally verifies
    /// that the decimal point was actually matched when the run is
    /// mandatory.
    DecimalFirst,
    /// Later digit runs after the decimal point; the decimal-point check
    /// already passed upstream.
    DecimalNotFirst,
}

/// An immutable digit-run matcher.
///
/// `min` is the number of mandatory placeholders (`0` in the pattern);
/// `max` bounds the run length, with `0` meaning "no explicit bound".
/// `grouping` lets an [`DigitMode::Integer`] run step over locale grouping
/// separators between digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitMatcher {
    mode: DigitMode,
    min: usize,
    max: usize,
    grouping: bool,
}

impl DigitMatcher {
    /// Construction contract: a bounded run cannot require more digits than
    /// it accepts.
    pub fn new(mode: DigitMode, min: usize, max: usize) -> Self {
        assert!(max == 0 || min <= max, "digit matcher min exceeds max");
        Self {
            mode,
            min,
            max,
            grouping: false,
        }
    }

    /// Enable the transparent grouping-separator skip (integer runs only).
    pub fn with_grouping(mut self) -> Self {
        self.grouping = true;
        self
    }

    pub fn mode(&self) -> DigitMode {
        self.mode
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn grouping(&self) -> bool {
        self.grouping
    }

    pub(crate) fn attempt(
        &self,
        input: &str,
        state: &mut ParseState,
        separators: &Separators,
    ) -> Result<(), MatchError> {
        if self.mode != DigitMode::Integer && !state.saw_decimal_point {
            // The whole fractional region is absent from the input. That is
            // fine exactly when no digit here is mandatory.
            if self.min > 0 {
                return Err(MatchError::MissingDecimalPoint {
                    position: state.cursor,
                });
            }
            return Ok(());
        }

        let start = state.cursor;
        let mut digits = String::new();
        // `end` is just past the last accepted digit; `scan` additionally
        // covers a grouping separator that is only committed if another
        // digit follows it.
        let mut end = start;
        let mut scan = start;
        for ch in input[start..].chars() {
            if ch.is_ascii_digit() {
                if self.max != 0 && digits.len() == self.max {
                    break;
                }
                digits.push(ch);
                scan += ch.len_utf8();
                end = scan;
            } else if self.grouping
                && self.mode == DigitMode::Integer
                && ch == separators.group
                && !digits.is_empty()
                && scan == end
            {
                scan += ch.len_utf8();
            } else {
                break;
            }
        }

        if digits.len() < self.min {
            return Err(MatchError::MissingDigits {
                position: start,
                min: self.min,
            });
        }

        // Zero digits on an optional run is a success: commit nothing and
        // hand straight off to the continuation.
        if end > start {
            state.consumed_any = true;
        }
        state.cursor = end;
        match self.mode {
            DigitMode::Integer => state.int_digits.push_str(&digits),
            DigitMode::DecimalFirst | DigitMode::DecimalNotFirst => {
                state.dec_digits.push_str(&digits)
            }
        }
        Ok(())
    }
}

impl fmt::Display for DigitMatcher {
    /// Mode and bounds affect matching only; the template form of any digit
    /// matcher is the bare placeholder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#")
    }
}
