//! Compiled spreadsheet cell format patterns.
//!
//! A user-authored cell format pattern (`#,##0.00`, `m/d/yyyy`, `0.0"%"`,
//! ...) arrives here as a token tree produced by an external grammar parser.
//! This crate turns that tree into two artifacts:
//!
//! - [`compile`] builds a [`MatchChain`]: an ordered sequence of small
//!   matchers (digit runs, literals, whitespace, date/time fields) that
//!   parses raw input text according to the pattern and hands the
//!   accumulated digit/field data back as [`MatchParts`]. Constructing the
//!   final typed value from those parts is the caller's job.
//! - [`render_pattern`] walks the same tree and reproduces the literal
//!   template text (escape markers re-emitted, quoted text unwrapped).
//!
//! Matching is synchronous and single-pass: steps run in compiled order,
//! each deciding for itself how much input it consumes before handing off to
//! the next, and the first rejection aborts the attempt. A compiled chain is
//! immutable, so the same chain can serve concurrent attempts as long as
//! each attempt gets its own [`MatchChain::matches`] call.

mod chain;
mod compile;
mod digit;
mod literal;
mod render;
mod token;

pub use crate::chain::{DateTimeValue, MatchChain, MatchError, MatchParts, Matcher};
pub use crate::compile::{compile, CompileError};
pub use crate::digit::{DigitMatcher, DigitMode};
pub use crate::literal::{LiteralMatcher, WhitespaceMatcher};
pub use crate::render::render_pattern;
pub use crate::token::{DateTimeField, DateTimeFieldKind, PatternToken};

use serde::{Deserialize, Serialize};

/// Decimal/grouping separators a chain matches against.
///
/// Richer locale data (date separators, currency, locale registries) lives
/// with the formatting engine; matching only ever needs these two
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    /// Decimal separator (e.g. `.` in `en-US`, `,` in many EU locales).
    pub decimal: char,
    /// Grouping separator (e.g. `,` in `en-US`, `.` in `de-DE`).
    pub group: char,
}

impl Separators {
    pub const fn en_us() -> Self {
        Self {
            decimal: '.',
            group: ',',
        }
    }

    pub const fn de_de() -> Self {
        Self {
            decimal: ',',
            group: '.',
        }
    }

    /// Swiss-style separators (`'` grouping, `.` decimal).
    pub const fn de_ch() -> Self {
        Self {
            decimal: '.',
            group: '\'',
        }
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::en_us()
    }
}
