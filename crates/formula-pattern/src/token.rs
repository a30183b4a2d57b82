use serde::{Deserialize, Serialize};

/// One node of a parsed format pattern.
///
/// Token trees are produced by an external grammar parser (the pattern
/// mini-language itself is not defined here) and are only *read* by this
/// crate: the compiler turns them into a [`crate::MatchChain`], the renderer
/// turns them back into template text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternToken {
    /// A single digit placeholder. `required` distinguishes `0` (must be
    /// filled on input) from `#` (may consume nothing).
    Digit { required: bool },
    /// A thousands-grouping marker (`,` in `#,##0`). Declares grouping for
    /// the integer digit run it sits in; it is not matched literally.
    GroupSeparator,
    /// The decimal point (`.` in `0.00`). Matched against the locale's
    /// decimal separator.
    DecimalPoint,
    /// A run of literal characters matched verbatim.
    Literal(String),
    /// Quoted literal text (`"..."` in a format code). The delimiters are
    /// already stripped by the grammar parser; the inner text is verbatim.
    QuotedText(String),
    /// A single escaped character (`\X`).
    Escaped(char),
    /// A numeric date/time field such as `yyyy` or `mm`.
    DateTime(DateTimeField),
    /// A whitespace marker; matches one space or tab.
    Whitespace,
}

impl PatternToken {
    /// Stable kind name used in compile diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PatternToken::Digit { .. } => "digit placeholder",
            PatternToken::GroupSeparator => "grouping separator",
            PatternToken::DecimalPoint => "decimal point",
            PatternToken::Literal(_) => "literal text",
            PatternToken::QuotedText(_) => "quoted text",
            PatternToken::Escaped(_) => "escape",
            PatternToken::DateTime(_) => "date/time field",
            PatternToken::Whitespace => "whitespace marker",
        }
    }
}

/// A date/time field placeholder (`yyyy`, `mm`, `dd`, ...).
///
/// `width` is the repeat count written in the pattern; it drives rendering
/// only. Input matching accepts the usual entry widths (see
/// [`DateTimeFieldKind::max_input_digits`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeField {
    pub kind: DateTimeFieldKind,
    pub width: usize,
}

impl DateTimeField {
    pub const fn new(kind: DateTimeFieldKind, width: usize) -> Self {
        Self { kind, width }
    }
}

/// Numeric date/time field kinds supported for pattern entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateTimeFieldKind {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl DateTimeFieldKind {
    /// The format-code letter for this field (`y`, `m`, `d`, `h`, `s`).
    ///
    /// Minutes share `m` with months, as spreadsheet format codes do; the
    /// grammar parser has already disambiguated by the time a token tree
    /// reaches this crate.
    pub fn code_char(self) -> char {
        match self {
            DateTimeFieldKind::Year => 'y',
            DateTimeFieldKind::Month | DateTimeFieldKind::Minute => 'm',
            DateTimeFieldKind::Day => 'd',
            DateTimeFieldKind::Hour => 'h',
            DateTimeFieldKind::Second => 's',
        }
    }

    /// Human-readable field name used in match diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            DateTimeFieldKind::Year => "year",
            DateTimeFieldKind::Month => "month",
            DateTimeFieldKind::Day => "day",
            DateTimeFieldKind::Hour => "hour",
            DateTimeFieldKind::Minute => "minute",
            DateTimeFieldKind::Second => "second",
        }
    }

    /// Maximum numerals accepted on input for this field, independent of the
    /// width written in the pattern (`m/d/yyyy` still accepts `12/31/2024`).
    pub fn max_input_digits(self) -> usize {
        match self {
            DateTimeFieldKind::Year => 4,
            _ => 2,
        }
    }
}
