use thiserror::Error;

use crate::chain::{MatchChain, Matcher};
use crate::digit::{DigitMatcher, DigitMode};
use crate::literal::{LiteralMatcher, WhitespaceMatcher};
use crate::token::PatternToken;
use crate::Separators;

/// Errors reported while turning a token tree into a matcher chain.
///
/// Compilation failures surface eagerly, once per pattern; a chain is never
/// built from a tree the compiler cannot fully map. Positions are token
/// indices into the tree, not byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("{kind} at token {position} is not supported in a match pattern")]
    UnsupportedToken { kind: &'static str, position: usize },
    #[error("second decimal point at token {position}")]
    DuplicateDecimalPoint { position: usize },
    #[error("grouping separator after the decimal point at token {position}")]
    GroupingAfterDecimal { position: usize },
}

#[derive(Debug, Default, Clone, Copy)]
struct DigitRun {
    /// Mandatory placeholders (`0`) seen so far in this run.
    required: usize,
    /// All placeholders seen so far in this run.
    total: usize,
}

/// Compile a pattern token tree into an ordered matcher chain.
///
/// One left-to-right pass over the tree:
/// - consecutive digit placeholders fold into a single digit run (grouping
///   separators do not interrupt a run);
/// - adjacent literal-producing tokens (literal text, quoted text, escapes)
///   coalesce into one literal matcher, so an internal boundary can never
///   cause a spurious partial-literal failure;
/// - the decimal point flips digit-mode selection from `Integer` to
///   `DecimalFirst` (first fractional run) and `DecimalNotFirst` (later
///   fractional runs);
/// - whitespace markers map one-to-one to whitespace matchers.
pub fn compile(
    tokens: &[PatternToken],
    separators: Separators,
) -> Result<MatchChain, CompileError> {
    // Grouping is declared pattern-wide by any separator in the integer
    // region, the way `#,##0` declares it for the whole integer part.
    let mut grouping = false;
    let mut before_decimal = true;
    for token in tokens {
        match token {
            PatternToken::DecimalPoint => before_decimal = false,
            PatternToken::GroupSeparator if before_decimal => grouping = true,
            _ => {}
        }
    }

    let mut steps: Vec<Matcher> = Vec::new();
    let mut literal_buf = String::new();
    let mut digit_run: Option<DigitRun> = None;
    let mut saw_decimal = false;
    let mut decimal_run_emitted = false;

    for (idx, token) in tokens.iter().enumerate() {
        match token {
            PatternToken::Digit { required } => {
                flush_literal(&mut literal_buf, &mut steps);
                let run = digit_run.get_or_insert(DigitRun::default());
                if *required {
                    run.required += 1;
                }
                run.total += 1;
            }
            PatternToken::GroupSeparator => {
                if saw_decimal {
                    return Err(CompileError::GroupingAfterDecimal { position: idx });
                }
                // Declares grouping only; input separators are handled by
                // the digit matcher's skip, so no step is emitted and the
                // surrounding digit run stays open.
                flush_literal(&mut literal_buf, &mut steps);
            }
            PatternToken::DecimalPoint => {
                if saw_decimal {
                    return Err(CompileError::DuplicateDecimalPoint { position: idx });
                }
                flush_digit_run(
                    &mut digit_run,
                    saw_decimal,
                    &mut decimal_run_emitted,
                    grouping,
                    &mut steps,
                );
                flush_literal(&mut literal_buf, &mut steps);
                saw_decimal = true;
                steps.push(Matcher::DecimalPoint);
            }
            PatternToken::Literal(text) => {
                flush_digit_run(
                    &mut digit_run,
                    saw_decimal,
                    &mut decimal_run_emitted,
                    grouping,
                    &mut steps,
                );
                literal_buf.push_str(text);
            }
            PatternToken::QuotedText(text) => {
                flush_digit_run(
                    &mut digit_run,
                    saw_decimal,
                    &mut decimal_run_emitted,
                    grouping,
                    &mut steps,
                );
                literal_buf.push_str(text);
            }
            PatternToken::Escaped(ch) => {
                flush_digit_run(
                    &mut digit_run,
                    saw_decimal,
                    &mut decimal_run_emitted,
                    grouping,
                    &mut steps,
                );
                literal_buf.push(*ch);
            }
            PatternToken::Whitespace => {
                flush_digit_run(
                    &mut digit_run,
                    saw_decimal,
                    &mut decimal_run_emitted,
                    grouping,
                    &mut steps,
                );
                flush_literal(&mut literal_buf, &mut steps);
                steps.push(Matcher::Whitespace(WhitespaceMatcher));
            }
            PatternToken::DateTime(field) => {
                // Date/time fields in the fractional region (or degenerate
                // zero-width fields) have no matching semantics.
                if saw_decimal || field.width == 0 {
                    return Err(CompileError::UnsupportedToken {
                        kind: token.kind_name(),
                        position: idx,
                    });
                }
                flush_digit_run(
                    &mut digit_run,
                    saw_decimal,
                    &mut decimal_run_emitted,
                    grouping,
                    &mut steps,
                );
                flush_literal(&mut literal_buf, &mut steps);
                steps.push(Matcher::DateTime(*field));
            }
        }
    }

    flush_digit_run(
        &mut digit_run,
        saw_decimal,
        &mut decimal_run_emitted,
        grouping,
        &mut steps,
    );
    flush_literal(&mut literal_buf, &mut steps);

    Ok(MatchChain::new(steps, separators))
}

fn flush_literal(buf: &mut String, steps: &mut Vec<Matcher>) {
    if buf.is_empty() {
        return;
    }
    steps.push(Matcher::Literal(LiteralMatcher::new(std::mem::take(buf))));
}

fn flush_digit_run(
    run: &mut Option<DigitRun>,
    after_decimal: bool,
    decimal_run_emitted: &mut bool,
    grouping: bool,
    steps: &mut Vec<Matcher>,
) {
    let Some(DigitRun { required, total }) = run.take() else {
        return;
    };
    let matcher = if after_decimal {
        let mode = if *decimal_run_emitted {
            DigitMode::DecimalNotFirst
        } else {
            DigitMode::DecimalFirst
        };
        *decimal_run_emitted = true;
        // Fractional runs stay bounded by their placeholder count.
        DigitMatcher::new(mode, required, total)
    } else {
        // Integer entry accepts any magnitude (`#,##0` formats any number of
        // digits); the placeholder count only sets how many are mandatory.
        let matcher = DigitMatcher::new(DigitMode::Integer, required, 0);
        if grouping {
            matcher.with_grouping()
        } else {
            matcher
        }
    };
    steps.push(Matcher::Digit(matcher));
}
