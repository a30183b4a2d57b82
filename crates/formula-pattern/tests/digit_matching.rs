use formula_pattern::{
    DigitMatcher, DigitMode, MatchChain, MatchError, Matcher, Separators,
};

fn chain(steps: Vec<Matcher>) -> MatchChain {
    MatchChain::new(steps, Separators::en_us())
}

#[test]
fn equal_arguments_build_equal_matchers() {
    let a = DigitMatcher::new(DigitMode::Integer, 1, 0);
    let b = DigitMatcher::new(DigitMode::Integer, 1, 0);
    assert_eq!(a, b);
    assert_ne!(a, DigitMatcher::new(DigitMode::DecimalFirst, 1, 0));
    assert_ne!(a, DigitMatcher::new(DigitMode::Integer, 1, 2));
}

#[test]
fn display_form_is_always_the_bare_placeholder() {
    // Mode and bounds drive matching only.
    assert_eq!(DigitMatcher::new(DigitMode::Integer, 0, 0).to_string(), "#");
    assert_eq!(
        DigitMatcher::new(DigitMode::DecimalFirst, 2, 2).to_string(),
        "#"
    );
    assert_eq!(
        DigitMatcher::new(DigitMode::DecimalNotFirst, 0, 4).to_string(),
        "#"
    );
}

#[test]
fn integer_run_is_greedy() {
    let c = chain(vec![Matcher::Digit(DigitMatcher::new(
        DigitMode::Integer,
        1,
        0,
    ))]);
    let parts = c.matches("123456").unwrap();
    assert_eq!(parts.int_digits, "123456");
    assert_eq!(parts.consumed, 6);
    assert!(parts.consumed_any);
}

#[test]
fn optional_run_with_no_bound_accepts_zero_digits() {
    // max == 0 is the "no explicit bound" sentinel; an optional run that
    // consumes nothing still succeeds and hands off to its continuation.
    let c = chain(vec![Matcher::Digit(DigitMatcher::new(
        DigitMode::Integer,
        0,
        0,
    ))]);
    let parts = c.matches("").unwrap();
    assert_eq!(parts.int_digits, "");
    assert!(!parts.consumed_any);
}

#[test]
fn mandatory_digits_missing_is_a_failure() {
    let c = chain(vec![Matcher::Digit(DigitMatcher::new(
        DigitMode::Integer,
        2,
        0,
    ))]);
    assert_eq!(
        c.matches("7"),
        Err(MatchError::MissingDigits { position: 0, min: 2 })
    );
    assert_eq!(
        c.matches("x7"),
        Err(MatchError::MissingDigits { position: 0, min: 2 })
    );
}

#[test]
fn grouping_separators_are_skipped_between_digits() {
    let c = chain(vec![Matcher::Digit(
        DigitMatcher::new(DigitMode::Integer, 1, 0).with_grouping(),
    )]);
    let parts = c.matches("1,234,567").unwrap();
    assert_eq!(parts.int_digits, "1234567");
    assert_eq!(parts.consumed, 9);
}

#[test]
fn trailing_group_separator_is_not_consumed() {
    // A separator only commits when another digit follows it, so "12," ends
    // the run after "12" and the comma is left for the next step (here:
    // nothing, which makes it trailing input).
    let c = chain(vec![Matcher::Digit(
        DigitMatcher::new(DigitMode::Integer, 1, 0).with_grouping(),
    )]);
    assert_eq!(
        c.matches("12,"),
        Err(MatchError::TrailingInput { position: 2 })
    );
}

#[test]
fn doubled_group_separator_ends_the_run() {
    let c = chain(vec![Matcher::Digit(
        DigitMatcher::new(DigitMode::Integer, 1, 0).with_grouping(),
    )]);
    assert_eq!(
        c.matches("1,,234"),
        Err(MatchError::TrailingInput { position: 1 })
    );
}

#[test]
fn leading_group_separator_is_not_ours() {
    let c = chain(vec![Matcher::Digit(
        DigitMatcher::new(DigitMode::Integer, 1, 0).with_grouping(),
    )]);
    assert_eq!(
        c.matches(",123"),
        Err(MatchError::MissingDigits { position: 0, min: 1 })
    );
}

#[test]
fn separators_without_grouping_declared_are_not_skipped() {
    let c = chain(vec![Matcher::Digit(DigitMatcher::new(
        DigitMode::Integer,
        1,
        0,
    ))]);
    assert_eq!(
        c.matches("1,234"),
        Err(MatchError::TrailingInput { position: 1 })
    );
}

#[test]
fn bounded_fractional_run_stops_at_max() {
    let c = chain(vec![
        Matcher::DecimalPoint,
        Matcher::Digit(DigitMatcher::new(DigitMode::DecimalFirst, 0, 2)),
    ]);
    // The third digit exceeds the run's bound and is left unconsumed.
    assert_eq!(
        c.matches(".123"),
        Err(MatchError::TrailingInput { position: 3 })
    );
    let parts = c.matches(".12").unwrap();
    assert_eq!(parts.dec_digits, "12");
    assert!(parts.saw_decimal_point);
}

#[test]
fn mandatory_fraction_requires_the_decimal_point() {
    let c = chain(vec![
        Matcher::DecimalPoint,
        Matcher::Digit(DigitMatcher::new(DigitMode::DecimalFirst, 2, 2)),
    ]);
    assert_eq!(
        c.matches(""),
        Err(MatchError::MissingDecimalPoint { position: 0 })
    );
    assert_eq!(c.matches(".25").unwrap().dec_digits, "25");
}

#[test]
fn optional_fraction_tolerates_a_missing_decimal_point() {
    let c = chain(vec![
        Matcher::Digit(DigitMatcher::new(DigitMode::Integer, 0, 0)),
        Matcher::DecimalPoint,
        Matcher::Digit(DigitMatcher::new(DigitMode::DecimalFirst, 0, 2)),
    ]);
    let parts = c.matches("5").unwrap();
    assert_eq!(parts.int_digits, "5");
    assert_eq!(parts.dec_digits, "");
    assert!(!parts.saw_decimal_point);
}

#[test]
#[should_panic(expected = "digit matcher min exceeds max")]
fn bounded_run_rejects_min_above_max_at_construction() {
    let _ = DigitMatcher::new(DigitMode::DecimalFirst, 3, 2);
}
