//! End-to-end exercises of the public combinator surface, including the
//! round-trip properties between the two container families.

use oxbow::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("missing field `{0}`")]
struct MissingField(&'static str);

#[rstest]
#[case(10, Outcome::Ok(10))]
#[case(6, Outcome::Ok(6))]
#[case(5, Outcome::Err("too small"))]
#[case(3, Outcome::Err("too small"))]
fn validate_against_threshold(#[case] input: i32, #[case] expected: Outcome<i32, &'static str>) {
    assert_eq!(Outcome::validate(input, |x| *x > 5, "too small"), expected);
}

#[rstest]
#[case(Outcome::Ok(2), Outcome::Ok(4))]
#[case(Outcome::Err("e"), Outcome::Err("e"))]
fn and_then_doubles_only_successes(
    #[case] input: Outcome<i32, &'static str>,
    #[case] expected: Outcome<i32, &'static str>,
) {
    assert_eq!(input.and_then(|x| Outcome::Ok(x * 2)), expected);
}

#[test]
fn success_survives_the_family_round_trip() {
    let outcome: Outcome<i32, MissingField> = Outcome::Ok(5);
    let round_tripped = outcome.ok().ok_or(MissingField("port"));
    assert_eq!(round_tripped, Outcome::Ok(5));
}

#[test]
fn round_trip_through_absence_replaces_the_error() {
    let outcome: Outcome<i32, MissingField> = Outcome::Err(MissingField("host"));
    let round_tripped = outcome.ok().ok_or(MissingField("port"));
    assert_eq!(round_tripped, Outcome::Err(MissingField("port")));
}

#[test]
fn conversion_to_maybe_matches_the_variant() {
    assert_eq!(Outcome::<i32, MissingField>::Ok(5).ok(), Maybe::Some(5));
    assert_eq!(
        Outcome::<i32, MissingField>::Err(MissingField("id")).ok(),
        Maybe::None
    );
}

#[test]
fn pipeline_composes_across_both_families() {
    let raw_fields = [("host", Maybe::Some("db.internal")), ("port", Maybe::None)];

    let resolved: Vec<Outcome<&str, MissingField>> = raw_fields
        .into_iter()
        .map(|(name, value)| value.ok_or(MissingField(name)))
        .collect();

    let combined = combine(resolved);
    assert_eq!(combined, Outcome::Err(MissingField("port")));
}

#[test]
fn typed_errors_map_to_display_strings() {
    let outcome: Outcome<i32, MissingField> = Outcome::Err(MissingField("user_id"));
    assert_eq!(
        outcome.map_err(|e| e.to_string()),
        Outcome::Err("missing field `user_id`".to_string())
    );
}
