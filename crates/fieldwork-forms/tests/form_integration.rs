//! Integration tests for the Field -> Form -> ParseResult pipeline.
//!
//! These tests exercise the library the way callers use it: fields defined
//! once as statics, composed into forms, and run against raw input mappings
//! in both fail-fast and collect-all mode.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use fieldwork_forms::validators::{Cap, RangePolicy, RangeValidator};
use fieldwork_forms::{Field, Form};

// ============================================================================
// Shared helpers
// ============================================================================

/// Builds a raw input mapping from literal pairs.
fn inputs(pairs: &[(&str, Option<&str>)]) -> HashMap<String, Option<String>> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.map(str::to_string)))
        .collect()
}

/// The field from the paging scenario: an optional `limit` defaulting to 10
/// and clamped to `[0, 100]`.
static LIMIT_FIELD: Lazy<Field<i32>> =
    Lazy::new(|| Field::i32("limit").with_default(10).clamp_min(0).clamp_max(100));

static QUERY_FIELD: Lazy<Field<String>> = Lazy::new(|| Field::string("q").required());

static MODE_FIELD: Lazy<Field<String>> = Lazy::new(|| {
    Field::string("mode")
        .with_default("plain".to_string())
        .one_of(["plain".to_string(), "regex".to_string()])
});

static SEARCH_FORM: Lazy<Form> = Lazy::new(|| {
    Form::new([
        QUERY_FIELD.to_any(),
        LIMIT_FIELD.to_any(),
        MODE_FIELD.to_any(),
    ])
});

// ============================================================================
// The paging scenario
// ============================================================================

#[test]
fn test_limit_scenario_in_range() {
    assert_eq!(LIMIT_FIELD.validate(Some("0")).unwrap(), Some(0));
    assert_eq!(LIMIT_FIELD.validate(Some("50")).unwrap(), Some(50));
}

#[test]
fn test_limit_scenario_clamps() {
    assert_eq!(LIMIT_FIELD.validate(Some("-10")).unwrap(), Some(0));
    assert_eq!(LIMIT_FIELD.validate(Some("1000")).unwrap(), Some(100));
}

#[test]
fn test_limit_scenario_malformed() {
    let err = LIMIT_FIELD.validate(Some("x")).unwrap_err();
    assert_eq!(err.message(), "not a valid i32");
    assert_eq!(err.to_string(), "value 'x' for field 'limit': not a valid i32");
}

#[test]
fn test_limit_scenario_absent_uses_default() {
    assert_eq!(LIMIT_FIELD.validate(None).unwrap(), Some(10));
}

// ============================================================================
// Round trips and absence
// ============================================================================

#[test]
fn test_string_field_round_trip() {
    let field = Field::string("raw");
    for raw in ["", "hello", "  spaced  ", "ünïcode"] {
        assert_eq!(field.validate(Some(raw)).unwrap(), Some(raw.to_string()));
    }
    assert_eq!(field.validate(None).unwrap(), None);
}

#[test]
fn test_every_numeric_constructor_parses() {
    assert_eq!(Field::i8("n").validate(Some("-8")).unwrap(), Some(-8i8));
    assert_eq!(Field::i16("n").validate(Some("1600")).unwrap(), Some(1600i16));
    assert_eq!(Field::i32("n").validate(Some("32")).unwrap(), Some(32i32));
    assert_eq!(Field::i64("n").validate(Some("64")).unwrap(), Some(64i64));
    assert_eq!(Field::f32("n").validate(Some("0.5")).unwrap(), Some(0.5f32));
    assert_eq!(Field::f64("n").validate(Some("2.25")).unwrap(), Some(2.25f64));
    assert_eq!(Field::bool("n").validate(Some("true")).unwrap(), Some(true));
    assert_eq!(Field::char("n").validate(Some("z")).unwrap(), Some('z'));
}

#[test]
fn test_every_parse_validator_passes_absent_through() {
    assert_eq!(Field::i8("n").validate(None).unwrap(), None);
    assert_eq!(Field::i16("n").validate(None).unwrap(), None);
    assert_eq!(Field::i32("n").validate(None).unwrap(), None);
    assert_eq!(Field::i64("n").validate(None).unwrap(), None);
    assert_eq!(Field::f32("n").validate(None).unwrap(), None);
    assert_eq!(Field::f64("n").validate(None).unwrap(), None);
    assert_eq!(Field::bool("n").validate(None).unwrap(), None);
    assert_eq!(Field::char("n").validate(None).unwrap(), None);
    assert_eq!(Field::string("n").validate(None).unwrap(), None);
}

// ============================================================================
// Attachment order
// ============================================================================

#[test]
fn test_default_then_one_of_never_fails_when_default_is_legal() {
    let field = Field::i32("mode").with_default(0).one_of([0, 2, 4]);
    assert_eq!(field.validate(None).unwrap(), Some(0));
    assert_eq!(field.validate(Some("4")).unwrap(), Some(4));
    assert!(field.validate(Some("3")).is_err());
}

#[test]
fn test_default_then_one_of_fails_when_default_is_illegal() {
    let field = Field::i32("mode").with_default(9).one_of([0, 2, 4]);
    let err = field.validate(None).unwrap_err();
    assert_eq!(err.message(), "must be one of [0, 2, 4]");
}

#[test]
fn test_one_of_then_default_lets_absent_bypass_the_check() {
    let field = Field::i32("mode").one_of([0, 2, 4]).with_default(9);
    assert_eq!(field.validate(None).unwrap(), Some(9));
    assert!(field.validate(Some("9")).is_err());
}

// ============================================================================
// Fail-fast vs collect-all
// ============================================================================

#[test]
fn test_parse_stops_at_first_failing_field_in_insertion_order() {
    let first = Field::i32("first");
    let second = Field::i32("second");
    let third = Field::string("third").required();
    let form = Form::new([first.to_any(), second.to_any(), third.to_any()]);

    // second and third would both fail; only second is reported.
    let err = form
        .parse(&inputs(&[("first", Some("1")), ("second", Some("oops"))]))
        .unwrap_err();
    assert_eq!(err.field_name(), "second");
}

#[test]
fn test_parse_all_reports_every_failing_field() {
    let first = Field::i32("first");
    let second = Field::i32("second");
    let third = Field::string("third").required();
    let form = Form::new([first.to_any(), second.to_any(), third.to_any()]);

    let err = form
        .parse_all(&inputs(&[("first", Some("1")), ("second", Some("oops"))]))
        .unwrap_err();
    assert_eq!(err.len(), 2);
    assert!(err.get(&first).is_none());
    assert_eq!(err.get(&second).unwrap().message(), "not a valid i32");
    assert_eq!(err.get(&third).unwrap().message(), "missing value");
}

#[test]
fn test_search_form_happy_path_both_modes() {
    let input = inputs(&[("q", Some("rust")), ("limit", Some("250"))]);

    let result = SEARCH_FORM.parse(&input).unwrap();
    assert_eq!(result.get(&QUERY_FIELD), Some(&"rust".to_string()));
    assert_eq!(result.get(&LIMIT_FIELD), Some(&100)); // clamped
    assert_eq!(result.get(&MODE_FIELD), Some(&"plain".to_string())); // defaulted

    let result = SEARCH_FORM.parse_all(&input).unwrap();
    assert_eq!(result.get(&LIMIT_FIELD), Some(&100));
}

#[test]
fn test_search_form_aggregate_error() {
    let input = inputs(&[("limit", Some("ten")), ("mode", Some("fuzzy"))]);

    let err = SEARCH_FORM.parse_all(&input).unwrap_err();
    assert_eq!(err.len(), 3);
    assert_eq!(err.get(&QUERY_FIELD).unwrap().message(), "missing value");
    assert_eq!(err.get(&LIMIT_FIELD).unwrap().message(), "not a valid i32");
    assert_eq!(
        err.get(&MODE_FIELD).unwrap().message(),
        "must be one of [plain, regex]"
    );
    assert_eq!(err.to_string(), "form failed validation with 3 problems");
}

// ============================================================================
// Identity and immutability
// ============================================================================

#[test]
fn test_same_named_fields_are_independent_entries() {
    let as_int = Field::i64("value");
    let as_float = Field::f64("value");
    let form = Form::new([as_int.to_any(), as_float.to_any()]);

    let result = form.parse(&inputs(&[("value", Some("3"))])).unwrap();
    assert_eq!(result.get(&as_int), Some(&3i64));
    assert_eq!(result.get(&as_float), Some(&3.0f64));
}

#[test]
fn test_extend_produces_a_new_form() {
    let q = Field::string("q");
    let page = Field::i32("page").with_default(1);
    let base = Form::new([q.to_any()]);
    let paged = base.extend([page.to_any()]);

    assert_eq!(base.fields().len(), 1);
    assert_eq!(paged.fields().len(), 2);

    // The original form still knows nothing about `page`.
    let result = base.parse(&inputs(&[("q", Some("x"))])).unwrap();
    assert_eq!(result.get(&page), None);

    let result = paged.parse(&inputs(&[("q", Some("x"))])).unwrap();
    assert_eq!(result.get(&page), Some(&1));
}

#[test]
fn test_result_lookup_with_field_from_another_form() {
    let a = Field::i32("n");
    let b = Field::i32("n");
    let form_a = Form::new([a.to_any()]);

    let result = form_a.parse(&inputs(&[("n", Some("7"))])).unwrap();
    assert_eq!(result.get(&a), Some(&7));
    assert_eq!(result.get(&b), None);
}

// ============================================================================
// Custom validators in a form
// ============================================================================

#[test]
fn test_custom_range_validator_in_a_form() {
    let percent = Field::f64("percent").with_validator(RangeValidator::new(
        0.0,
        Cap::Inclusive,
        1.0,
        Cap::Inclusive,
        RangePolicy::Fail,
    ));
    let form = Form::new([percent.to_any()]);

    let result = form.parse(&inputs(&[("percent", Some("0.25"))])).unwrap();
    assert_eq!(result.get(&percent), Some(&0.25));

    let err = form.parse(&inputs(&[("percent", Some("1.5"))])).unwrap_err();
    assert_eq!(
        err.message(),
        "not in bounds 0 (inclusive) to 1 (inclusive)"
    );
}

#[test]
fn test_closure_validator_in_a_chain() {
    let tag = Field::string("tag")
        .with_validator(
            |_: &str, value: Option<String>| -> Result<Option<String>, fieldwork_core::ValidationError> {
                Ok(value.map(|v| v.trim().to_string()))
            },
        )
        .one_of(["alpha".to_string(), "beta".to_string()]);

    assert_eq!(tag.validate(Some("  alpha ")).unwrap(), Some("alpha".to_string()));
    assert!(tag.validate(Some("gamma")).is_err());
}
