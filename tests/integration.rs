//! Integration tests for the public `flatkit` API.
//!
//! These tests use only the exported surface: the sentinel entry points,
//! `FlatJsonScanner` / `ScannerConfig` / `ScanError`, and the utility
//! modules.
//!
//! ## Coverage areas
//! - **Integer lookup**: single key, multiple keys, missing key sentinel
//! - **String lookup**: single key, multiple keys, missing key absence
//! - **Validity**: outer-brace check on valid, truncated and non-JSON text
//! - **Mixed documents**: strings and integers read from one buffer
//! - **Strict scanner**: absent vs `-1`, size limits, config validation
//! - **Utilities**: arithmetic, greetings, counter
//!
//! ## See also
//! - `scanner::tests`: unit tests for the scanner internals

use flatkit::arith::{add, scale_slice, sequence, sum_slice};
use flatkit::greeting::{greet, greeting_len};
use flatkit::{
    Counter, FlatJsonScanner, ScanError, ScannerConfig, is_valid_json, parse_json_int,
    parse_json_string,
};

// ------------------------------------------------------------------------------------------------
// Helpers
// ------------------------------------------------------------------------------------------------

/// A document with both string and integer fields.
const PERSON: &str = r#"{"name": "Alice", "age": 30, "city": "NYC"}"#;

// ================================================================================================
// Integer lookup
// ================================================================================================

/// # Scenario
/// Extract the only integer field of a one-field object.
///
/// # Actions
/// 1. `parse_json_int(r#"{"age": 25}"#, "age")`.
///
/// # Expected behavior
/// Returns `25`.
#[test]
fn int_single_key() {
    assert_eq!(parse_json_int(r#"{"age": 25}"#, "age"), 25);
}

/// # Scenario
/// Two integer fields read in both orders.
///
/// # Actions
/// 1. Read `age` then `score`.
/// 2. Read `score` then `age`.
///
/// # Expected behavior
/// `30` and `95` every time.
#[test]
fn int_multiple_keys() {
    let doc = r#"{"age": 30, "score": 95}"#;
    assert_eq!(parse_json_int(doc, "age"), 30);
    assert_eq!(parse_json_int(doc, "score"), 95);
    assert_eq!(parse_json_int(doc, "score"), 95);
    assert_eq!(parse_json_int(doc, "age"), 30);
}

/// # Scenario
/// Ask for a key that does not exist.
///
/// # Expected behavior
/// The `-1` sentinel, not a panic or error.
#[test]
fn int_missing_key() {
    assert_eq!(parse_json_int(r#"{"age": 25}"#, "missing"), -1);
}

// ================================================================================================
// String lookup
// ================================================================================================

/// # Scenario
/// Extract a single string field.
///
/// # Expected behavior
/// An owned `"John"`.
#[test]
fn string_single_key() {
    let name: Option<String> = parse_json_string(r#"{"name": "John"}"#, "name");
    assert_eq!(name.as_deref(), Some("John"));
}

/// # Scenario
/// Two string fields in one object.
///
/// # Expected behavior
/// `Alice` and `Portland`.
#[test]
fn string_multiple_keys() {
    let doc = r#"{"name": "Alice", "city": "Portland"}"#;
    assert_eq!(parse_json_string(doc, "name").as_deref(), Some("Alice"));
    assert_eq!(parse_json_string(doc, "city").as_deref(), Some("Portland"));
}

/// # Scenario
/// Ask for a string key that does not exist.
///
/// # Expected behavior
/// `None`.
#[test]
fn string_missing_key() {
    assert_eq!(parse_json_string(r#"{"name": "Bob"}"#, "missing"), None);
}

// ================================================================================================
// Validity
// ================================================================================================

/// # Scenario
/// Outer-brace check across the four canonical inputs.
///
/// # Expected behavior
/// - Object with fields → `true`.
/// - Missing closing brace → `false`.
/// - `{}` → `true`.
/// - `not json` → `false`.
#[test]
fn validity_cases() {
    assert!(is_valid_json(r#"{"name": "Test", "age": 25}"#));
    assert!(!is_valid_json(r#"{"name": "Test""#));
    assert!(is_valid_json("{}"));
    assert!(!is_valid_json("not json"));
}

// ================================================================================================
// Mixed documents
// ================================================================================================

/// # Scenario
/// Read string and integer fields from the same buffer.
///
/// # Actions
/// 1. `parse_json_string(PERSON, "name")`.
/// 2. `parse_json_int(PERSON, "age")`.
/// 3. `parse_json_string(PERSON, "city")`.
///
/// # Expected behavior
/// `Alice`, `30`, `NYC`. The buffer is untouched between calls.
#[test]
fn mixed_types() {
    let name = parse_json_string(PERSON, "name");
    let age = parse_json_int(PERSON, "age");
    let city = parse_json_string(PERSON, "city");

    assert_eq!(name.as_deref(), Some("Alice"));
    assert_eq!(age, 30);
    assert_eq!(city.as_deref(), Some("NYC"));
}

// ================================================================================================
// Strict scanner
// ================================================================================================

/// # Scenario
/// Tell a stored `-1` apart from a missing key.
///
/// # Expected behavior
/// Sentinel API returns `-1` for both; the scanner returns `Some(-1)`
/// and `None`.
#[test]
fn scanner_resolves_sentinel_ambiguity() {
    let doc = br#"{"offset": -1}"#;
    let scanner = FlatJsonScanner::default();

    assert_eq!(scanner.find_int(doc, b"offset").unwrap(), Some(-1));
    assert_eq!(scanner.find_int(doc, b"limit").unwrap(), None);
}

/// # Scenario
/// A configured scanner enforces both size limits.
///
/// # Actions
/// 1. Scan a 27-byte document with `max_input_len = 16`.
/// 2. Extract an 11-byte value with `max_value_len = 8`.
///
/// # Expected behavior
/// `InputTooLarge` and `ValueTooLong` respectively.
#[test]
fn scanner_limits() {
    let small_input = FlatJsonScanner::new(ScannerConfig {
        max_input_len: 16,
        max_value_len: 8,
    })
    .unwrap();
    let doc = br#"{"greeting": "hello world"}"#;
    assert!(matches!(
        small_input.find_str(doc, b"greeting"),
        Err(ScanError::InputTooLarge { .. })
    ));

    let small_value = FlatJsonScanner::new(ScannerConfig {
        max_input_len: 1024,
        max_value_len: 8,
    })
    .unwrap();
    assert!(matches!(
        small_value.find_str(doc, b"greeting"),
        Err(ScanError::ValueTooLong { len: 11, max: 8 })
    ));
}

/// # Scenario
/// Every invalid `ScannerConfig` is rejected at construction.
///
/// # Expected behavior
/// `ScanError::InvalidConfig` for each.
#[test]
fn scanner_config_validation() {
    let bad = [
        ScannerConfig {
            max_input_len: 0,
            max_value_len: 1,
        },
        ScannerConfig {
            max_input_len: 100,
            max_value_len: 0,
        },
        ScannerConfig {
            max_input_len: 100,
            max_value_len: 101,
        },
    ];
    for config in bad {
        let result = FlatJsonScanner::new(config);
        assert!(
            matches!(result, Err(ScanError::InvalidConfig(_))),
            "config {config:?} should be rejected"
        );
    }
}

// ================================================================================================
// Utilities
// ================================================================================================

/// # Scenario
/// Integer addition over the original sign combinations.
#[test]
fn arith_add() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(-1, 1), 0);
    assert_eq!(add(100, 200), 300);
    assert_eq!(add(-5, -3), -8);
}

/// # Scenario
/// Slice summation, scaling and sequence creation.
#[test]
fn arith_slices() {
    assert_eq!(sum_slice(&[1, 2, 3, 4, 5]), 15);

    let mut values = [1, 2, 3];
    scale_slice(&mut values, 2);
    assert_eq!(values, [2, 4, 6]);

    let seq = sequence(5);
    assert_eq!(seq, [0, 1, 2, 3, 4]);
}

/// # Scenario
/// Greeting text and its length.
#[test]
fn greetings() {
    assert_eq!(greet("World"), "Hello, World!");
    assert_eq!(greet(""), "Hello, !");
    assert_eq!(greeting_len("Test"), 12);
    assert_eq!(greeting_len("Alexander"), 17);
}

/// # Scenario
/// Two counters driven independently, then one reset.
///
/// # Expected behavior
/// Each keeps its own value; reset returns to zero.
#[test]
fn counters() {
    let mut first = Counter::new(10);
    let mut second = Counter::new(20);

    first.increment();
    second.decrement();
    assert_eq!(first.value(), 11);
    assert_eq!(second.value(), 19);

    first.reset();
    assert_eq!(first.value(), 0);
    assert_eq!(second.value(), 19);
}
