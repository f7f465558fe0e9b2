//! Cross-module properties of the comparison helpers.
//!
//! Exercises the public API the way a caller comparing user-entered text
//! and form values would, through the crate root re-exports.

mod common;

use std::cmp::Ordering;
use std::collections::HashSet;

use assert_matches::assert_matches;
use equate_core::{
    compare, compare_bytes, compare_with, equal, equal_chars, equal_str_case, hashcode,
    hashcode_pair, have_equal_elements, have_equal_elements_opt, str_equal, to_upper_case,
    try_compare_with, CaseSensitivity, CompareConfig, CoreError, Operand,
};

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

/// Every present value equals itself and compares `Equal` to itself.
#[test]
fn reflexivity_for_present_values() {
    let words = ["", "a", "Dialog", "ünïcödé"];
    for word in words {
        assert!(equal(Some(word), Some(word)), "equal({word:?}, {word:?})");
        assert_eq!(compare(Some(word), Some(word)), Ordering::Equal);
    }

    let numbers = [i64::MIN, -1, 0, 1, i64::MAX];
    for n in &numbers {
        assert!(equal(Some(n), Some(n)));
        assert_eq!(compare(Some(n), Some(n)), Ordering::Equal);
    }
}

/// Two missing values are equal; a missing value never equals a present one.
#[test]
fn null_equality() {
    assert!(equal::<str>(None, None));
    assert!(!equal(None, Some("x")));
    assert!(!equal(Some("x"), None));
}

/// Case-insensitive comparison ignores case, case-sensitive does not.
#[test]
fn case_insensitive_text() {
    assert!(equal_chars(Some("ABC"), Some("abc"), false));
    assert!(!equal_chars(Some("ABC"), Some("abc"), true));
    assert!(equal_str_case(Some("ABC"), Some("abc"), false));
    assert!(!equal_str_case(Some("ABC"), Some("abc"), true));
}

/// ASCII letters upper-case through the fast path; other ASCII passes through.
#[test]
fn ascii_fast_path() {
    assert_eq!(to_upper_case('a'), 'A');
    assert_eq!(to_upper_case('z'), 'Z');
    assert_eq!(to_upper_case('!'), '!');
}

/// Non-ASCII letters fold through their one-to-one Unicode mapping.
#[test]
fn case_insensitive_non_ascii_text() {
    assert!(equal_str_case(Some("İSTANBUL"), Some("istanbul"), false));
    assert!(equal_chars(Some("\u{1FB3}"), Some("\u{1FBC}"), false));
    assert_eq!(to_upper_case('\u{1FB3}'), '\u{1FBC}');
}

/// `None` is the empty string for `str_equal`.
#[test]
fn str_equal_null_as_empty() {
    assert!(str_equal(None, Some("")));
    assert!(str_equal(None, None));
    assert!(!str_equal(None, Some("x")));
}

// ---------------------------------------------------------------------------
// Element sets
// ---------------------------------------------------------------------------

/// Size plus distinct-element membership, not multiset equality.
#[test]
fn element_sets_ignore_duplicate_counts() {
    common::init_tracing();

    assert!(have_equal_elements(&vec![1, 1, 2], &vec![1, 2, 2]));
    assert!(have_equal_elements_opt(Some(&[1, 1, 2][..]), Some(&[1, 2, 2][..])));
}

/// A set and a list with the same distinct elements but different sizes
/// are not equal.
#[test]
fn element_sets_require_equal_size() {
    common::init_tracing();

    let set: HashSet<&str> = ["ok", "cancel"].into_iter().collect();
    let list = vec!["ok", "cancel", "ok"];
    assert!(!have_equal_elements(&set, &list));
}

/// Missing arrays are only equal to each other.
#[test]
fn element_sets_null_arrays() {
    assert!(have_equal_elements_opt::<i32>(None, None));
    assert!(!have_equal_elements_opt(None, Some(&[1][..])));
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Byte sequences sort `None` last while natural ordering sorts it first.
#[test]
fn null_placement_differs_between_bytes_and_natural_order() {
    assert_eq!(compare_bytes(None, Some(&[1][..])), Ordering::Greater);
    assert_eq!(compare(None, Some("a")), Ordering::Less);
}

/// Byte sequences order by length first, then by signed value.
#[test]
fn byte_sequences_length_then_value() {
    assert_eq!(compare_bytes(Some(&[1, 2][..]), Some(&[1, 2, 3][..])), Ordering::Less);
    assert_eq!(compare_bytes(Some(&[2][..]), Some(&[1][..])), Ordering::Greater);
}

/// Sorting with `compare` puts missing values at the front.
#[test]
fn sorting_with_natural_order() {
    let mut values = vec![Some("b"), None, Some("a"), None];
    values.sort_by(|a, b| compare(a.as_deref(), b.as_deref()));
    assert_eq!(values, vec![None, None, Some("a"), Some("b")]);
}

/// Sorting with `compare_bytes` puts missing values at the back.
#[test]
fn sorting_byte_sequences() {
    let mut values: Vec<Option<Vec<i8>>> =
        vec![None, Some(vec![5, 5]), Some(vec![-3]), Some(vec![9])];
    values.sort_by(|a, b| compare_bytes(a.as_deref(), b.as_deref()));
    assert_eq!(
        values,
        vec![Some(vec![-3]), Some(vec![9]), Some(vec![5, 5]), None]
    );
}

/// A caller comparator orders present values; missing values still go first.
#[test]
fn caller_comparator() {
    let mut values = vec![Some("ccc"), Some("a"), None, Some("bb")];
    values.sort_by(|a, b| compare_with(*a, *b, |a: &str, b: &str| a.len().cmp(&b.len())));
    assert_eq!(values, vec![None, Some("a"), Some("bb"), Some("ccc")]);
}

/// Errors from a fallible comparator reach the caller as they were returned.
#[test]
fn fallible_comparator_error_is_not_wrapped() {
    #[derive(Debug, PartialEq)]
    struct Incomparable(&'static str);

    let result = try_compare_with(Some(&Operand::Int(1)), Some(&Operand::from("1")), |a, b| {
        if a.kind() == b.kind() {
            Ok(Ordering::Equal)
        } else {
            Err(Incomparable("kind mismatch"))
        }
    });
    assert_eq!(result, Err(Incomparable("kind mismatch")));
}

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// `None` hashes to zero; the pair combiner is symmetric and self-cancelling.
#[test]
fn hash_properties() {
    assert_eq!(hashcode::<str>(None), 0);

    let pairs = [("a", "b"), ("ok", "cancel"), ("", "x")];
    for (a, b) in pairs {
        assert_eq!(hashcode_pair(Some(a), Some(b)), hashcode_pair(Some(b), Some(a)));
        assert_eq!(hashcode_pair(Some(a), Some(a)), 0);
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration drives text comparison and rejects unknown values.
#[test]
fn config_from_lookup() {
    common::init_tracing();

    let config = CompareConfig::from_lookup(|_| Some("insensitive".to_string())).unwrap();
    assert_eq!(config.case_sensitivity, CaseSensitivity::Insensitive);
    assert!(config.text_equal(Some("Cancel"), Some("CANCEL")));

    let err = CompareConfig::from_lookup(|_| Some("sometimes".to_string())).unwrap_err();
    assert_matches!(err, CoreError::Config { .. });
}
