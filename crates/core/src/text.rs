//! Character-sequence and string equality.
//!
//! [`CharSequence`] lets two different string-like representations (a `str`
//! and a `Vec<char>`, say) be compared value-wise without converting either
//! side first.

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::case_fold::chars_equal_ignore_case;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Case sensitivity
// ---------------------------------------------------------------------------

/// Whether text comparisons distinguish upper and lower case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// String representation for display, logging, and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sensitive => "sensitive",
            Self::Insensitive => "insensitive",
        }
    }

    pub fn is_sensitive(&self) -> bool {
        matches!(self, Self::Sensitive)
    }
}

impl From<bool> for CaseSensitivity {
    fn from(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::Sensitive
        } else {
            Self::Insensitive
        }
    }
}

impl std::fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseSensitivity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            other => Err(CoreError::Validation(format!(
                "Invalid case sensitivity '{other}'. Must be one of: sensitive, insensitive"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Character sequences
// ---------------------------------------------------------------------------

/// An ordered sequence of characters, compared by value.
pub trait CharSequence {
    /// Number of characters in the sequence.
    fn char_count(&self) -> usize;

    /// The characters in order.
    fn char_iter(&self) -> impl Iterator<Item = char> + '_;
}

impl CharSequence for str {
    fn char_count(&self) -> usize {
        self.chars().count()
    }

    fn char_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl CharSequence for String {
    fn char_count(&self) -> usize {
        self.as_str().char_count()
    }

    fn char_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl CharSequence for Cow<'_, str> {
    fn char_count(&self) -> usize {
        self.as_ref().char_count()
    }

    fn char_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl CharSequence for [char] {
    fn char_count(&self) -> usize {
        self.len()
    }

    fn char_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().copied()
    }
}

impl CharSequence for Vec<char> {
    fn char_count(&self) -> usize {
        self.len()
    }

    fn char_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().copied()
    }
}

/// Compare two character sequences character by character.
///
/// Both `None` are equal, exactly one `None` is not. Sequences of different
/// length are never equal. With `case_sensitive == false`, characters match
/// when [`chars_equal_ignore_case`] says so.
pub fn equal_chars<A, B>(s1: Option<&A>, s2: Option<&B>, case_sensitive: bool) -> bool
where
    A: CharSequence + ?Sized,
    B: CharSequence + ?Sized,
{
    let (s1, s2) = match (s1, s2) {
        (None, None) => return true,
        (Some(s1), Some(s2)) => (s1, s2),
        _ => return false,
    };

    if s1.char_count() != s2.char_count() {
        return false;
    }

    s1.char_iter()
        .zip(s2.char_iter())
        .all(|(c1, c2)| c1 == c2 || (!case_sensitive && chars_equal_ignore_case(c1, c2)))
}

/// Case-sensitive [`equal_chars`].
pub fn equal_chars_exact<A, B>(s1: Option<&A>, s2: Option<&B>) -> bool
where
    A: CharSequence + ?Sized,
    B: CharSequence + ?Sized,
{
    equal_chars(s1, s2, true)
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// Null-safe exact string equality.
pub fn equal_str(a: Option<&str>, b: Option<&str>) -> bool {
    a == b
}

/// Null-safe string equality with optional case sensitivity.
pub fn equal_str_case(a: Option<&str>, b: Option<&str>, case_sensitive: bool) -> bool {
    if case_sensitive {
        equal_str(a, b)
    } else {
        equal_chars(a, b, false)
    }
}

/// Exact string equality where `None` counts as the empty string.
pub fn str_equal(a: Option<&str>, b: Option<&str>) -> bool {
    str_equal_case(a, b, true)
}

/// Like [`equal_str_case`], but `None` counts as the empty string.
pub fn str_equal_case(a: Option<&str>, b: Option<&str>, case_sensitive: bool) -> bool {
    equal_str_case(
        Some(a.unwrap_or_default()),
        Some(b.unwrap_or_default()),
        case_sensitive,
    )
}
