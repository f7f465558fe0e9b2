//! Null-safe ordering.
//!
//! Where a missing value sorts depends on the overload:
//!
//! | Function                          | `None` sorts |
//! |-----------------------------------|--------------|
//! | [`compare_bytes`]                 | last         |
//! | [`compare`], [`compare_with`], [`try_compare_with`] | first |
//!
//! The byte-sequence convention is the odd one out. It is kept as is because
//! existing callers sort on it; do not unify the two without auditing them.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::ptr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Null placement
// ---------------------------------------------------------------------------

/// Where a missing value sorts relative to a present one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullOrdering {
    First,
    Last,
}

impl NullOrdering {
    /// Ordering decided by missing values alone.
    ///
    /// Returns `None` when both sides are present and the values themselves
    /// have to be compared.
    pub fn order<T: ?Sized>(self, a: Option<&T>, b: Option<&T>) -> Option<Ordering> {
        let none_first = match self {
            Self::First => Ordering::Less,
            Self::Last => Ordering::Greater,
        };
        match (a, b) {
            (Some(_), Some(_)) => None,
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(none_first),
            (Some(_), None) => Some(none_first.reverse()),
        }
    }
}

fn try_compare_nullable<T, E, F>(
    a: Option<&T>,
    b: Option<&T>,
    nulls: NullOrdering,
    cmp: F,
) -> Result<Ordering, E>
where
    T: ?Sized,
    F: FnOnce(&T, &T) -> Result<Ordering, E>,
{
    match (a, b) {
        (Some(a), Some(b)) if ptr::eq(a, b) => Ok(Ordering::Equal),
        (Some(a), Some(b)) => cmp(a, b),
        _ => Ok(nulls.order(a, b).unwrap_or(Ordering::Equal)),
    }
}

fn compare_nullable<T, F>(a: Option<&T>, b: Option<&T>, nulls: NullOrdering, cmp: F) -> Ordering
where
    T: ?Sized,
    F: FnOnce(&T, &T) -> Ordering,
{
    match try_compare_nullable(a, b, nulls, |a, b| Ok::<_, Infallible>(cmp(a, b))) {
        Ok(ordering) => ordering,
        Err(never) => match never {},
    }
}

// ---------------------------------------------------------------------------
// Natural order
// ---------------------------------------------------------------------------

/// A type with an intrinsic total order over itself.
///
/// Implemented per concrete type rather than blanket over `Ord` so that
/// floating point values can take part with a defined NaN placement.
pub trait NaturalOrder {
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! natural_order_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl NaturalOrder for $t {
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

natural_order_via_ord!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
);

impl NaturalOrder for f64 {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        match self.partial_cmp(other) {
            Some(Ordering::Equal) | None => {
                canonical_bits_f64(*self).cmp(&canonical_bits_f64(*other))
            }
            Some(ordering) => ordering,
        }
    }
}

impl NaturalOrder for f32 {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        match self.partial_cmp(other) {
            Some(Ordering::Equal) | None => {
                canonical_bits_f32(*self).cmp(&canonical_bits_f32(*other))
            }
            Some(ordering) => ordering,
        }
    }
}

/// Lexicographic: the first differing element decides, then length.
impl<T: NaturalOrder> NaturalOrder for [T] {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.iter()
            .zip(other)
            .map(|(a, b)| a.natural_cmp(b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| self.len().cmp(&other.len()))
    }
}

impl<T: NaturalOrder> NaturalOrder for Vec<T> {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.as_slice().natural_cmp(other.as_slice())
    }
}

/// `None` sorts first, matching [`compare`].
impl<T: NaturalOrder> NaturalOrder for Option<T> {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        compare(self.as_ref(), other.as_ref())
    }
}

/// Bit pattern used to order floats: every NaN collapses to the canonical
/// quiet NaN, and `-0.0` stays below `0.0`.
fn canonical_bits_f64(x: f64) -> i64 {
    let x = if x.is_nan() { f64::NAN } else { x };
    x.to_bits() as i64
}

fn canonical_bits_f32(x: f32) -> i32 {
    let x = if x.is_nan() { f32::NAN } else { x };
    x.to_bits() as i32
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// Natural order of two present values.
pub fn compare_natural<T: NaturalOrder + ?Sized>(a: &T, b: &T) -> Ordering {
    a.natural_cmp(b)
}

/// `false < true`.
pub fn compare_bool(a: bool, b: bool) -> Ordering {
    a.natural_cmp(&b)
}

pub fn compare_i8(a: i8, b: i8) -> Ordering {
    a.natural_cmp(&b)
}

pub fn compare_i32(a: i32, b: i32) -> Ordering {
    a.natural_cmp(&b)
}

pub fn compare_i64(a: i64, b: i64) -> Ordering {
    a.natural_cmp(&b)
}

/// Total order over doubles.
///
/// Every NaN equals every other NaN and sorts above positive infinity;
/// `-0.0` sorts below `0.0`.
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.natural_cmp(&b)
}

// ---------------------------------------------------------------------------
// Sequences and references
// ---------------------------------------------------------------------------

/// Order two optional signed byte sequences.
///
/// - the same slice is `Equal`;
/// - `None` sorts **last** (unlike [`compare`]);
/// - a shorter sequence sorts first regardless of content;
/// - equal lengths compare signed byte by byte, first difference decides.
pub fn compare_bytes(a: Option<&[i8]>, b: Option<&[i8]>) -> Ordering {
    compare_nullable(a, b, NullOrdering::Last, |a, b| {
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    })
}

/// Order two optional values by their natural order, `None` first.
pub fn compare<T: NaturalOrder + ?Sized>(a: Option<&T>, b: Option<&T>) -> Ordering {
    compare_nullable(a, b, NullOrdering::First, T::natural_cmp)
}

/// Order two optional values with a caller-supplied comparator, `None` first.
///
/// The comparator only sees present values. A panic inside it propagates.
pub fn compare_with<T, F>(a: Option<&T>, b: Option<&T>, comparator: F) -> Ordering
where
    T: ?Sized,
    F: FnOnce(&T, &T) -> Ordering,
{
    compare_nullable(a, b, NullOrdering::First, comparator)
}

/// Fallible [`compare_with`]: the comparator's error is returned unchanged.
pub fn try_compare_with<T, E, F>(
    a: Option<&T>,
    b: Option<&T>,
    comparator: F,
) -> Result<Ordering, E>
where
    T: ?Sized,
    F: FnOnce(&T, &T) -> Result<Ordering, E>,
{
    try_compare_nullable(a, b, NullOrdering::First, comparator)
}
