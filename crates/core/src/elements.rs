//! Element-set equality of collections.
//!
//! Both helpers check the element count first and then test that every
//! element of the second side is present in a deduplicated set built from the
//! first. Duplicate counts are deliberately not compared: `[1, 1, 2]` and
//! `[1, 2, 2]` have equal elements.

use std::collections::HashSet;
use std::hash::Hash;

/// Whether two collections have the same size and the same distinct elements.
///
/// Accepts anything that iterates by reference with a known length (`&Vec`,
/// `&[T]`, `&HashSet`, `&BTreeSet`, `&VecDeque`, ...), and the two sides may
/// be different container types.
pub fn have_equal_elements<'a, T, A, B>(a: A, b: B) -> bool
where
    T: Eq + Hash + 'a,
    A: IntoIterator<Item = &'a T>,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator<Item = &'a T>,
    B::IntoIter: ExactSizeIterator,
{
    let a = a.into_iter();
    let mut b = b.into_iter();

    if a.len() != b.len() {
        tracing::trace!(left = a.len(), right = b.len(), "Element counts differ");
        return false;
    }

    let a_set: HashSet<&T> = a.collect();
    b.all(|item| a_set.contains(item))
}

/// [`have_equal_elements`] for optional slices.
///
/// If either side is `None` the result is whether both are.
pub fn have_equal_elements_opt<T>(a: Option<&[T]>, b: Option<&[T]>) -> bool
where
    T: Eq + Hash,
{
    match (a, b) {
        (Some(a), Some(b)) => have_equal_elements(a, b),
        (a, b) => a.is_none() && b.is_none(),
    }
}
