//! Generic null-safe equality.

use std::ptr;

/// Null-safe equality of two optional references.
///
/// - the same reference (address and length) is always equal;
/// - exactly one `None` is unequal, two `None`s are equal;
/// - otherwise the type's own `PartialEq` decides.
///
/// Slices compare element-wise and `str` compares character-wise
/// (case-sensitive), so arrays and text need no special casing here.
/// For explicit per-kind dispatch over mixed values see [`crate::operand`].
///
/// Floats use IEEE `PartialEq`: a NaN never equals itself and `0.0 == -0.0`.
/// Use [`crate::ordering::compare_f64`] (or [`crate::operand::Operand::Double`])
/// where NaNs must be equal and signed zeros distinct.
pub fn equal<T>(a: Option<&T>, b: Option<&T>) -> bool
where
    T: PartialEq + ?Sized,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => ptr::eq(a, b) || a == b,
        _ => false,
    }
}

/// Null-safe element-wise equality of two optional slices.
///
/// If either side is `None` the result is whether both are.
pub fn equal_arrays<T>(a: Option<&[T]>, b: Option<&[T]>) -> bool
where
    T: PartialEq,
{
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        (a, b) => a.is_none() && b.is_none(),
    }
}
