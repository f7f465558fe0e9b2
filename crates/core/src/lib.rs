//! Null-safe equality, ordering, and hashing helpers.
//!
//! Every function treats a missing value (`None`) as a first-class input and
//! is total over its domain. Nothing here performs I/O or keeps state between
//! calls, so all helpers are safe to call from any thread.

pub mod case_fold;
pub mod config;
pub mod elements;
pub mod equality;
pub mod error;
pub mod hashing;
pub mod operand;
pub mod ordering;
pub mod text;

pub use case_fold::{chars_equal_ignore_case, to_lower_case, to_upper_case};
pub use config::CompareConfig;
pub use elements::{have_equal_elements, have_equal_elements_opt};
pub use equality::{equal, equal_arrays};
pub use error::CoreError;
pub use hashing::{hashcode, hashcode_pair};
pub use operand::{Operand, OperandKind};
pub use ordering::{
    compare, compare_bool, compare_bytes, compare_f64, compare_i32, compare_i64, compare_i8,
    compare_natural, compare_with, try_compare_with, NaturalOrder, NullOrdering,
};
pub use text::{
    equal_chars, equal_chars_exact, equal_str, equal_str_case, str_equal, str_equal_case,
    CaseSensitivity, CharSequence,
};
