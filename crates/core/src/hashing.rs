//! Null-safe hash codes.
//!
//! Digests come from a fixed-key `DefaultHasher`, so the same value always
//! hashes the same way within one build of the library.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Hash code of an optional value; `None` hashes to `0`.
pub fn hashcode<T>(obj: Option<&T>) -> u64
where
    T: Hash + ?Sized,
{
    match obj {
        Some(obj) => {
            let mut hasher = DefaultHasher::new();
            obj.hash(&mut hasher);
            hasher.finish()
        }
        None => 0,
    }
}

/// Combine two hash codes with XOR.
///
/// Symmetric in its arguments and cancels to `0` for two equal values, so it
/// is a weak combiner. Do not rely on it where collisions matter.
pub fn hashcode_pair<A, B>(a: Option<&A>, b: Option<&B>) -> u64
where
    A: Hash + ?Sized,
    B: Hash + ?Sized,
{
    hashcode(a) ^ hashcode(b)
}
