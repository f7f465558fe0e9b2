//! Tagged comparison operands.
//!
//! Values whose kind is only known at runtime (decoded from JSON, collected
//! from mixed form fields, ...) are wrapped in [`Operand`] and compared with
//! [`equal`], which dispatches on the kind explicitly.

use serde::{Deserialize, Serialize};

use crate::ordering::compare_f64;
use crate::text::equal_chars;

/// The kind of value an [`Operand`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandKind {
    Null,
    Bool,
    Byte,
    Int,
    Long,
    Double,
    Bytes,
    Text,
    Sequence,
}

impl OperandKind {
    /// String representation for display and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Int => "int",
            Self::Long => "long",
            Self::Double => "double",
            Self::Bytes => "bytes",
            Self::Text => "text",
            Self::Sequence => "sequence",
        }
    }
}

impl std::fmt::Display for OperandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value taking part in a comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Operand {
    Null,
    Bool(bool),
    Byte(i8),
    Int(i32),
    Long(i64),
    Double(f64),
    Bytes(Vec<i8>),
    Text(String),
    Sequence(Vec<Operand>),
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Self::Null => OperandKind::Null,
            Self::Bool(_) => OperandKind::Bool,
            Self::Byte(_) => OperandKind::Byte,
            Self::Int(_) => OperandKind::Int,
            Self::Long(_) => OperandKind::Long,
            Self::Double(_) => OperandKind::Double,
            Self::Bytes(_) => OperandKind::Bytes,
            Self::Text(_) => OperandKind::Text,
            Self::Sequence(_) => OperandKind::Sequence,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// See [`equal`].
    pub fn equal(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

impl From<Option<Operand>> for Operand {
    fn from(value: Option<Operand>) -> Self {
        value.unwrap_or(Self::Null)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Operand>> for Operand {
    fn from(value: Vec<Operand>) -> Self {
        Self::Sequence(value)
    }
}

/// Null-safe equality dispatched on operand kind.
///
/// - two `Null`s are equal, `Null` against anything else is not;
/// - two sequences compare element-wise with this function;
/// - two texts compare case-sensitively character by character;
/// - two scalars of the same kind use that kind's own equality, where
///   doubles are equal exactly when [`compare_f64`] says so;
/// - operands of different kinds are never equal.
pub fn equal(a: &Operand, b: &Operand) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }

    match (a, b) {
        (Operand::Null, Operand::Null) => true,
        (Operand::Null, _) | (_, Operand::Null) => false,
        (Operand::Sequence(a), Operand::Sequence(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| equal(a, b))
        }
        (Operand::Text(a), Operand::Text(b)) => {
            equal_chars(Some(a.as_str()), Some(b.as_str()), true)
        }
        (Operand::Bool(a), Operand::Bool(b)) => a == b,
        (Operand::Byte(a), Operand::Byte(b)) => a == b,
        (Operand::Int(a), Operand::Int(b)) => a == b,
        (Operand::Long(a), Operand::Long(b)) => a == b,
        (Operand::Double(a), Operand::Double(b)) => compare_f64(*a, *b).is_eq(),
        (Operand::Bytes(a), Operand::Bytes(b)) => a == b,
        _ => false,
    }
}
