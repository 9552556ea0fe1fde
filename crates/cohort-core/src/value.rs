use crate::types::Timestamp;
use std::{cmp::Ordering, mem::discriminant};
use ulid::Ulid;

///
/// Value
///
/// Runtime value read from an entity field or supplied by a filter clause.
/// Comparison helpers are deliberately partial: an undefined comparison
/// returns `None`, which predicate evaluation treats as a non-match.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(Timestamp),
    Ulid(Ulid),
    List(Vec<Value>),
}

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextMode {
    Cs, // case-sensitive
    #[default]
    Ci, // case-insensitive
}

impl Value {
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// A value is blank when it is null or an empty string.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Numeric comparison with widening between integer and float.
    ///
    /// Returns `None` for non-numeric operands or NaN.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            #[allow(clippy::cast_precision_loss)]
            (Self::Int(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            #[allow(clippy::cast_precision_loss)]
            (Self::Float(a), Self::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Perform equality comparison between a field value and a literal.
///
/// Text operands honor `mode`; numeric operands widen; all other operands
/// must share a variant. Returns `None` if the comparison is undefined.
#[must_use]
pub fn compare_eq(left: &Value, right: &Value, mode: TextMode) -> Option<bool> {
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Some(text_eq(a, b, mode)),
        _ if left.is_numeric() && right.is_numeric() => {
            left.cmp_numeric(right).map(Ordering::is_eq)
        }
        _ => same_variant(left, right).then_some(left == right),
    }
}

/// Perform ordering comparison between a field value and a literal.
///
/// Returns `None` if ordering is undefined for the given operands.
#[must_use]
pub fn compare_order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        _ if left.is_numeric() && right.is_numeric() => left.cmp_numeric(right),
        _ => None,
    }
}

///
/// TextOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextOp {
    Contains,
    StartsWith,
    EndsWith,
}

/// Perform a text-specific comparison.
///
/// Non-text operands return `None`.
#[must_use]
pub fn compare_text(left: &Value, right: &Value, mode: TextMode, op: TextOp) -> Option<bool> {
    let (Value::Text(haystack), Value::Text(needle)) = (left, right) else {
        // CONTRACT: text operators never apply to non-text values.
        return None;
    };

    let (haystack, needle) = match mode {
        TextMode::Cs => (haystack.clone(), needle.clone()),
        TextMode::Ci => (casefold(haystack), casefold(needle)),
    };

    let matched = match op {
        TextOp::Contains => haystack.contains(&needle),
        TextOp::StartsWith => haystack.starts_with(&needle),
        TextOp::EndsWith => haystack.ends_with(&needle),
    };

    Some(matched)
}

fn text_eq(left: &str, right: &str, mode: TextMode) -> bool {
    match mode {
        TextMode::Cs => left == right,
        TextMode::Ci => casefold(left) == casefold(right),
    }
}

fn same_variant(left: &Value, right: &Value) -> bool {
    discriminant(left) == discriminant(right)
}

fn casefold(input: &str) -> String {
    if input.is_ascii() {
        return input.to_ascii_lowercase();
    }

    // Unicode fallback.
    input.to_lowercase()
}

///
/// TESTS
///
