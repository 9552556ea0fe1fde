use crate::value::{TextMode, Value};

///
/// Predicate AST
///
/// Internal representation a wire filter tree compiles into. This layer is
/// schema-agnostic: field names are already resolved against the entity
/// allow-list, operators are a closed set, and literal values are typed.
/// All leniency (dropping unresolvable clauses) happens before this point.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    NotIn,
    Contains,
    StartsWith,
    EndsWith,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, PartialEq)]
pub struct ComparePredicate {
    pub field: &'static str,
    pub op: CompareOp,
    pub value: Value,
    pub mode: TextMode,
}

impl ComparePredicate {
    #[must_use]
    pub const fn new(field: &'static str, op: CompareOp, value: Value, mode: TextMode) -> Self {
        Self {
            field,
            op,
            value,
            mode,
        }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    IsBlank { field: &'static str },
    IsNotBlank { field: &'static str },
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub const fn compare(
        field: &'static str,
        op: CompareOp,
        value: Value,
        mode: TextMode,
    ) -> Self {
        Self::Compare(ComparePredicate::new(field, op, value, mode))
    }
}
