//! Read-only compile diagnostics.
//!
//! A dropped clause never fails the request (spec'd leniency), but every
//! drop is recorded here and logged so a preview UI can explain why a
//! filter matched more than expected.

use std::fmt;

///
/// DropReason
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DropReason {
    /// Field is not in the target entity's allow-list.
    UnknownField,
    /// Operator string is not in the operator table.
    UnknownOperator,
    /// Operator recognized but the value had the wrong shape or type.
    MalformedValue { message: String },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField => f.write_str("unknown field"),
            Self::UnknownOperator => f.write_str("unknown operator"),
            Self::MalformedValue { message } => write!(f, "malformed value: {message}"),
        }
    }
}

///
/// DroppedClause
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DroppedClause {
    pub field: String,
    pub operator: String,
    pub reason: DropReason,
}

///
/// CompileDiagnostics
///
/// Per-compilation report: how many leaves resolved into the predicate and
/// which were dropped. An empty `dropped` list with `resolved == 0` means
/// the caller submitted an empty tree.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompileDiagnostics {
    pub resolved: usize,
    pub dropped: Vec<DroppedClause>,
}

impl CompileDiagnostics {
    pub(crate) fn record_drop(&mut self, field: &str, operator: &str, reason: DropReason) {
        tracing::warn!(field, operator, %reason, "dropping unresolvable filter clause");

        self.dropped.push(DroppedClause {
            field: field.to_string(),
            operator: operator.to_string(),
            reason,
        });
    }
}
