mod ast;
mod compile;
mod diagnostics;
mod eval;
mod op;

pub use ast::{ComparePredicate, CompareOp, Predicate};
pub use compile::{
    Compiled, FilterError, MAX_FILTER_CLAUSES, MAX_FILTER_DEPTH, compile,
};
pub use diagnostics::{CompileDiagnostics, DropReason, DroppedClause};
pub use eval::{FieldPresence, Row, eval};
pub use op::Operator;
