//! Core runtime for Cohort: CRM entity models, the wire filter tree, the
//! predicate compiler/evaluator, and the bounded page/count executor.

// public exports are one module level down
pub mod clock;
pub mod error;
pub mod executor;
pub mod filter;
pub mod interface;
pub mod model;
pub mod predicate;
pub mod schema;
pub mod store;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, or compile internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        clock::{Clock, SystemClock},
        executor::Executor,
        filter::{FilterCondition, FilterDefinition, FilterGroup, Logic},
        schema::EntityKind,
        value::Value,
    };
}
