use crate::{predicate::FilterError, store::StoreError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level request error. Per-clause resolution failures never surface
/// here; only entity resolution, shape guardrails, and storage failures do.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
