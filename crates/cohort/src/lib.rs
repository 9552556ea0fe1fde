//! ## Crate layout
//! - `core`: entity models, the wire filter tree, predicate compilation and
//!   evaluation, stores, and the bounded executor.
//!
//! The `prelude` module mirrors the surface an embedding application uses:
//! construct an `Executor` around a store and clock, then feed it preview
//! and count requests.

pub use cohort_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cohort_core::error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use cohort_core::{
        interface::{CountRequest, CountResponse, PreviewRequest, PreviewResponse},
        model::{Account, CampaignSend, Contact, Deal},
        prelude::*,
        store::MemoryStore,
    };
}
