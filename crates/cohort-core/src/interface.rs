//! JSON payload contract for the two request shapes that drive the engine.
//!
//! Transport (routing, auth, rate limiting) lives outside this crate; these
//! types define exactly what crosses the boundary and how entity names are
//! resolved. Entity resolution is the one non-lenient boundary: an unknown
//! entity is a request-level error, never a dropped clause.

use crate::{
    clock::Clock, error::Error, executor::Executor, filter::FilterDefinition, schema::EntityKind,
    store::Store,
};
use serde::{Deserialize, Serialize};

///
/// PreviewRequest
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub entity: String,
    pub definition: FilterDefinition,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

///
/// PreviewResponse
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub results: Vec<serde_json::Value>,
    pub total_count: u64,
}

///
/// CountRequest
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountRequest {
    pub entity: String,
    pub definition: FilterDefinition,
}

///
/// CountResponse
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    pub count: u64,
}

/// Resolve a wire entity name or fail the request.
pub fn parse_entity(name: &str) -> Result<EntityKind, Error> {
    EntityKind::parse(name).ok_or_else(|| Error::UnknownEntity(name.to_string()))
}

impl<S: Store, C: Clock> Executor<S, C> {
    /// Handle one preview request end to end.
    pub fn handle_preview(&self, request: &PreviewRequest) -> Result<PreviewResponse, Error> {
        let entity = parse_entity(&request.entity)?;
        let page = self.preview(entity, &request.definition, request.limit, request.offset)?;

        Ok(PreviewResponse {
            results: page.results,
            total_count: page.total_count,
        })
    }

    /// Handle one count request end to end.
    pub fn handle_count(&self, request: &CountRequest) -> Result<CountResponse, Error> {
        let entity = parse_entity(&request.entity)?;
        let count = self.count(entity, &request.definition)?;

        Ok(CountResponse { count })
    }
}

///
/// TESTS
///
