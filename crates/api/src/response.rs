//! Shared `{ "data": ... }` envelope types for API handlers.
//!
//! All API payloads use a `{ "data": ... }` envelope in both directions.

use serde::{Deserialize, Serialize};

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: movies }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Standard `{ "data": T }` request envelope. A missing `data` key yields
/// `T::default()`.
#[derive(Debug, Deserialize)]
pub struct DataRequest<T> {
    #[serde(default)]
    pub data: T,
}
