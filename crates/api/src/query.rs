//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /movies` (`?is_showing=`).
///
/// Kept as the raw string; [`marquee_core::showing::showing_only`] decides
/// whether it filters.
#[derive(Debug, Default, Deserialize)]
pub struct ShowingParams {
    pub is_showing: Option<String>,
}
