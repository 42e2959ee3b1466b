//! Path-shape guards.
//!
//! Review listing is only addressable under a movie, and review mutation only
//! by review id alone. These guards reject a chain on the shape of the matched
//! route before any data access happens. They never suspend.

use axum::extract::OriginalUri;
use axum::http::Method;
use marquee_core::error::CoreError;

use super::context::RequestContext;
use crate::error::{AppError, AppResult};

/// The shared "method not allowed" failure for `method` on `path`.
pub fn method_not_allowed(method: &Method, path: &str) -> AppError {
    AppError::Core(CoreError::MethodNotAllowed {
        method: method.to_string(),
        path: path.to_string(),
    })
}

/// Passes only when the route carries a movie id.
pub fn has_movie_id_in_path<R>(ctx: RequestContext<R>) -> AppResult<RequestContext<R>> {
    if ctx.params().movie_id.is_some() {
        Ok(ctx)
    } else {
        Err(method_not_allowed(ctx.method(), ctx.path()))
    }
}

/// Passes only when the route does not carry a movie id.
pub fn no_movie_id_in_path<R>(ctx: RequestContext<R>) -> AppResult<RequestContext<R>> {
    if ctx.params().movie_id.is_some() {
        Err(method_not_allowed(ctx.method(), ctx.path()))
    } else {
        Ok(ctx)
    }
}

/// Method fallback for routes that exist but do not support the request method.
pub async fn reject_method(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    method_not_allowed(&method, uri.path())
}
