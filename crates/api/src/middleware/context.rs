//! Per-request context threaded through a route's chain.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, OriginalUri, Path};
use axum::http::request::Parts;
use axum::http::Method;

use crate::error::AppError;

/// Path parameters a route may carry. Absent when the matched route has no
/// such segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub movie_id: Option<String>,
    pub review_id: Option<String>,
}

impl RouteParams {
    fn from_map(mut params: HashMap<String, String>) -> Self {
        Self {
            movie_id: params.remove("movie_id"),
            review_id: params.remove("review_id"),
        }
    }
}

/// Facts about the matched route plus a value resolved by an earlier step.
///
/// Chains start with `RequestContext<()>`. An existence guard turns it into
/// `RequestContext<Movie>` or `RequestContext<Review>` via
/// [`RequestContext::resolve`], so a step that needs the resolved entity
/// cannot be called before the guard that loads it.
///
/// Extracted from the request like any other axum extractor:
///
/// ```ignore
/// async fn handler(ctx: RequestContext) -> AppResult<Response> {
///     let ctx = no_movie_id_in_path(ctx)?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext<R = ()> {
    method: Method,
    path: String,
    params: RouteParams,
    resolved: R,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>, params: RouteParams) -> Self {
        Self {
            method,
            path: path.into(),
            params,
            resolved: (),
        }
    }
}

impl<R> RequestContext<R> {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The full request path as received, before any router nesting.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn resolved(&self) -> &R {
        &self.resolved
    }

    pub fn into_resolved(self) -> R {
        self.resolved
    }

    /// Attach a value for later steps, replacing whatever was resolved before.
    pub fn resolve<T>(self, value: T) -> RequestContext<T> {
        RequestContext {
            method: self.method,
            path: self.path,
            params: self.params,
            resolved: value,
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = match Option::<Path<HashMap<String, String>>>::from_request_parts(parts, state)
            .await
        {
            Ok(Some(Path(params))) => RouteParams::from_map(params),
            Ok(None) => RouteParams::default(),
            Err(rejection) => return Err(AppError::BadRequest(rejection.body_text())),
        };

        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        Ok(RequestContext::new(parts.method.clone(), path, params))
    }
}
