//! Building blocks for per-route request chains.
//!
//! A route's chain is an ordered, fixed sequence of steps. Each step either
//! returns the (possibly enriched) [`context::RequestContext`] for the next
//! step, produces the final response, or fails with an
//! [`AppError`](crate::error::AppError) that skips every remaining step.
//!
//! - [`context::RequestContext`] -- Route facts plus whatever earlier steps resolved.
//! - [`path_shape`] -- Synchronous guards on which path parameters are present.
//! - [`boundary::boundary`] -- Wraps data-access steps so every failure lands in `AppError`.

pub mod boundary;
pub mod context;
pub mod path_shape;
