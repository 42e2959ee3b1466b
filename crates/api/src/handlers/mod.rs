//! Request handlers.
//!
//! Each submodule defines the chain steps for one resource kind and the
//! route-level chains that run them in order. Steps that touch the store run
//! inside [`boundary`](crate::middleware::boundary::boundary); guards do not.

pub mod movies;
pub mod reviews;
