//! Domain types and rules for the movie catalog service.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates build on it.

pub mod error;
pub mod review;
pub mod showing;
pub mod types;
