//! Row models and DTOs.

pub mod critic;
pub mod movie;
pub mod review;
