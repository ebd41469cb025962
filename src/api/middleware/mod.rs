//! HTTP middleware for request processing.
//!
//! Provides observability and cross-origin middleware.

pub mod cors;
pub mod trace;
