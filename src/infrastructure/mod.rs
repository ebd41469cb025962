//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`metrics`] - Process-wide counters and latency histogram (Prometheus)

pub mod metrics;
pub mod persistence;
