//! PostgreSQL repository implementations.
//!
//! Queries are built with SQLx at runtime and mapped through `FromRow` structs,
//! so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - Mapping storage, resolution and click counters
//! - [`PgClickRepository`] - Click log

pub mod pg_click_repository;
pub mod pg_url_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_url_repository::PgUrlRepository;
