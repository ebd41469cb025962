//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits are
//! implemented in [`crate::infrastructure::persistence`] and consumed by the
//! services in [`crate::application::services`].
//!
//! # Redirect Flow
//!
//! 1. The redirect handler resolves a short code via [`repositories::UrlRepository`]
//! 2. On a hit, the click counter is incremented on the mapping row
//! 3. A [`entities::NewClickEvent`] is appended through [`repositories::ClickRepository`]
//!    (best-effort, failures are logged and dropped)

pub mod entities;
pub mod repositories;
