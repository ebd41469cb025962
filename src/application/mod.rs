//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation and business rules, and
//! give HTTP handlers a small API to call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening and resolution
//! - [`services::click_service::ClickService`] - Click counting, logging and history

pub mod services;
