//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Short code generation and format checks
//! - [`url_validator`] - Absolute `http`/`https` URL validation
//! - [`base_url`] - Public base URL resolution from configuration or `Host` header
//! - [`db_error`] - Classification of database errors

pub mod base_url;
pub mod code_generator;
pub mod db_error;
pub mod url_validator;
