//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`UrlMapping`] - A stored original URL / short code pair with its click counter
//! - [`ClickEvent`] - One successful redirect with request metadata
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! [`NewUrlMapping`] and [`NewClickEvent`] carry only the caller-supplied fields,
//! the store assigns ids and timestamps.

pub mod click;
pub mod url_mapping;

pub use click::{ClickEvent, NewClickEvent};
pub use url_mapping::{NewUrlMapping, UrlMapping};
