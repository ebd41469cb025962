//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod metrics;
pub mod redirect;
pub mod shorten;
pub mod stats;
pub mod urls;

pub use health::{health_handler, readiness_handler};
pub use metrics::{metrics_json_handler, metrics_text_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
pub use urls::list_urls_handler;
