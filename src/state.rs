//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ClickService, LinkService};
use crate::infrastructure::metrics::MetricsAggregator;

/// Application state shared across handlers.
///
/// Cheap to clone: every field is reference-counted. The metrics aggregator is a
/// single instance owned here rather than a process-wide static.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub click_service: Arc<ClickService>,
    pub metrics: Arc<MetricsAggregator>,
    /// Public base for generated short URLs. When `None`, the request `Host` is used.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        click_service: Arc<ClickService>,
        metrics: Arc<MetricsAggregator>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service,
            click_service,
            metrics,
            base_url,
        }
    }
}
