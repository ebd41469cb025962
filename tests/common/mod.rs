#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tinylink::application::services::{ClickService, LinkService};
use tinylink::domain::entities::{ClickEvent, NewClickEvent, NewUrlMapping, UrlMapping};
use tinylink::domain::repositories::{ClickRepository, UrlRepository};
use tinylink::error::StoreError;
use tinylink::infrastructure::metrics::MetricsAggregator;
use tinylink::state::AppState;
use tinylink::utils::code_generator::CodeGenerator;

pub const TEST_BASE_URL: &str = "http://sho.rt";

/// Mapping store backed by a mutex-guarded vector.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    rows: Mutex<Vec<UrlMapping>>,
    fail: AtomicBool,
}

impl InMemoryUrlRepository {
    /// Makes every subsequent call return a storage error.
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    pub fn insert(&self, code: &str, url: &str) -> UrlMapping {
        let mut rows = self.rows.lock().unwrap();
        let mapping = UrlMapping::new(
            rows.len() as i64 + 1,
            url.to_string(),
            code.to_string(),
            Utc::now(),
            0,
        );
        rows.push(mapping.clone());
        mapping
    }

    pub fn get(&self, code: &str) -> Option<UrlMapping> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.short_code == code)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Storage(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|m| m.short_code == new_mapping.short_code) {
            return Err(StoreError::DuplicateCode(new_mapping.short_code));
        }

        let mapping = UrlMapping::new(
            rows.len() as i64 + 1,
            new_mapping.original_url,
            new_mapping.short_code,
            Utc::now(),
            0,
        );
        rows.push(mapping.clone());
        Ok(mapping)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, StoreError> {
        self.check()?;
        Ok(self.get(short_code))
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<(), StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();

        match rows.iter_mut().find(|m| m.short_code == short_code) {
            Some(mapping) => {
                mapping.clicks += 1;
                Ok(())
            }
            None => Err(StoreError::NotFound(short_code.to_string())),
        }
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn total_clicks(&self) -> Result<i64, StoreError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().iter().map(|m| m.clicks).sum())
    }
}

/// Click log backed by a mutex-guarded vector.
#[derive(Default)]
pub struct InMemoryClickRepository {
    rows: Mutex<Vec<ClickEvent>>,
    fail: AtomicBool,
}

impl InMemoryClickRepository {
    /// Makes every subsequent append fail.
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<ClickEvent> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn append(&self, new_click: NewClickEvent) -> Result<ClickEvent, StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Storage(sqlx::Error::PoolClosed));
        }

        let mut rows = self.rows.lock().unwrap();
        let click = ClickEvent::new(
            rows.len() as i64 + 1,
            new_click.mapping_id,
            new_click.user_agent,
            new_click.referrer,
            Utc::now(),
        );
        rows.push(click.clone());
        Ok(click)
    }

    async fn list_for_mapping(
        &self,
        mapping_id: i64,
        limit: i64,
    ) -> Result<Vec<ClickEvent>, StoreError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .filter(|c| c.mapping_id == mapping_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// State plus handles to the in-memory stores behind it.
pub struct TestContext {
    pub state: AppState,
    pub urls: Arc<InMemoryUrlRepository>,
    pub clicks: Arc<InMemoryClickRepository>,
    pub metrics: Arc<MetricsAggregator>,
}

pub fn create_test_context() -> TestContext {
    create_test_context_with_base(Some(TEST_BASE_URL))
}

pub fn create_test_context_with_base(base_url: Option<&str>) -> TestContext {
    let urls = Arc::new(InMemoryUrlRepository::default());
    let clicks = Arc::new(InMemoryClickRepository::default());
    let metrics = Arc::new(MetricsAggregator::new().unwrap());

    let link_service = Arc::new(LinkService::new(urls.clone(), CodeGenerator::default(), 5));
    let click_service = Arc::new(ClickService::new(urls.clone(), clicks.clone()));

    let state = AppState::new(
        link_service,
        click_service,
        metrics.clone(),
        base_url.map(str::to_string),
    );

    TestContext {
        state,
        urls,
        clicks,
        metrics,
    }
}
