//! Fakes for the storage and store seams, used by service and handler tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::async_trait;
use bytes::Bytes;
use tokio::sync::Barrier;

use super::repo::FoodLogStore;
use crate::storage::StorageClient;

#[derive(Default)]
pub struct RecordingStorage {
    pub puts: Mutex<Vec<(String, String)>>,
    fail_put: bool,
}

impl RecordingStorage {
    pub fn failing() -> Self {
        Self {
            puts: Mutex::new(Vec::new()),
            fail_put: true,
        }
    }
}

#[async_trait]
impl StorageClient for RecordingStorage {
    async fn put_object(&self, key: &str, _body: Bytes, content_type: &str) -> anyhow::Result<()> {
        if self.fail_put {
            anyhow::bail!("storage unavailable");
        }
        self.puts
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string()));
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("http://storage.local/food-photos/{}", key)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub rows: Mutex<HashMap<i64, Option<Vec<String>>>>,
    pub inserts: Mutex<Vec<(i64, Vec<String>)>>,
    pub updates: Mutex<Vec<(i64, Vec<String>)>>,
    fetch_barrier: Option<Arc<Barrier>>,
}

impl MemoryStore {
    /// Every fetch waits on the barrier after reading, so two callers can be
    /// held at the same snapshot before either writes.
    pub fn with_fetch_barrier(barrier: Arc<Barrier>) -> Self {
        Self {
            fetch_barrier: Some(barrier),
            ..Self::default()
        }
    }
}

#[async_trait]
impl FoodLogStore for MemoryStore {
    async fn fetch_image_urls(&self, food_log_id: i64) -> anyhow::Result<Option<Vec<String>>> {
        let current = self
            .rows
            .lock()
            .unwrap()
            .get(&food_log_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("food log {} not found", food_log_id))?;
        if let Some(b) = &self.fetch_barrier {
            b.wait().await;
        }
        Ok(current)
    }

    async fn update_image_urls(&self, food_log_id: i64, urls: &[String]) -> anyhow::Result<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(food_log_id, Some(urls.to_vec()));
        self.updates
            .lock()
            .unwrap()
            .push((food_log_id, urls.to_vec()));
        Ok(())
    }

    async fn insert_log(&self, user_id: i64, urls: &[String]) -> anyhow::Result<()> {
        self.inserts.lock().unwrap().push((user_id, urls.to_vec()));
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
