use crate::domain::ports::WhiskyStore;
use crate::domain::{Whisky, WhiskyId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store that keeps records in insertion order.
///
/// Used by the test suite and by `--storage memory` for running the API
/// without a database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<Vec<Whisky>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl WhiskyStore for InMemoryStore {
    async fn insert(&self, whisky: &Whisky) -> Result<WhiskyId> {
        let id = WhiskyId::generate();
        let stored = whisky.without_id().with_id(id.clone());
        self.records.write().await.push(stored);
        Ok(id)
    }

    async fn find_by_bottle(&self, bottle: &str) -> Result<Option<Whisky>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|w| w.bottle == bottle).cloned())
    }

    async fn find_by_id(&self, id: &WhiskyId) -> Result<Option<Whisky>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|w| w.id.as_ref() == Some(id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Whisky>> {
        Ok(self.records.read().await.clone())
    }

    async fn delete_by_id(&self, id: &WhiskyId) -> Result<u64> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|w| w.id.as_ref() != Some(id));
        Ok((before - records.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_fresh_id() {
        let store = InMemoryStore::new();
        let whisky = Whisky::new("Lagavulin 16", "99.99", "9.5", "Islay");

        let first = store.insert(&whisky).await.unwrap();
        let second = store.insert(&whisky).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_insert_ignores_client_supplied_id() {
        let store = InMemoryStore::new();
        let supplied = WhiskyId::generate();
        let whisky = Whisky::new("a", "b", "c", "d").with_id(supplied.clone());

        let assigned = store.insert(&whisky).await.unwrap();

        assert_ne!(assigned, supplied);
        assert!(store.find_by_id(&supplied).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_bottle_and_id() {
        let store = InMemoryStore::new();
        let id = store
            .insert(&Whisky::new("Oban 14", "80.00", "8.7", "Highland"))
            .await
            .unwrap();

        let by_bottle = store.find_by_bottle("Oban 14").await.unwrap().unwrap();
        assert_eq!(by_bottle.id.as_ref(), Some(&id));
        assert!(store.find_by_bottle("Oban 18").await.unwrap().is_none());

        let by_id = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(by_id, by_bottle);
    }

    #[tokio::test]
    async fn test_delete_reports_count() {
        let store = InMemoryStore::new();
        let id = store
            .insert(&Whisky::new("a", "b", "c", "d"))
            .await
            .unwrap();

        assert_eq!(store.delete_by_id(&id).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(&id).await.unwrap(), 0);
        assert!(store.is_empty().await);
    }
}
