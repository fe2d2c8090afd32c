use crate::domain::id::WhiskyId;
use crate::domain::model::Whisky;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;

/// Persistence operations the HTTP service needs from a document store.
#[async_trait]
pub trait WhiskyStore: Send + Sync {
    /// Inserts the record (its `id` is ignored) and returns the assigned identifier.
    async fn insert(&self, whisky: &Whisky) -> Result<WhiskyId>;
    async fn find_by_bottle(&self, bottle: &str) -> Result<Option<Whisky>>;
    async fn find_by_id(&self, id: &WhiskyId) -> Result<Option<Whisky>>;
    async fn find_all(&self) -> Result<Vec<Whisky>>;
    /// Returns the number of deleted records (0 or 1).
    async fn delete_by_id(&self, id: &WhiskyId) -> Result<u64>;
    /// Releases connections held by the store.
    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> Result<SocketAddr>;
    fn connection_string(&self) -> &str;
    fn database_name(&self) -> &str;
    fn collection_name(&self) -> &str;
}
