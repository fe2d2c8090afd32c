//! Serves the API on a real socket and exercises it over HTTP.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use whiskies_api::{serve, InMemoryStore, Whisky, WhiskyId, WhiskyStore};

/// In-memory store that remembers whether it was released.
#[derive(Clone, Default)]
struct ReleaseTrackingStore {
    inner: InMemoryStore,
    released: Arc<AtomicBool>,
}

#[async_trait]
impl WhiskyStore for ReleaseTrackingStore {
    async fn insert(&self, whisky: &Whisky) -> whiskies_api::Result<WhiskyId> {
        assert!(!self.released.load(Ordering::SeqCst), "store used after release");
        self.inner.insert(whisky).await
    }

    async fn find_by_bottle(&self, bottle: &str) -> whiskies_api::Result<Option<Whisky>> {
        self.inner.find_by_bottle(bottle).await
    }

    async fn find_by_id(&self, id: &WhiskyId) -> whiskies_api::Result<Option<Whisky>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> whiskies_api::Result<Vec<Whisky>> {
        self.inner.find_all().await
    }

    async fn delete_by_id(&self, id: &WhiskyId) -> whiskies_api::Result<u64> {
        self.inner.delete_by_id(id).await
    }

    async fn shutdown(&self) -> whiskies_api::Result<()> {
        self.released.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn test_full_lifecycle_over_http() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base = format!("http://{}", listener.local_addr()?);
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve(
        listener,
        Arc::new(InMemoryStore::new()),
        async move {
            let _ = stop_rx.await;
        },
    ));

    let client = reqwest::Client::new();

    let hello: Value = client.get(format!("{}/hello", base)).send().await?.json().await?;
    assert_eq!(hello, json!("Hello Confoo!!!"));

    let response = client
        .post(format!("{}/whiskies/", base))
        .json(&json!({
            "bottle": "Lagavulin 16",
            "price": "99.99",
            "rating": "9.5",
            "region": "Islay"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let created: Value = response.json().await?;
    let id = created["_id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 24);

    let listed: Vec<Value> = client
        .get(format!("{}/whiskies/", base))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed, vec![created.clone()]);

    let response = client
        .delete(format!("{}/whiskies/{}", base, id))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let response = client.get(format!("{}/whiskies/{}", base, id)).send().await?;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    stop_tx.send(()).ok();
    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_store_released_after_graceful_shutdown() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base = format!("http://{}", listener.local_addr()?);
    let store = ReleaseTrackingStore::default();
    let released = Arc::clone(&store.released);
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve(listener, Arc::new(store), async move {
        let _ = stop_rx.await;
    }));

    let response = reqwest::Client::new()
        .post(format!("{}/whiskies/", base))
        .json(&json!({
            "bottle": "Caol Ila 12",
            "price": "55.00",
            "rating": "8.6",
            "region": "Islay"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    assert!(!released.load(Ordering::SeqCst));

    stop_tx.send(()).ok();
    server.await??;

    assert!(released.load(Ordering::SeqCst));
    Ok(())
}
