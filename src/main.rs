use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use whiskies_api::utils::{logger, validation::Validate};
use whiskies_api::{
    start_server, ConfigProvider, InMemoryStore, MongoStore, ServiceConfig, StorageBackend,
    WhiskyStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse()
        .resolve()
        .context("Failed to load configuration")?;

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_logger(config.verbose);
    }

    tracing::info!("Starting whiskies-api");
    if config.verbose {
        tracing::debug!(
            host = %config.host,
            port = config.port,
            storage = ?config.storage,
            mongo = %config.masked_connection_string(),
            "Service config"
        );
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e).context("Invalid configuration");
    }

    let store: Arc<dyn WhiskyStore> = match config.storage {
        StorageBackend::Mongo => {
            let store = MongoStore::connect(&config).await.map_err(|e| {
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                e
            });
            Arc::new(store.context("Failed to connect to MongoDB")?)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on exit");
            Arc::new(InMemoryStore::new())
        }
    };

    let addr = config.bind_address()?;
    start_server(store, addr)
        .await
        .context("HTTP server failed")?;

    tracing::info!("✅ whiskies-api stopped");
    Ok(())
}
