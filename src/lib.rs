pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

pub use adapters::{InMemoryStore, MongoStore};
pub use app::{create_router, serve, start_server, AppState};
pub use config::{ServiceConfig, StorageBackend};
pub use domain::{ConfigProvider, Whisky, WhiskyId, WhiskyStore};
pub use utils::error::{Result, ServiceError};
