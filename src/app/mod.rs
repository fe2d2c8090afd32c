pub mod handlers;
pub mod server;

use crate::domain::WhiskyStore;
use std::sync::Arc;

/// Router state: the store handle shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WhiskyStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WhiskyStore>) -> Self {
        Self { store }
    }
}

pub use server::{create_router, serve, shutdown_signal, start_server};
