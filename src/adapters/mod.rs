// Adapters layer: concrete WhiskyStore implementations.

pub mod memory;
pub mod mongo;

pub use memory::InMemoryStore;
pub use mongo::{MongoStore, WhiskyDocument};
