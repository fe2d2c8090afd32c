// Domain layer: the whisky record, its identifier and the ports adapters implement.

pub mod id;
pub mod model;
pub mod ports;

pub use id::WhiskyId;
pub use model::Whisky;
pub use ports::{ConfigProvider, WhiskyStore};
