use crate::domain::id::WhiskyId;
use serde::{Deserialize, Serialize};

/// A whisky record as seen by API clients.
///
/// The identifier goes out as `_id` and is accepted as either `_id` or `id`.
/// It is absent on creation payloads and always present once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Whisky {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<WhiskyId>,
    pub bottle: String,
    pub price: String,
    pub rating: String,
    pub region: String,
}

impl Whisky {
    pub fn new(
        bottle: impl Into<String>,
        price: impl Into<String>,
        rating: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            bottle: bottle.into(),
            price: price.into(),
            rating: rating.into(),
            region: region.into(),
        }
    }

    pub fn with_id(mut self, id: WhiskyId) -> Self {
        self.id = Some(id);
        self
    }

    /// Same record without its identifier, as sent to the store on insert.
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}
