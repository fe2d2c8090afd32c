use crate::domain::ports::{ConfigProvider, WhiskyStore};
use crate::domain::{Whisky, WhiskyId};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

/// Storage form of a whisky: `_id` is a native ObjectId rather than a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhiskyDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub bottle: String,
    pub price: String,
    pub rating: String,
    pub region: String,
}

impl From<&Whisky> for WhiskyDocument {
    fn from(whisky: &Whisky) -> Self {
        Self {
            id: None,
            bottle: whisky.bottle.clone(),
            price: whisky.price.clone(),
            rating: whisky.rating.clone(),
            region: whisky.region.clone(),
        }
    }
}

impl From<WhiskyDocument> for Whisky {
    fn from(document: WhiskyDocument) -> Self {
        Self {
            id: document.id.map(WhiskyId::from),
            bottle: document.bottle,
            price: document.price,
            rating: document.rating,
            region: document.region,
        }
    }
}

/// MongoDB-backed store. The driver's client owns a connection pool shared by
/// every in-flight request.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<WhiskyDocument>,
}

impl MongoStore {
    /// Connects and pings the server so failures surface before traffic is accepted.
    pub async fn connect<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::with_uri_str(config.connection_string()).await?;
        let database = client.database(config.database_name());
        database.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(
            database = config.database_name(),
            collection = config.collection_name(),
            "Connected to MongoDB"
        );

        let collection = database.collection::<WhiskyDocument>(config.collection_name());
        Ok(Self { client, collection })
    }

    pub fn collection(&self) -> &Collection<WhiskyDocument> {
        &self.collection
    }
}

#[async_trait]
impl WhiskyStore for MongoStore {
    async fn insert(&self, whisky: &Whisky) -> Result<WhiskyId> {
        let result = self
            .collection
            .insert_one(WhiskyDocument::from(whisky))
            .await?;

        result
            .inserted_id
            .as_object_id()
            .map(WhiskyId::from)
            .ok_or_else(|| ServiceError::UnexpectedIdError {
                value: result.inserted_id.to_string(),
            })
    }

    async fn find_by_bottle(&self, bottle: &str) -> Result<Option<Whisky>> {
        let found = self.collection.find_one(doc! { "bottle": bottle }).await?;
        Ok(found.map(Whisky::from))
    }

    async fn find_by_id(&self, id: &WhiskyId) -> Result<Option<Whisky>> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.to_object_id()? })
            .await?;
        Ok(found.map(Whisky::from))
    }

    async fn find_all(&self) -> Result<Vec<Whisky>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<WhiskyDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Whisky::from).collect())
    }

    async fn delete_by_id(&self, id: &WhiskyId) -> Result<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_object_id()? })
            .await?;
        Ok(result.deleted_count)
    }

    async fn shutdown(&self) -> Result<()> {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB connection closed");
        Ok(())
    }
}
