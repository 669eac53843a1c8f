use std::sync::Arc;

use crate::errors::ServiceError;
use crate::ids;
use crate::record::Record;
use crate::storage::mem_collection::MemCollection;

const RESOURCE: &str = "hub";

/// In-memory store for the hub collection.
///
/// Same shape as `DogStore` minus the adoption policy; hubs are plain
/// records with a server-assigned id.
#[derive(Clone)]
pub struct HubStore {
    collection: MemCollection,
}

impl HubStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { collection: MemCollection::new() })
    }

    /// All hubs, in insertion order.
    pub async fn list(&self) -> Vec<Record> {
        self.collection.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Record, ServiceError> {
        self.collection
            .find(id)
            .await
            .ok_or_else(|| ServiceError::not_found(RESOURCE))
    }

    /// Store a new hub under a fresh id and return it.
    pub async fn create(&self, fields: Record) -> Record {
        self.collection.insert(fields, ids::generate).await
    }

    /// Merge `fields` into an existing hub; unspecified fields survive.
    pub async fn patch(&self, id: &str, fields: Record) -> Result<Record, ServiceError> {
        self.collection
            .merge(id, fields)
            .await
            .ok_or_else(|| ServiceError::not_found(RESOURCE))
    }

    /// Replace an existing hub entirely; unspecified fields are dropped.
    pub async fn replace(&self, id: &str, fields: Record) -> Result<Record, ServiceError> {
        self.collection
            .replace(id, fields)
            .await
            .ok_or_else(|| ServiceError::not_found(RESOURCE))
    }

    /// Remove a hub and return it.
    pub async fn delete(&self, id: &str) -> Result<Record, ServiceError> {
        self.collection
            .remove(id)
            .await
            .ok_or_else(|| ServiceError::not_found(RESOURCE))
    }
}
