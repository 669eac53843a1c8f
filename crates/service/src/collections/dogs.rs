use std::sync::Arc;

use serde_json::Value;

use crate::errors::ServiceError;
use crate::ids;
use crate::record::Record;
use crate::storage::mem_collection::MemCollection;

const RESOURCE: &str = "dog";

/// In-memory store for the dog collection.
///
/// Dogs carry a reserved `adopter_id` field that is forced to null on
/// create, whatever the client sent; a dog starts out unadopted.
#[derive(Clone)]
pub struct DogStore {
    collection: MemCollection,
}

impl DogStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { collection: MemCollection::new() })
    }

    /// All dogs, in insertion order.
    pub async fn list(&self) -> Vec<Record> {
        self.collection.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Record, ServiceError> {
        self.collection
            .find(id)
            .await
            .ok_or_else(|| ServiceError::not_found(RESOURCE))
    }

    /// Store a new dog under a fresh id and return it.
    pub async fn create(&self, mut fields: Record) -> Record {
        fields.insert("adopter_id".to_string(), Value::Null);
        self.collection.insert(fields, ids::generate).await
    }

    /// Merge `fields` into an existing dog; unspecified fields survive.
    pub async fn patch(&self, id: &str, fields: Record) -> Result<Record, ServiceError> {
        self.collection
            .merge(id, fields)
            .await
            .ok_or_else(|| ServiceError::not_found(RESOURCE))
    }

    /// Replace an existing dog entirely; unspecified fields are dropped.
    pub async fn replace(&self, id: &str, fields: Record) -> Result<Record, ServiceError> {
        self.collection
            .replace(id, fields)
            .await
            .ok_or_else(|| ServiceError::not_found(RESOURCE))
    }

    /// Remove a dog and return it.
    pub async fn delete(&self, id: &str) -> Result<Record, ServiceError> {
        self.collection
            .remove(id)
            .await
            .ok_or_else(|| ServiceError::not_found(RESOURCE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::id_of;
    use serde_json::json;

    fn fields(v: serde_json::Value) -> Record {
        v.as_object().expect("object literal").clone()
    }

    #[tokio::test]
    async fn create_forces_adopter_id_null() {
        let store = DogStore::new();
        let created = store
            .create(fields(json!({"name": "Rex", "adopter_id": "someone"})))
            .await;
        assert_eq!(created["adopter_id"], Value::Null);
        assert_eq!(created["name"], json!("Rex"));
        assert!(id_of(&created).is_some());
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() {
        let store = DogStore::new();
        let created = store
            .create(fields(json!({"id": "mine", "name": "Rex"})))
            .await;
        assert_ne!(id_of(&created), Some("mine"));
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let store = DogStore::new();
        for _ in 0..50 {
            store.create(fields(json!({"name": "pup"}))).await;
        }
        let dogs = store.list().await;
        let mut ids: Vec<_> = dogs.iter().filter_map(id_of).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = DogStore::new();
        let created = store.create(fields(json!({"name": "Rex"}))).await;
        let id = id_of(&created).expect("id").to_string();
        assert_eq!(store.get(&id).await.expect("found"), created);
    }

    #[tokio::test]
    async fn patch_preserves_and_replace_drops() {
        let store = DogStore::new();
        let created = store
            .create(fields(json!({"name": "Rex", "breed": "lab"})))
            .await;
        let id = id_of(&created).expect("id").to_string();

        let patched = store
            .patch(&id, fields(json!({"name": "Fido"})))
            .await
            .expect("patched");
        assert_eq!(patched["name"], json!("Fido"));
        assert_eq!(patched["breed"], json!("lab"));

        let replaced = store
            .replace(&id, fields(json!({"name": "Fido"})))
            .await
            .expect("replaced");
        assert_eq!(replaced["name"], json!("Fido"));
        assert!(replaced.get("breed").is_none());
        assert!(replaced.get("adopter_id").is_none());
        assert_eq!(id_of(&replaced), Some(id.as_str()));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let store = DogStore::new();
        let first = store.create(fields(json!({"name": "a"}))).await;
        let second = store.create(fields(json!({"name": "b"}))).await;
        let id = id_of(&first).expect("id").to_string();

        let deleted = store.delete(&id).await.expect("deleted");
        assert_eq!(deleted, first);
        assert_eq!(store.list().await, vec![second]);
        assert!(matches!(
            store.get(&id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn not_found_ops_name_the_dog_and_do_not_mutate() {
        let store = DogStore::new();
        let created = store.create(fields(json!({"name": "Rex"}))).await;

        for result in [
            store.get("missing").await,
            store.patch("missing", fields(json!({"a": 1}))).await,
            store.replace("missing", fields(json!({"a": 1}))).await,
            store.delete("missing").await,
        ] {
            let Err(ServiceError::NotFound(msg)) = result else {
                panic!("expected not-found");
            };
            assert_eq!(msg, "I cannot find the dog you are looking for");
        }
        assert_eq!(store.list().await, vec![created]);
    }
}
