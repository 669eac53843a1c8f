use std::sync::Arc;

use tokio::sync::RwLock;

use crate::record::{self, Record};

/// Generic in-memory, insertion-ordered record collection.
///
/// Holds a `Vec<Record>` behind an `RwLock`; each operation takes the lock
/// for its full duration so the scan-and-mutate steps stay atomic on a
/// multi-threaded runtime. Lookup is a linear scan by the `id` field, which
/// also keeps listing in insertion order.
#[derive(Clone, Default)]
pub struct MemCollection {
    inner: Arc<RwLock<Vec<Record>>>,
}

impl MemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in insertion order.
    pub async fn list(&self) -> Vec<Record> {
        self.inner.read().await.clone()
    }

    /// First record whose `id` equals the given id.
    pub async fn find(&self, id: &str) -> Option<Record> {
        let records = self.inner.read().await;
        records
            .iter()
            .find(|r| record::id_of(r) == Some(id))
            .cloned()
    }

    /// Append a record under a freshly generated id and return it.
    ///
    /// The id comes from `generate`, re-rolled until it collides with no
    /// stored record; generation and append happen under one write lock so
    /// two concurrent inserts cannot race into the same id.
    pub async fn insert<F>(&self, mut fields: Record, generate: F) -> Record
    where
        F: Fn() -> String,
    {
        let mut records = self.inner.write().await;
        let id = loop {
            let candidate = generate();
            if !records
                .iter()
                .any(|r| record::id_of(r) == Some(candidate.as_str()))
            {
                break candidate;
            }
        };
        record::set_id(&mut fields, &id);
        records.push(fields.clone());
        fields
    }

    /// Overlay `fields` onto the record with the given id; fields not in
    /// `fields` survive, and the stored `id` always wins over any id in
    /// the payload. Returns the merged record, or `None` if no match.
    pub async fn merge(&self, id: &str, fields: Record) -> Option<Record> {
        let mut records = self.inner.write().await;
        let found = records.iter_mut().find(|r| record::id_of(r) == Some(id))?;
        record::overlay(found, fields);
        record::set_id(found, id);
        Some(found.clone())
    }

    /// Swap out the record with the given id wholesale; old fields are
    /// dropped, and `id` is forced onto the replacement. Returns the new
    /// record, or `None` if no match.
    pub async fn replace(&self, id: &str, mut fields: Record) -> Option<Record> {
        let mut records = self.inner.write().await;
        let index = records
            .iter()
            .position(|r| record::id_of(r) == Some(id))?;
        record::set_id(&mut fields, id);
        records[index] = fields;
        Some(records[index].clone())
    }

    /// Remove and return the record with the given id; other records keep
    /// their relative order. Returns `None` if no match.
    pub async fn remove(&self, id: &str) -> Option<Record> {
        let mut records = self.inner.write().await;
        let index = records
            .iter()
            .position(|r| record::id_of(r) == Some(id))?;
        Some(records.remove(index))
    }
}
