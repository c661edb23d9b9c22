//! In-process record store.
//!
//! Collections are held as raw JSON documents, the same shape a hosted
//! document database keeps them in. Every mutation republishes the full
//! snapshot (newest first) to all subscribers; there are no deltas.

use super::{Document, RecordStore, StoreError, Subscription};
use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::watch;
use uuid::Uuid;

struct Collection {
    docs: Vec<Value>,
    tx: watch::Sender<Vec<Value>>,
}

impl Collection {
    fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            docs: Vec::new(),
            tx,
        }
    }

    /// Broadcast the current snapshot, newest first.
    fn publish(&mut self) {
        let mut snapshot = self.docs.clone();
        snapshot.sort_by_key(|doc| std::cmp::Reverse(doc["createdAt"].as_i64().unwrap_or(0)));
        self.tx.send_replace(snapshot);
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.docs
            .iter()
            .position(|doc| doc["id"].as_str() == Some(id))
    }
}

/// In-memory document store backing tests and local embeddings.
pub struct MemoryStore {
    collections: Mutex<HashMap<&'static str, Collection>>,
    last_stamp: Mutex<i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            last_stamp: Mutex::new(0),
        }
    }

    /// Wall-clock millis, bumped past the previous stamp when two writes
    /// land in the same millisecond, so the descending creation-time sort
    /// always reflects insertion order.
    fn next_created_at(&self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as i64);
        let mut last = self.last_stamp.lock().unwrap();
        *last = now.max(*last + 1);
        *last
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize into the field map of a document.
fn to_object<T: Serialize>(
    collection: &'static str,
    value: &T,
) -> Result<Map<String, Value>, StoreError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(StoreError::Decode {
            collection,
            source: serde::ser::Error::custom("document must serialize to an object"),
        }),
        Err(source) => Err(StoreError::Decode { collection, source }),
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create<D: Document>(&self, actor_id: &str, draft: D::Draft) -> Result<D, StoreError> {
        let mut fields = to_object(D::COLLECTION, &draft)?;
        fields.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        fields.insert(
            D::CREATOR_FIELD.to_string(),
            Value::String(actor_id.to_string()),
        );
        fields.insert("createdAt".to_string(), Value::from(self.next_created_at()));

        let doc = Value::Object(fields);
        let record: D =
            serde_json::from_value(doc.clone()).map_err(|source| StoreError::Decode {
                collection: D::COLLECTION,
                source,
            })?;

        let mut collections = self.collections.lock().unwrap();
        let collection = collections
            .entry(D::COLLECTION)
            .or_insert_with(Collection::new);
        collection.docs.push(doc);
        collection.publish();

        debug!("created {} document {}", D::COLLECTION, record.id());
        Ok(record)
    }

    async fn update<D: Document, P: Serialize + Send + Sync>(
        &self,
        id: &str,
        patch: P,
    ) -> Result<(), StoreError> {
        let fields = to_object(D::COLLECTION, &patch)?;

        let mut collections = self.collections.lock().unwrap();
        let collection = collections
            .entry(D::COLLECTION)
            .or_insert_with(Collection::new);
        let position = collection.position(id).ok_or_else(|| StoreError::NotFound {
            collection: D::COLLECTION,
            id: id.to_string(),
        })?;

        if let Value::Object(existing) = &mut collection.docs[position] {
            for (key, value) in fields {
                existing.insert(key, value);
            }
        }
        collection.publish();

        debug!("updated {} document {}", D::COLLECTION, id);
        Ok(())
    }

    async fn delete<D: Document>(&self, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().unwrap();
        let collection = collections
            .entry(D::COLLECTION)
            .or_insert_with(Collection::new);
        let position = collection.position(id).ok_or_else(|| StoreError::NotFound {
            collection: D::COLLECTION,
            id: id.to_string(),
        })?;

        collection.docs.remove(position);
        collection.publish();

        debug!("deleted {} document {}", D::COLLECTION, id);
        Ok(())
    }

    fn subscribe<D: Document>(&self) -> Subscription<D> {
        let mut collections = self.collections.lock().unwrap();
        let collection = collections
            .entry(D::COLLECTION)
            .or_insert_with(Collection::new);
        Subscription::new(collection.tx.subscribe())
    }
}
