//! Store-side contracts: documents, the store trait and subscriptions.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{
    Animal, FeedRecord, FinancialRecord, HealthRecord, MilkRecord, NewAnimal, NewFeedRecord,
    NewFinancialRecord, NewHealthRecord, NewMilkRecord, NewNutritionSchedule, NewUser,
    NutritionSchedule, User,
};
use std::marker::PhantomData;
use thiserror::Error;
use tokio::sync::watch;

/// Errors surfaced by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no {collection} document with id {id}")]
    NotFound { collection: &'static str, id: String },

    #[error("failed to decode {collection} document: {source}")]
    Decode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A record kind held in one named collection.
pub trait Document: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    const COLLECTION: &'static str;

    /// Field naming the creating user. Health records use `performedBy`.
    const CREATOR_FIELD: &'static str = "createdBy";

    /// What a client submits; the store assigns `id`, the creator
    /// reference and `createdAt` on top of it.
    type Draft: Serialize + Send + Sync + 'static;

    fn id(&self) -> &str;

    /// Epoch milliseconds assigned at creation; canonical sort key.
    fn created_at(&self) -> i64;
}

/// The document database as seen by the domain layer.
///
/// Implementations must deliver full snapshots (never deltas) and
/// guarantee that subscribers observe the latest state after a
/// successful write.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append a new document; the store assigns id, creator and creation
    /// stamp and returns the completed record.
    async fn create<D: Document>(&self, actor_id: &str, draft: D::Draft) -> Result<D, StoreError>;

    /// Shallow-merge the serialized patch fields into an existing
    /// document.
    async fn update<D: Document, P: Serialize + Send + Sync>(
        &self,
        id: &str,
        patch: P,
    ) -> Result<(), StoreError>;

    /// Remove a document. Deletion is immediate and irreversible.
    async fn delete<D: Document>(&self, id: &str) -> Result<(), StoreError>;

    /// Open a live query on the collection, ordered by creation time
    /// descending. The handle sees the current state immediately and
    /// every full snapshot after a change.
    fn subscribe<D: Document>(&self) -> Subscription<D>;
}

/// Handle onto one collection's snapshot stream.
///
/// Dropping the handle (or calling [`Subscription::unsubscribe`]) stops
/// delivery; nothing is recomputed for a cancelled subscription.
#[derive(Clone)]
pub struct Subscription<D> {
    rx: watch::Receiver<Vec<Value>>,
    _marker: PhantomData<fn() -> D>,
}

impl<D: Document> Subscription<D> {
    pub(crate) fn new(rx: watch::Receiver<Vec<Value>>) -> Self {
        Self {
            rx,
            _marker: PhantomData,
        }
    }

    /// Decode the latest snapshot, newest first.
    pub fn current(&self) -> Result<Vec<D>, StoreError> {
        let raw = self.rx.borrow().clone();
        raw.into_iter()
            .map(|doc| {
                serde_json::from_value(doc).map_err(|source| StoreError::Decode {
                    collection: D::COLLECTION,
                    source,
                })
            })
            .collect()
    }

    /// Wait for the next snapshot. Returns false once the store has gone
    /// away, at which point no further snapshots will ever arrive.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Explicitly cancel the live query. Equivalent to dropping the
    /// handle.
    pub fn unsubscribe(self) {}
}

impl Document for Animal {
    const COLLECTION: &'static str = "animals";
    type Draft = NewAnimal;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl Document for HealthRecord {
    const COLLECTION: &'static str = "healthRecords";
    // The recording user doubles as the creator reference.
    const CREATOR_FIELD: &'static str = "performedBy";
    type Draft = NewHealthRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl Document for MilkRecord {
    const COLLECTION: &'static str = "milkRecords";
    type Draft = NewMilkRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl Document for FeedRecord {
    const COLLECTION: &'static str = "feedRecords";
    type Draft = NewFeedRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl Document for NutritionSchedule {
    const COLLECTION: &'static str = "nutritionSchedules";
    type Draft = NewNutritionSchedule;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl Document for FinancialRecord {
    const COLLECTION: &'static str = "financialRecords";
    type Draft = NewFinancialRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl Document for User {
    const COLLECTION: &'static str = "users";
    type Draft = NewUser;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}
