//! Record store boundary.
//!
//! `RecordStore` is the contract the hosted document database is expected
//! to satisfy; `MemoryStore` is the in-process implementation used by
//! tests and local embeddings.

mod memory;
mod store;

pub use memory::MemoryStore;
pub use store::{Document, RecordStore, StoreError, Subscription};
