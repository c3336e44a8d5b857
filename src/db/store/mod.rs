//! Byte-keyed persistent store the relational layer is built on.
//!
//! The engine only needs point reads, point writes, deletes and a full scan.
//! Scans return every pair in key order.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait KvStore {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>>;
    fn put(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()>;
    fn delete(&mut self, key: &[u8]) -> StoreResult<()>;
    fn scan(&self) -> StoreResult<Vec<(Vec<u8>, Vec<u8>)>>;
    /// Flushes outstanding writes and releases the store.
    fn close(self: Box<Self>) -> StoreResult<()>;
}
