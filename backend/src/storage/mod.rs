//! # Storage layer
//!
//! The persistence contract is a process-wide string-keyed store of string
//! values: one whole serialized collection per key, read and written
//! asynchronously. There are no range queries, no partial reads and no
//! transactional guarantee across keys; each `set` replaces one key's value.
//!
//! The trait keeps the domain layer storage-agnostic so the file-backed
//! production store and the in-memory test double are interchangeable.

pub mod json_file;

#[cfg(test)]
pub mod test_utils;

pub use json_file::JsonFileStore;

use async_trait::async_trait;
use thiserror::Error;

/// Failure raised by a store operation. Callers report it; it is never fatal
/// to the session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Asynchronous key-value store used as the sole durability mechanism.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`; `None` if the key has never been
    /// written.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
