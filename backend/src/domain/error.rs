use thiserror::Error;

/// Failures surfaced by the domain services.
///
/// `Save` is the one non-fatal case: the write failed after the in-memory
/// change was applied, and the change is kept (no rollback, no retry), so the
/// session and the durable store can diverge until the next successful write
/// of that collection. Not-found on update or delete is not an error at all;
/// those operations are silent no-ops.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The collection could not be read back from storage (I/O failure or an
    /// undecodable blob). The in-memory collection falls back to empty.
    #[error("failed to load {collection}")]
    Load {
        collection: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The write failed; the in-memory change is held in memory only.
    #[error("failed to save {collection}; the latest change is held in memory only")]
    Save {
        collection: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A create was handed values that can never form a valid record.
    #[error("{0}")]
    InvalidInput(String),
}

impl RepositoryError {
    /// Whether the caller should surface this as a dismissible warning rather
    /// than a blocking notice.
    pub fn is_non_fatal(&self) -> bool {
        matches!(self, RepositoryError::Save { .. })
    }
}
