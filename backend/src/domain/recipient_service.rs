use log::{debug, info, warn};
use std::sync::Arc;

use shared::{Recipient, RecipientDraft, RecipientPatch};

use crate::domain::error::RepositoryError;
use crate::domain::ids;
use crate::storage::KeyValueStore;

/// Storage key for the recipient collection.
pub const RECIPIENTS_KEY: &str = "recipients";

/// Service owning the canonical recipient list for the session.
///
/// The list is hydrated once via [`load`](Self::load), mutated in memory, and
/// written back whole after every mutation. A failed write keeps the
/// in-memory change; storage catches up on the next successful write.
pub struct RecipientService {
    store: Arc<dyn KeyValueStore>,
    recipients: Vec<Recipient>,
    last_id_millis: u64,
}

impl RecipientService {
    /// Create a new RecipientService over the given store. The collection is
    /// empty until [`load`](Self::load) hydrates it.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            recipients: Vec::new(),
            last_id_millis: 0,
        }
    }

    /// Hydrate the collection from storage.
    ///
    /// A missing key is an empty collection. A failed read or an undecodable
    /// blob leaves the collection empty and reports
    /// [`RepositoryError::Load`].
    pub async fn load(&mut self) -> Result<(), RepositoryError> {
        let stored =
            self.store
                .get(RECIPIENTS_KEY)
                .await
                .map_err(|e| RepositoryError::Load {
                    collection: RECIPIENTS_KEY,
                    source: Box::new(e),
                })?;

        self.recipients = match stored {
            Some(json) => serde_json::from_str(&json).map_err(|e| RepositoryError::Load {
                collection: RECIPIENTS_KEY,
                source: Box::new(e),
            })?,
            None => Vec::new(),
        };

        info!("Loaded {} recipients", self.recipients.len());
        Ok(())
    }

    /// The in-memory collection, in insertion order.
    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    /// Find a recipient by ID.
    pub fn get(&self, id: &str) -> Option<&Recipient> {
        self.recipients.iter().find(|r| r.id == id)
    }

    /// Create a recipient from submitted form values and persist the
    /// collection.
    pub async fn create(&mut self, draft: RecipientDraft) -> Result<Recipient, RepositoryError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(RepositoryError::InvalidInput(
                "Recipient name cannot be empty".to_string(),
            ));
        }

        let recipient = Recipient {
            id: Recipient::generate_id(ids::next_millis(&mut self.last_id_millis)),
            name,
            birthday: draft.birthday,
            avatar_seed: draft.avatar_seed,
            avatar_style: draft.avatar_style,
            completed: false,
        };

        info!("Created recipient: {} ({})", recipient.name, recipient.id);

        self.recipients.push(recipient.clone());
        self.persist().await?;

        Ok(recipient)
    }

    /// Merge `patch` over the recipient with `id`, preserving unspecified
    /// fields. An unknown ID is a silent no-op.
    pub async fn update(&mut self, id: &str, patch: RecipientPatch) -> Result<(), RepositoryError> {
        let Some(recipient) = self.recipients.iter_mut().find(|r| r.id == id) else {
            debug!("Dropping update for unknown recipient: {}", id);
            return Ok(());
        };

        if let Some(name) = patch.name {
            recipient.name = name;
        }
        if let Some(birthday) = patch.birthday {
            recipient.birthday = birthday;
        }
        if let Some(seed) = patch.avatar_seed {
            recipient.avatar_seed = seed;
        }
        if let Some(style) = patch.avatar_style {
            recipient.avatar_style = style;
        }

        self.persist().await
    }

    /// Remove the recipient with `id`. Idempotent: deleting an absent ID is
    /// success. Confirmation prompts belong to the UI boundary, and the
    /// recipient's gift-list key is left untouched.
    pub async fn delete(&mut self, id: &str) -> Result<(), RepositoryError> {
        let before = self.recipients.len();
        self.recipients.retain(|r| r.id != id);

        if self.recipients.len() == before {
            debug!("Recipient already absent: {}", id);
        } else {
            info!("Deleted recipient: {}", id);
        }

        self.persist().await
    }

    /// Write the whole collection back under [`RECIPIENTS_KEY`].
    async fn persist(&self) -> Result<(), RepositoryError> {
        let json =
            serde_json::to_string(&self.recipients).map_err(|e| RepositoryError::Save {
                collection: RECIPIENTS_KEY,
                source: Box::new(e),
            })?;

        if let Err(e) = self.store.set(RECIPIENTS_KEY, &json).await {
            warn!("Failed to save recipients; keeping in-memory state: {}", e);
            return Err(RepositoryError::Save {
                collection: RECIPIENTS_KEY,
                source: Box::new(e),
            });
        }

        Ok(())
    }
}
