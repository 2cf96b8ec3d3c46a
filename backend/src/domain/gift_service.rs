use log::{debug, info, warn};
use std::sync::Arc;

use shared::{Gift, GiftDraft, GiftPatch};

use crate::domain::error::RepositoryError;
use crate::domain::ids;
use crate::storage::KeyValueStore;

const COLLECTION: &str = "gifts";

/// Storage key for one recipient's gift list.
pub fn gifts_key(recipient_id: &str) -> String {
    format!("gifts_{}", recipient_id)
}

/// Service owning the gift list of a single recipient.
///
/// One instance is hydrated each time that recipient's detail view opens and
/// discarded when the view is left; gift lists are never cached across views.
/// Mutations follow the same optimistic write-through cycle as
/// [`RecipientService`](crate::domain::RecipientService).
pub struct GiftService {
    store: Arc<dyn KeyValueStore>,
    recipient_id: String,
    key: String,
    gifts: Vec<Gift>,
    last_id_millis: u64,
}

impl GiftService {
    /// Create a new GiftService scoped to `recipient_id`.
    pub fn new(store: Arc<dyn KeyValueStore>, recipient_id: impl Into<String>) -> Self {
        let recipient_id = recipient_id.into();
        let key = gifts_key(&recipient_id);
        Self {
            store,
            recipient_id,
            key,
            gifts: Vec::new(),
            last_id_millis: 0,
        }
    }

    /// The recipient this gift list belongs to.
    pub fn recipient_id(&self) -> &str {
        &self.recipient_id
    }

    /// Hydrate the list from storage; a missing key is an empty list.
    pub async fn load(&mut self) -> Result<(), RepositoryError> {
        let stored = self
            .store
            .get(&self.key)
            .await
            .map_err(|e| RepositoryError::Load {
                collection: COLLECTION,
                source: Box::new(e),
            })?;

        self.gifts = match stored {
            Some(json) => serde_json::from_str(&json).map_err(|e| RepositoryError::Load {
                collection: COLLECTION,
                source: Box::new(e),
            })?,
            None => Vec::new(),
        };

        info!(
            "Loaded {} gifts for recipient {}",
            self.gifts.len(),
            self.recipient_id
        );
        Ok(())
    }

    /// The in-memory list, in insertion order.
    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    /// Find a gift by ID.
    pub fn get(&self, id: &str) -> Option<&Gift> {
        self.gifts.iter().find(|g| g.id == id)
    }

    /// Active gifts first, completed ("past") gifts second, each side in
    /// insertion order. Backs the collapsible past-gifts section.
    pub fn split_by_completion(&self) -> (Vec<&Gift>, Vec<&Gift>) {
        self.gifts.iter().partition(|g| !g.completed)
    }

    /// Create a gift from submitted form values and persist the list.
    ///
    /// Only the name is required; blank-after-trim optionals are stored as
    /// absent.
    pub async fn create(&mut self, draft: GiftDraft) -> Result<Gift, RepositoryError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(RepositoryError::InvalidInput(
                "Gift name cannot be empty".to_string(),
            ));
        }

        let gift = Gift {
            id: Gift::generate_id(ids::next_millis(&mut self.last_id_millis)),
            name,
            price: normalize(draft.price),
            description: normalize(draft.description),
            store: normalize(draft.store),
            url: normalize(draft.url),
            image_uri: normalize(draft.image_uri),
            completed: false,
        };

        info!(
            "Created gift: {} ({}) for recipient {}",
            gift.name, gift.id, self.recipient_id
        );

        self.gifts.push(gift.clone());
        self.persist().await?;

        Ok(gift)
    }

    /// Merge `patch` over the gift with `id`, preserving unspecified fields.
    /// An unknown ID is a silent no-op. Used for both field edits and the
    /// completion toggle.
    pub async fn update(&mut self, id: &str, patch: GiftPatch) -> Result<(), RepositoryError> {
        let Some(gift) = self.gifts.iter_mut().find(|g| g.id == id) else {
            debug!("Dropping update for unknown gift: {}", id);
            return Ok(());
        };

        if let Some(name) = patch.name {
            gift.name = name;
        }
        if let Some(price) = patch.price {
            gift.price = normalize(price);
        }
        if let Some(description) = patch.description {
            gift.description = normalize(description);
        }
        if let Some(store) = patch.store {
            gift.store = normalize(store);
        }
        if let Some(url) = patch.url {
            gift.url = normalize(url);
        }
        if let Some(image_uri) = patch.image_uri {
            gift.image_uri = image_uri;
        }
        if let Some(completed) = patch.completed {
            gift.completed = completed;
        }

        self.persist().await
    }

    /// Flip the bought/unbought flag: a read-modify-write over
    /// [`update`](Self::update), no dedicated store operation.
    pub async fn toggle_completed(&mut self, id: &str) -> Result<(), RepositoryError> {
        let Some(completed) = self.get(id).map(|g| g.completed) else {
            debug!("Dropping toggle for unknown gift: {}", id);
            return Ok(());
        };

        self.update(
            id,
            GiftPatch {
                completed: Some(!completed),
                ..GiftPatch::default()
            },
        )
        .await
    }

    /// Remove the gift with `id`. Idempotent; confirmation prompts belong to
    /// the UI boundary.
    pub async fn delete(&mut self, id: &str) -> Result<(), RepositoryError> {
        let before = self.gifts.len();
        self.gifts.retain(|g| g.id != id);

        if self.gifts.len() == before {
            debug!("Gift already absent: {}", id);
        } else {
            info!("Deleted gift {} for recipient {}", id, self.recipient_id);
        }

        self.persist().await
    }

    /// Write the whole list back under `gifts_<recipientId>`.
    async fn persist(&self) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(&self.gifts).map_err(|e| RepositoryError::Save {
            collection: COLLECTION,
            source: Box::new(e),
        })?;

        if let Err(e) = self.store.set(&self.key, &json).await {
            warn!(
                "Failed to save gifts for recipient {}; keeping in-memory state: {}",
                self.recipient_id, e
            );
            return Err(RepositoryError::Save {
                collection: COLLECTION,
                source: Box::new(e),
            });
        }

        Ok(())
    }
}

/// Blank-after-trim optional fields collapse to absent; empty string and
/// "not provided" are the same thing.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
