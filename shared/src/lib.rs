//! Shared data types for the gift tracker.
//!
//! These structs are the shapes that cross the boundary between the core and
//! any frontend, and they are also the exact shapes persisted to storage.
//! Serialized field names are camelCase (`avatarSeed`, `imageUri`) so the
//! stored blobs stay compatible with data written by earlier versions of the
//! app.

use serde::{Deserialize, Serialize};

/// A person gifts are tracked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub id: String,
    pub name: String,
    /// Birthday as an RFC 3339 timestamp, or absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    pub avatar_seed: String,
    pub avatar_style: String,
    /// Kept in the persisted shape for compatibility with existing blobs;
    /// nothing reads it for recipients.
    #[serde(default)]
    pub completed: bool,
}

impl Recipient {
    /// Generate a unique ID for a recipient.
    /// Format: `recipient::<epoch_millis>`
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("recipient::{}", timestamp_millis)
    }
}

/// One tracked gift idea, owned by exactly one recipient.
///
/// Optional fields are either present and non-blank or absent; they never
/// round-trip as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Reference to a locally captured or picked image resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    pub completed: bool,
}

impl Gift {
    /// Generate a unique ID for a gift.
    /// Format: `gift::<epoch_millis>`
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("gift::{}", timestamp_millis)
    }
}

/// Field values emitted by the recipient form on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientDraft {
    pub name: String,
    pub birthday: Option<String>,
    pub avatar_seed: String,
    pub avatar_style: String,
}

/// Partial update for a recipient.
///
/// `None` leaves a field untouched. `birthday` is doubly optional so a patch
/// can clear it: `Some(None)` removes the stored birthday.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipientPatch {
    pub name: Option<String>,
    pub birthday: Option<Option<String>>,
    pub avatar_seed: Option<String>,
    pub avatar_style: Option<String>,
}

/// Field values emitted by the gift form on submit. Only `name` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftDraft {
    pub name: String,
    pub price: Option<String>,
    pub description: Option<String>,
    pub store: Option<String>,
    pub url: Option<String>,
    pub image_uri: Option<String>,
}

/// Partial update for a gift, used both for field edits and the completion
/// toggle. Doubly-optional fields follow the same convention as
/// [`RecipientPatch`]: `Some(None)` clears.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GiftPatch {
    pub name: Option<String>,
    pub price: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub store: Option<Option<String>>,
    pub url: Option<Option<String>>,
    pub image_uri: Option<Option<String>>,
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ids() {
        assert_eq!(Recipient::generate_id(1710460800000), "recipient::1710460800000");
        assert_eq!(Gift::generate_id(1710460800000), "gift::1710460800000");
    }

    #[test]
    fn test_recipient_serializes_camel_case() {
        let recipient = Recipient {
            id: "recipient::1".to_string(),
            name: "Alex".to_string(),
            birthday: Some("2024-03-15T00:00:00.000Z".to_string()),
            avatar_seed: "Alex".to_string(),
            avatar_style: "initials".to_string(),
            completed: false,
        };

        let json = serde_json::to_string(&recipient).unwrap();
        assert!(json.contains("\"avatarSeed\":\"Alex\""));
        assert!(json.contains("\"avatarStyle\":\"initials\""));
        assert!(!json.contains("avatar_seed"));

        let back: Recipient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipient);
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let gift = Gift {
            id: "gift::1".to_string(),
            name: "Socks".to_string(),
            price: None,
            description: None,
            store: None,
            url: None,
            image_uri: None,
            completed: false,
        };

        let json = serde_json::to_string(&gift).unwrap();
        assert_eq!(json, r#"{"id":"gift::1","name":"Socks","completed":false}"#);
    }

    #[test]
    fn test_gift_deserializes_legacy_blob_without_store() {
        // Blobs written before the store field was persisted lack the key.
        let json = r#"{"id":"gift::2","name":"Lego","price":"49.99","imageUri":"file:///photo.jpg","completed":true}"#;
        let gift: Gift = serde_json::from_str(json).unwrap();
        assert_eq!(gift.store, None);
        assert_eq!(gift.price.as_deref(), Some("49.99"));
        assert_eq!(gift.image_uri.as_deref(), Some("file:///photo.jpg"));
        assert!(gift.completed);
    }

    #[test]
    fn test_recipient_deserializes_null_birthday() {
        // The original app stored an explicit null rather than omitting the key.
        let json = r#"{"id":"recipient::3","name":"Sam","birthday":null,"avatarSeed":"x1","avatarStyle":"avataaars","completed":false}"#;
        let recipient: Recipient = serde_json::from_str(json).unwrap();
        assert_eq!(recipient.birthday, None);
    }
}
