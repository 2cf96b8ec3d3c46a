//! Draft state behind the recipient and gift editor modals.
//!
//! A form holds one entity's field values, pre-populated in edit mode and
//! blank in create mode. The single validation rule in the system is a
//! non-empty trimmed name; an invalid submit is simply inert (the UI disables
//! the button), never an error value.

use shared::{Gift, GiftDraft, Recipient, RecipientDraft};

use crate::domain::avatar_picker::AvatarPicker;

/// Controller for the recipient editor. Embeds the avatar picker, whose
/// initials preview tracks the name draft live.
#[derive(Debug)]
pub struct RecipientForm {
    name: String,
    birthday: Option<String>,
    picker: AvatarPicker,
}

impl RecipientForm {
    /// Open the form.
    ///
    /// # Panics
    ///
    /// Edit mode without a recipient to edit is a caller bug, not a runtime
    /// condition, and panics.
    pub fn new(editing: Option<&Recipient>, edit_mode: bool) -> Self {
        if edit_mode {
            let recipient = editing.expect("edit mode requires a recipient to edit");
            Self {
                name: recipient.name.clone(),
                birthday: recipient.birthday.clone(),
                picker: AvatarPicker::for_edit(recipient),
            }
        } else {
            Self {
                name: String::new(),
                birthday: None,
                picker: AvatarPicker::for_create(""),
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthday(&self) -> Option<&str> {
        self.birthday.as_deref()
    }

    pub fn picker(&self) -> &AvatarPicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut AvatarPicker {
        &mut self.picker
    }

    /// Update the name draft; the initials preview follows it.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.picker.reseed_initials(&self.name);
    }

    /// Result handed back by the external date-picker widget.
    pub fn set_birthday(&mut self, birthday: Option<String>) {
        self.birthday = birthday;
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Emit the draft and clear the form, or do nothing while invalid.
    pub fn submit(&mut self) -> Option<RecipientDraft> {
        if !self.is_valid() {
            return None;
        }

        let selected = self.picker.selected().clone();
        let draft = RecipientDraft {
            name: self.name.trim().to_string(),
            birthday: self.birthday.clone(),
            avatar_seed: selected.seed,
            avatar_style: selected.style,
        };
        self.reset();
        Some(draft)
    }

    /// Clear every draft field, independent of mode.
    pub fn reset(&mut self) {
        self.name.clear();
        self.birthday = None;
        self.picker = AvatarPicker::for_create("");
    }
}

/// Controller for the gift editor.
#[derive(Debug, Default)]
pub struct GiftForm {
    name: String,
    price: String,
    description: String,
    store: String,
    url: String,
    image_uri: Option<String>,
}

impl GiftForm {
    /// Open the form.
    ///
    /// # Panics
    ///
    /// Edit mode without a gift to edit is a caller bug and panics.
    pub fn new(editing: Option<&Gift>, edit_mode: bool) -> Self {
        if edit_mode {
            let gift = editing.expect("edit mode requires a gift to edit");
            Self {
                name: gift.name.clone(),
                price: gift.price.clone().unwrap_or_default(),
                description: gift.description.clone().unwrap_or_default(),
                store: gift.store.clone().unwrap_or_default(),
                url: gift.url.clone().unwrap_or_default(),
                image_uri: gift.image_uri.clone(),
            }
        } else {
            Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_uri(&self) -> Option<&str> {
        self.image_uri.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_store(&mut self, store: impl Into<String>) {
        self.store = store.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Result handed back by the external image picker; `None` both before a
    /// pick and after the user removes the image.
    pub fn set_image_uri(&mut self, image_uri: Option<String>) {
        self.image_uri = image_uri;
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Emit the draft and clear the form, or do nothing while invalid.
    /// Blank optional inputs are emitted as absent.
    pub fn submit(&mut self) -> Option<GiftDraft> {
        if !self.is_valid() {
            return None;
        }

        let draft = GiftDraft {
            name: self.name.trim().to_string(),
            price: non_blank(&self.price),
            description: non_blank(&self.description),
            store: non_blank(&self.store),
            url: non_blank(&self.url),
            image_uri: self.image_uri.clone(),
        };
        self.reset();
        Some(draft)
    }

    /// Clear every draft field, independent of mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Blank-after-trim inputs count as "not provided".
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
