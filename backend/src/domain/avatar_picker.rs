//! Paginated avatar chooser backing the recipient editor.

use rand::Rng;

use shared::Recipient;

use crate::domain::avatar::{DEFAULT_AVATAR_STYLE, FALLBACK_SEED, INITIALS_STYLE};

/// Candidates shown per page.
pub const AVATARS_PER_PAGE: usize = 4;
/// Size of the browsable candidate pool.
pub const TOTAL_AVATARS: usize = 30;
/// Number of pages the user can page through.
pub const TOTAL_PAGES: usize = (TOTAL_AVATARS + AVATARS_PER_PAGE - 1) / AVATARS_PER_PAGE;

const SEED_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SEED_LEN: usize = 8;
// Collisions in a 36^8 token space are vanishingly rare; running out of
// retries means the generator itself is broken.
const MAX_SEED_RETRIES: usize = 64;

/// One selectable avatar: a seed and the style family it renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarCandidate {
    pub seed: String,
    pub style: String,
}

/// State machine for browsing avatar candidates in fixed-size pages.
///
/// The pool only ever grows, never shrinks or reorders, so a candidate the
/// user has already seen keeps its place while paging back and forth.
#[derive(Debug)]
pub struct AvatarPicker {
    current_page: usize,
    loaded: Vec<AvatarCandidate>,
    /// Position of the initials candidate within `loaded`.
    initials_index: usize,
    selected: AvatarCandidate,
}

impl AvatarPicker {
    /// Picker for a brand-new recipient.
    pub fn for_create(name_draft: &str) -> Self {
        Self::build(None, name_draft)
    }

    /// Picker pre-seeded with the recipient being edited: their current
    /// avatar leads the pool (unless it is the initials style, which is
    /// already represented) and starts out selected.
    pub fn for_edit(recipient: &Recipient) -> Self {
        Self::build(Some(recipient), &recipient.name)
    }

    fn build(editing: Option<&Recipient>, name_draft: &str) -> Self {
        let mut loaded = Vec::new();

        if let Some(current) = editing.filter(|r| r.avatar_style != INITIALS_STYLE) {
            loaded.push(AvatarCandidate {
                seed: current.avatar_seed.clone(),
                style: current.avatar_style.clone(),
            });
        }

        let initials_index = loaded.len();
        loaded.push(AvatarCandidate {
            seed: initials_seed(name_draft),
            style: INITIALS_STYLE.to_string(),
        });

        while loaded.len() < AVATARS_PER_PAGE * 2 {
            let candidate = generate_unique(&loaded);
            loaded.push(candidate);
        }

        let selected = match editing {
            Some(recipient) => AvatarCandidate {
                seed: recipient.avatar_seed.clone(),
                style: recipient.avatar_style.clone(),
            },
            None => loaded[initials_index].clone(),
        };

        Self {
            current_page: 0,
            loaded,
            initials_index,
            selected,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Every candidate loaded so far, in pool order.
    pub fn candidates(&self) -> &[AvatarCandidate] {
        &self.loaded
    }

    /// The candidate the form will emit on submit.
    pub fn selected(&self) -> &AvatarCandidate {
        &self.selected
    }

    /// Candidates for the page currently in view.
    ///
    /// Page 0 is always the first [`AVATARS_PER_PAGE`] pool entries; later
    /// pages window into the pool past the lead entry.
    pub fn current_page_candidates(&self) -> &[AvatarCandidate] {
        if self.current_page == 0 {
            let end = AVATARS_PER_PAGE.min(self.loaded.len());
            return &self.loaded[..end];
        }

        let start = 1 + (self.current_page - 1) * AVATARS_PER_PAGE;
        let start = start.min(self.loaded.len());
        let end = (start + AVATARS_PER_PAGE).min(self.loaded.len());
        &self.loaded[start..end]
    }

    /// Advance one page, topping the pool up with a fresh page's worth of
    /// candidates when the view would run past what is loaded.
    pub fn next_page(&mut self) {
        if self.current_page >= TOTAL_PAGES - 1 {
            return;
        }
        self.current_page += 1;

        if (self.current_page + 1) * AVATARS_PER_PAGE > self.loaded.len() {
            self.load_more();
        }
    }

    /// Step back one page. Never generates candidates.
    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    /// Keep the initials candidate in sync with the name draft while the
    /// picker is open. The entry keeps its position; pagination and the other
    /// candidates are untouched. A selection resting on the initials
    /// candidate follows the new seed.
    pub fn reseed_initials(&mut self, name_draft: &str) {
        let seed = initials_seed(name_draft);
        let entry = &mut self.loaded[self.initials_index];
        if self.selected == *entry {
            self.selected.seed = seed.clone();
        }
        entry.seed = seed;
    }

    /// Record the user's choice.
    pub fn select(&mut self, candidate: &AvatarCandidate) {
        self.selected = candidate.clone();
    }

    fn load_more(&mut self) {
        if self.loaded.len() >= TOTAL_AVATARS + 1 {
            return;
        }
        for _ in 0..AVATARS_PER_PAGE {
            let candidate = generate_unique(&self.loaded);
            self.loaded.push(candidate);
        }
    }
}

fn initials_seed(name_draft: &str) -> String {
    let trimmed = name_draft.trim();
    if trimmed.is_empty() {
        FALLBACK_SEED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Random lowercase-alphanumeric seed token.
fn random_seed() -> String {
    let mut rng = rand::thread_rng();
    (0..SEED_LEN)
        .map(|_| SEED_CHARS[rng.gen_range(0..SEED_CHARS.len())] as char)
        .collect()
}

/// Generate a candidate no `(seed, style)` pair in `loaded` already uses,
/// regenerating on collision up to [`MAX_SEED_RETRIES`] times.
fn generate_unique(loaded: &[AvatarCandidate]) -> AvatarCandidate {
    for _ in 0..MAX_SEED_RETRIES {
        let candidate = AvatarCandidate {
            seed: random_seed(),
            style: DEFAULT_AVATAR_STYLE.to_string(),
        };
        if !loaded.contains(&candidate) {
            return candidate;
        }
    }
    panic!("exhausted {} attempts generating a unique avatar seed", MAX_SEED_RETRIES);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn recipient(seed: &str, style: &str) -> Recipient {
        Recipient {
            id: "recipient::1".to_string(),
            name: "Alex".to_string(),
            birthday: None,
            avatar_seed: seed.to_string(),
            avatar_style: style.to_string(),
            completed: false,
        }
    }

    fn assert_no_duplicate_pairs(picker: &AvatarPicker) {
        let mut seen = HashSet::new();
        for candidate in picker.candidates() {
            assert!(
                seen.insert((candidate.seed.clone(), candidate.style.clone())),
                "duplicate candidate: {:?}",
                candidate
            );
        }
    }

    #[test]
    fn test_create_mode_pool_leads_with_initials() {
        let picker = AvatarPicker::for_create("Alex");

        let first_page = picker.current_page_candidates();
        assert_eq!(first_page.len(), AVATARS_PER_PAGE);
        assert_eq!(first_page[0].seed, "Alex");
        assert_eq!(first_page[0].style, INITIALS_STYLE);
        assert!(first_page[1..]
            .iter()
            .all(|c| c.style == DEFAULT_AVATAR_STYLE));
    }

    #[test]
    fn test_blank_name_draft_seeds_initials_with_fallback() {
        let picker = AvatarPicker::for_create("   ");
        assert_eq!(picker.current_page_candidates()[0].seed, FALLBACK_SEED);
    }

    #[test]
    fn test_edit_mode_pool_leads_with_the_current_avatar() {
        let picker = AvatarPicker::for_edit(&recipient("k3v9x2", DEFAULT_AVATAR_STYLE));

        let first_page = picker.current_page_candidates();
        assert_eq!(first_page[0].seed, "k3v9x2");
        assert_eq!(first_page[1].style, INITIALS_STYLE);
        assert_eq!(first_page[1].seed, "Alex");
        assert_eq!(picker.selected().seed, "k3v9x2");
    }

    #[test]
    fn test_edit_mode_with_initials_avatar_adds_no_lead_entry() {
        let picker = AvatarPicker::for_edit(&recipient("Alex", INITIALS_STYLE));

        let first_page = picker.current_page_candidates();
        assert_eq!(first_page[0].style, INITIALS_STYLE);
        assert_eq!(picker.selected().style, INITIALS_STYLE);
    }

    #[test]
    fn test_pool_has_no_duplicates_after_paging_to_the_end() {
        let mut picker = AvatarPicker::for_create("Alex");
        for _ in 0..TOTAL_PAGES - 1 {
            picker.next_page();
        }

        assert_eq!(picker.current_page(), TOTAL_PAGES - 1);
        assert_no_duplicate_pairs(&picker);
    }

    #[test]
    fn test_next_page_stops_at_the_last_page() {
        let mut picker = AvatarPicker::for_create("Alex");
        for _ in 0..TOTAL_PAGES + 3 {
            picker.next_page();
        }

        assert_eq!(picker.current_page(), TOTAL_PAGES - 1);
    }

    #[test]
    fn test_prev_page_never_grows_the_pool() {
        let mut picker = AvatarPicker::for_create("Alex");
        picker.next_page();
        picker.next_page();
        let loaded = picker.candidates().len();

        picker.prev_page();
        picker.prev_page();
        picker.prev_page();

        assert_eq!(picker.current_page(), 0);
        assert_eq!(picker.candidates().len(), loaded);
    }

    #[test]
    fn test_later_pages_never_repeat_the_lead_entry() {
        let mut picker = AvatarPicker::for_create("Alex");
        picker.next_page();

        let page = picker.current_page_candidates();
        assert!(page.iter().all(|c| c.style != INITIALS_STYLE));
    }

    #[test]
    fn test_reseed_updates_the_initials_entry_in_place() {
        let mut picker = AvatarPicker::for_create("");
        picker.next_page();
        let loaded_before = picker.candidates().len();

        picker.reseed_initials("Alex");

        assert_eq!(picker.candidates()[0].seed, "Alex");
        assert_eq!(picker.candidates().len(), loaded_before);
        assert_eq!(picker.current_page(), 1);
    }

    #[test]
    fn test_reseed_reaches_the_initials_entry_in_edit_mode() {
        let mut picker = AvatarPicker::for_edit(&recipient("k3v9x2", DEFAULT_AVATAR_STYLE));

        picker.reseed_initials("Alexandra");

        assert_eq!(picker.candidates()[1].seed, "Alexandra");
        assert_eq!(picker.candidates()[1].style, INITIALS_STYLE);
        // The lead (current avatar) entry is untouched.
        assert_eq!(picker.candidates()[0].seed, "k3v9x2");
    }

    #[test]
    fn test_default_selection_follows_the_typed_name() {
        let mut picker = AvatarPicker::for_create("");
        assert_eq!(picker.selected().seed, FALLBACK_SEED);

        picker.reseed_initials("Alex");
        assert_eq!(picker.selected().seed, "Alex");
        assert_eq!(picker.selected().style, INITIALS_STYLE);
    }

    #[test]
    fn test_explicit_selection_sticks_through_reseeding() {
        let mut picker = AvatarPicker::for_create("Alex");
        let choice = picker.current_page_candidates()[2].clone();

        picker.select(&choice);
        picker.reseed_initials("Alexandra");

        assert_eq!(picker.selected(), &choice);
    }
}
