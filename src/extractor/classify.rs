use crate::page::{BlockLocator, Page};
use std::collections::HashSet;

/// Label of the profile section every genuine card page carries.
pub const PROFILE_LABEL: &str = "プロフィール";
/// Label of the voice-collection section(s).
pub const LINES_LABEL: &str = "セリフ集";

/// Card names that mark template or placeholder pages, never real cards.
const EXCLUDED_CARD_NAMES: &[&str] = &["（アイドル名）"];

/// Decides whether a page is a real character-card page worth extracting.
pub struct Classifier {
    locator: BlockLocator,
    excluded_names: HashSet<String>,
}

impl Classifier {
    pub fn new(locator: BlockLocator, excluded_names: HashSet<String>) -> Self {
        Self {
            locator,
            excluded_names,
        }
    }

    /// A page qualifies iff it has both a profile block and at least one
    /// voice-collection block. Most wiki pages are not card pages, so a
    /// negative here is the common case, not an error.
    pub fn is_record_page(&self, page: &Page) -> bool {
        !self.locator.find_blocks(page, PROFILE_LABEL).is_empty()
            && !self.locator.find_blocks(page, LINES_LABEL).is_empty()
    }

    /// Placeholder gate, applied to the raw card name.
    pub fn is_excluded(&self, card_name: &str) -> bool {
        self.excluded_names.contains(card_name)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            BlockLocator::default(),
            EXCLUDED_CARD_NAMES.iter().map(|s| s.to_string()).collect(),
        )
    }
}
