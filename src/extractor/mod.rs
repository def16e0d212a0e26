pub mod classify;
pub mod fields;
pub mod model;
pub mod names;
pub mod normalize;

#[cfg(test)]
mod tests;

pub use fields::ExtractError;
pub use model::{CardLines, CardRecord, LineSet};

use crate::page::Page;
use classify::Classifier;
use fields::FieldExtractor;
use names::derive_idol_name;
use normalize::TextNormalizer;
use tracing::{debug, warn};

/// The full extraction pipeline for one page.
pub struct Extractor {
    classifier: Classifier,
    fields: FieldExtractor,
    normalizer: TextNormalizer,
}

impl Extractor {
    pub fn new(classifier: Classifier, fields: FieldExtractor, normalizer: TextNormalizer) -> Self {
        Self {
            classifier,
            fields,
            normalizer,
        }
    }

    /// Extract a card record from a page, or nothing.
    ///
    /// Every failure mode is resolved here: non-card pages and placeholder
    /// cards skip silently, a missing or malformed data table skips with a
    /// warning. Nothing propagates out to abort the crawl.
    pub fn extract(&self, page: &Page) -> Option<CardRecord> {
        // 1. Gate: only genuine card pages have both profile and lines blocks
        if !self.classifier.is_record_page(page) {
            debug!(url = %page.url(), "not a card page, skipping");
            return None;
        }

        // 2. Required fields from the data table
        let (card_name, card_type) = match self.fields.card_fields(page) {
            Ok(fields) => fields,
            Err(err) => {
                warn!(url = %page.url(), error = %err, "card page not extractable");
                return None;
            }
        };

        // 3. Gate: template/placeholder entries
        if self.classifier.is_excluded(&card_name) {
            debug!(url = %page.url(), card_name = %card_name, "placeholder card, skipping");
            return None;
        }

        // 4. Voice lines, raw then normalized element-wise
        let raw = self.fields.voice_lines(page);
        let normalized = LineSet {
            before_training: self.normalizer.normalize_many(&raw.before_training),
            after_training: self.normalizer.normalize_many(&raw.after_training),
            memorial_episode: self.normalizer.normalize_many(&raw.memorial_episode),
        };

        // 5. The idol's proper name comes from the raw decorated card name
        Some(CardRecord {
            idol_name: derive_idol_name(&card_name),
            card_name,
            card_type,
            lines: CardLines { raw, normalized },
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(
            Classifier::default(),
            FieldExtractor::default(),
            TextNormalizer::default(),
        )
    }
}
