use crate::page::{BlockId, Page, first_text};
use scraper::Selector;

/// Structural queries that define what counts as a content block.
///
/// The label-driven lookup is the only thing classification and extraction
/// depend on; layout variants are handled by swapping this query set, not
/// by touching the pipeline.
#[derive(Debug, Clone)]
pub struct BlockQuery {
    /// Candidate block containers, in document order.
    container: Selector,
}

impl BlockQuery {
    pub fn new(container_selector: &str) -> Result<Self, String> {
        let container = Selector::parse(container_selector)
            .map_err(|e| format!("invalid block container selector: {e}"))?;
        Ok(Self { container })
    }
}

impl Default for BlockQuery {
    /// The seesaa wiki layout: `id`-carrying section containers inside the
    /// user content area.
    fn default() -> Self {
        Self::new("div.user-area div[id]").expect("default selector parses")
    }
}

/// Finds content blocks on a page by their visible label.
#[derive(Debug, Clone, Default)]
pub struct BlockLocator {
    query: BlockQuery,
}

impl BlockLocator {
    pub fn new(query: BlockQuery) -> Self {
        Self { query }
    }

    /// All blocks whose label equals `label` exactly (after trimming),
    /// in document order.
    ///
    /// Order is meaningful to callers: the voice-collection section
    /// appears once per training state, first occurrence = before
    /// training, second = after.
    pub fn find_blocks(&self, page: &Page, label: &str) -> Vec<BlockId> {
        page.select(&self.query.container)
            .filter(|el| first_text(el).as_deref() == Some(label))
            .filter_map(|el| el.value().attr("id").map(BlockId::from))
            .collect()
    }
}
