use crate::extractor::classify::LINES_LABEL;
use crate::extractor::model::LineSet;
use crate::page::{BlockId, BlockLocator, Page};
use thiserror::Error;

/// Label of the card data table (name, attribute, stats).
pub const DATA_LABEL: &str = "データ";
/// Label of the memorial-episode voice-line section.
pub const MEMORIAL_LABEL: &str = "思い出エピソード";

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The page passed classification but carries no データ block.
    /// The whole page is non-extractable; skip it, never halt the crawl.
    #[error("page has no データ block")]
    MissingDataBlock,

    /// The データ block exists but lacks the cell a required field lives in.
    #[error("データ block is missing the {field} cell")]
    MalformedDataBlock { field: &'static str },
}

/// Reads the card fields out of a classified page's located blocks.
pub struct FieldExtractor {
    locator: BlockLocator,
}

impl FieldExtractor {
    pub fn new(locator: BlockLocator) -> Self {
        Self { locator }
    }

    /// Card name and attribute from the first データ block:
    /// name at row 0 / cell 0, attribute at row 1 / cell 1.
    pub fn card_fields(&self, page: &Page) -> Result<(String, String), ExtractError> {
        let data_blocks = self.locator.find_blocks(page, DATA_LABEL);
        let block = data_blocks
            .first()
            .and_then(|id| page.block(id))
            .ok_or(ExtractError::MissingDataBlock)?;

        let rows = block.rows();
        let card_name = rows
            .first()
            .and_then(|row| row.first())
            .ok_or(ExtractError::MalformedDataBlock { field: "card_name" })?
            .clone();
        let card_type = rows
            .get(1)
            .and_then(|row| row.get(1))
            .ok_or(ExtractError::MalformedDataBlock { field: "type" })?
            .clone();

        Ok((card_name, card_type))
    }

    /// The three voice-line categories, raw. Each resolves independently:
    /// a missing block is an empty sequence, never an error.
    pub fn voice_lines(&self, page: &Page) -> LineSet {
        let line_blocks = self.locator.find_blocks(page, LINES_LABEL);
        LineSet {
            before_training: second_column_lines(page, &line_blocks, 0),
            after_training: second_column_lines(page, &line_blocks, 1),
            memorial_episode: self.memorial_lines(page),
        }
    }

    fn memorial_lines(&self, page: &Page) -> Vec<String> {
        let blocks = self.locator.find_blocks(page, MEMORIAL_LABEL);
        match blocks.first().and_then(|id| page.block(id)) {
            // Memorial lines span every cell, not one fixed column.
            Some(block) => block.rows().into_iter().flatten().collect(),
            None => Vec::new(),
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(BlockLocator::default())
    }
}

/// Second-column text of every row of the block at `index` in an already
/// located sequence, or empty when fewer blocks exist. Rows without a
/// second cell contribute nothing.
fn second_column_lines(page: &Page, blocks: &[BlockId], index: usize) -> Vec<String> {
    match blocks.get(index).and_then(|id| page.block(id)) {
        Some(block) => block
            .rows()
            .into_iter()
            .filter_map(|row| row.into_iter().nth(1))
            .collect(),
        None => Vec::new(),
    }
}
