//! Structured extraction of character-card voice lines from the
//! Cinderella Girls wiki.
//!
//! The crate splits into the fetch layer (`fetcher`), the document model
//! and label-driven block lookup (`page`), the per-page extraction
//! pipeline (`extractor`), and the crawl runner with its output sink
//! (`crawler`).

pub mod config;
pub mod crawler;
pub mod extractor;
pub mod fetcher;
pub mod page;
