//! Configuration handling for the scraper.
//!
//! Everything comes from environment variables with development defaults,
//! so a bare `deremas_scrape` run crawls the real wiki list and writes to
//! `cards.jsonl` in the working directory.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

/// Environment variable names, public so tests and tooling can refer to
/// them.
pub const ENV_START_URL: &str = "DEREMAS_START_URL";
pub const ENV_OUTPUT: &str = "DEREMAS_OUTPUT";
pub const ENV_REQUEST_DELAY_MS: &str = "DEREMAS_REQUEST_DELAY_MS";
pub const ENV_MAX_PAGES: &str = "DEREMAS_MAX_PAGES";

const DEFAULT_START_URL: &str = "https://seesaawiki.jp/imascg/l/";
/// `-` means stdout.
const DEFAULT_OUTPUT: &str = "cards.jsonl";
const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;
/// 0 means unlimited.
const DEFAULT_MAX_PAGES: usize = 0;

/// Runtime configuration for one crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    start_url: Url,
    output: String,
    request_delay_ms: u64,
    max_pages: usize,
}

impl Config {
    pub fn new(
        start_url: Url,
        output: impl Into<String>,
        request_delay_ms: u64,
        max_pages: usize,
    ) -> Self {
        Self {
            start_url,
            output: output.into(),
            request_delay_ms,
            max_pages,
        }
    }

    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let start_url_raw =
            env::var(ENV_START_URL).unwrap_or_else(|_| DEFAULT_START_URL.to_string());
        let start_url = Url::parse(&start_url_raw).map_err(|e| ConfigError::InvalidValue {
            field: ENV_START_URL,
            reason: e.to_string(),
        })?;

        let output = env::var(ENV_OUTPUT).unwrap_or_else(|_| DEFAULT_OUTPUT.to_string());

        let request_delay_ms = match env::var(ENV_REQUEST_DELAY_MS) {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_REQUEST_DELAY_MS,
                reason: format!("not a non-negative integer: {raw}"),
            })?,
            Err(_) => DEFAULT_REQUEST_DELAY_MS,
        };

        let max_pages = match env::var(ENV_MAX_PAGES) {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_MAX_PAGES,
                reason: format!("not a non-negative integer: {raw}"),
            })?,
            Err(_) => DEFAULT_MAX_PAGES,
        };

        Ok(Self {
            start_url,
            output,
            request_delay_ms,
            max_pages,
        })
    }

    /// First index page of the crawl.
    pub fn start_url(&self) -> &Url {
        &self.start_url
    }
    /// Output path for line-delimited records; `-` selects stdout.
    pub fn output(&self) -> &str {
        &self.output
    }
    /// Pause between consecutive requests, in milliseconds.
    pub fn request_delay_ms(&self) -> u64 {
        self.request_delay_ms
    }
    /// Hard cap on visited pages; 0 disables the cap.
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
