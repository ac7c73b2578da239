//! Configuration for the widget.
//!
//! Values come from environment variables (a `.env` file is honoured) with
//! defaults that point at the published spreadsheet. Command-line flags in
//! the binaries override individual fields afterwards.

use std::env;
use std::path::PathBuf;

use crate::error::{ChesedError, ChesedResult};

/// Published CSV export of the word-list spreadsheet.
pub const DEFAULT_WORD_LIST_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR4UjqO1VWlv1XBOTY7zCE9kc6IR_uShi5jvd-9vQDfEFPsnGjHizqvCHUt6c42E3Z9M287w3WKrxUv/pub?output=csv";

/// Page linked from Facebook shares when nothing else is configured.
pub const DEFAULT_PAGE_URL: &str = "http://localhost";

/// Where the widget reads its word lists from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Published CSV at the given URL
    Csv(String),
    /// `idea_components` row in the hosted store
    Store,
}

impl WordSource {
    /// Parse the `CHESED_WORD_SOURCE` value, falling back to the CSV URL.
    pub fn parse(kind: &str, csv_url: String) -> ChesedResult<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "" | "csv" => Ok(WordSource::Csv(csv_url)),
            "store" => Ok(WordSource::Store),
            other => Err(ChesedError::Config(format!(
                "unknown word source '{}' (expected csv or store)",
                other
            ))),
        }
    }
}

/// Widget configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Source of the what/whom/when lists
    pub word_source: WordSource,
    /// Base URL of the hosted store (None = in-memory store)
    pub store_url: Option<String>,
    /// API key for the hosted store
    pub store_key: Option<String>,
    /// URL of the page shared on Facebook
    pub page_url: String,
    /// Directory for local state (the first-visit flag)
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            word_source: WordSource::Csv(DEFAULT_WORD_LIST_URL.to_string()),
            store_url: None,
            store_key: None,
            page_url: DEFAULT_PAGE_URL.to_string(),
            data_dir: default_data_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> ChesedResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ChesedResult<Self> {
        let csv_url = lookup("CHESED_WORD_LIST_URL").unwrap_or_else(|| DEFAULT_WORD_LIST_URL.to_string());
        let word_source = WordSource::parse(&lookup("CHESED_WORD_SOURCE").unwrap_or_default(), csv_url)?;

        let store_url = lookup("CHESED_STORE_URL").filter(|s| !s.trim().is_empty());
        let store_key = lookup("CHESED_STORE_KEY").filter(|s| !s.trim().is_empty());

        let page_url = lookup("CHESED_PAGE_URL").unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());

        let data_dir = lookup("CHESED_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Ok(Self {
            word_source,
            store_url,
            store_key,
            page_url,
            data_dir,
        })
    }

    /// Check fields that depend on each other. Run after command-line
    /// overrides have been applied.
    pub fn validate(&self) -> ChesedResult<()> {
        if self.word_source == WordSource::Store && self.store_url.is_none() {
            return Err(ChesedError::Config(
                "CHESED_WORD_SOURCE=store requires a store URL (CHESED_STORE_URL or --store-url)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Platform data directory for the widget (e.g. ~/.local/share/chesed-machine).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chesed-machine")
}
