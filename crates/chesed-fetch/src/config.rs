//! Configuration for the fetch service.
//!
//! Loaded from environment variables (a `.env` file is honoured).

use std::env;
use std::net::SocketAddr;

use chesed_core::sheets::{DEFAULT_RANGE, DEFAULT_SHEETS_BASE_URL, DEFAULT_SHEET_ID};
use chesed_core::{ChesedError, ChesedResult, SheetsConfig};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

/// Fetch service configuration.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Address the HTTP endpoint listens on
    pub bind_addr: SocketAddr,
    /// Spreadsheet to read
    pub sheets: SheetsConfig,
    /// Hosted store base URL
    pub store_url: String,
    /// Service key for the hosted store
    pub store_key: Option<String>,
}

impl FetchConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> ChesedResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ChesedResult<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ChesedError::Config(format!("{} is not set", key)))
        };

        let bind_addr = lookup("CHESED_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ChesedError::Config(format!("invalid CHESED_BIND_ADDR: {}", e)))?;

        let sheets = SheetsConfig {
            base_url: lookup("CHESED_SHEETS_BASE_URL").unwrap_or_else(|| DEFAULT_SHEETS_BASE_URL.to_string()),
            sheet_id: lookup("CHESED_SHEET_ID").unwrap_or_else(|| DEFAULT_SHEET_ID.to_string()),
            range: lookup("CHESED_SHEET_RANGE").unwrap_or_else(|| DEFAULT_RANGE.to_string()),
            api_key: required("GOOGLE_SHEETS_API_KEY")?,
        };

        Ok(Self {
            bind_addr,
            sheets,
            store_url: required("CHESED_STORE_URL")?,
            store_key: lookup("CHESED_STORE_KEY"),
        })
    }
}
