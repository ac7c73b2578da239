//! Refreshing the stored word lists from the source spreadsheet.
//!
//! This is the server-side half of the widget: it reads the idea columns
//! through the Sheets values API and overwrites the `idea_components` row so
//! clients can load lists from the store instead of the published CSV.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{check_status, ChesedError, ChesedResult};
use crate::store::IdeaStore;
use crate::words::WordLists;

pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_SHEET_ID: &str = "1ZcEzDod0hW3gBvrNgctQozCc-Je_dfr0WtHXcGC_crw";
/// Starts at row 2 to skip the header.
pub const DEFAULT_RANGE: &str = "A2:C1000";

/// Stored copy of the word lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaComponents {
    #[serde(default)]
    pub what: Vec<String>,
    #[serde(default)]
    pub whom: Vec<String>,
    #[serde(default)]
    pub when_to: Vec<String>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_opt")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl IdeaComponents {
    /// Split sheet rows into columns, skipping missing or empty cells.
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let mut components = Self::default();
        for row in rows {
            let cell = |i: usize| row.get(i).filter(|v| !v.is_empty()).cloned();
            components.what.extend(cell(0));
            components.whom.extend(cell(1));
            components.when_to.extend(cell(2));
        }
        components
    }

    pub fn into_word_lists(self) -> WordLists {
        WordLists {
            what: self.what,
            whom: self.whom,
            when_to: self.when_to,
        }
    }
}

/// Where the spreadsheet lives.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub base_url: String,
    pub sheet_id: String,
    pub range: String,
    pub api_key: String,
}

impl SheetsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            range: DEFAULT_RANGE.to_string(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Deserialize)]
struct ValueRange {
    values: Option<Vec<Vec<String>>>,
}

/// Minimal client for the Sheets values endpoint.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    config: SheetsConfig,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn values_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.sheet_id,
            self.config.range
        )
    }

    /// Fetch the configured range as rows of cells.
    pub async fn fetch_rows(&self) -> ChesedResult<Vec<Vec<String>>> {
        tracing::info!(sheet = %self.config.sheet_id, range = %self.config.range, "Fetching sheet data");
        let response = self
            .client
            .get(self.values_url())
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;
        let body: ValueRange = check_status(response).await?.json().await?;
        body.values
            .ok_or_else(|| ChesedError::MalformedResponse("No data found in sheet".to_string()))
    }
}

/// Pull the sheet and overwrite the stored word lists with it.
pub async fn refresh_idea_components(sheets: &SheetsClient, store: &dyn IdeaStore) -> ChesedResult<IdeaComponents> {
    let rows = sheets.fetch_rows().await?;
    let mut components = IdeaComponents::from_rows(&rows);
    components.last_updated = Some(Utc::now());

    store.replace_idea_components(&components).await?;
    tracing::info!(
        what = components.what.len(),
        whom = components.whom.len(),
        when_to = components.when_to.len(),
        "Idea components updated"
    );
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_from_rows_handles_ragged_rows() {
        let rows = vec![
            row(&["Visit", "a neighbor", "today"]),
            row(&["Bake"]),
            row(&["", "your teacher"]),
            row(&[]),
        ];
        let components = IdeaComponents::from_rows(&rows);

        assert_eq!(components.what, vec!["Visit", "Bake"]);
        assert_eq!(components.whom, vec!["a neighbor", "your teacher"]);
        assert_eq!(components.when_to, vec!["today"]);
    }

    #[test]
    fn test_values_url() {
        let client = SheetsClient::new(SheetsConfig {
            base_url: "http://localhost:9999/".to_string(),
            ..SheetsConfig::new("k")
        });
        assert_eq!(
            client.values_url(),
            format!("http://localhost:9999/v4/spreadsheets/{}/values/A2:C1000", DEFAULT_SHEET_ID)
        );
    }
}
