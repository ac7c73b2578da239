//! Client for the hosted store's PostgREST interface.
//!
//! Conditional writes are expressed as query filters (`count=eq.5`,
//! `id=eq.42`) on a `PATCH`; with `Prefer: return=representation` the store
//! echoes the rows it changed, so an empty array means the condition did not
//! match.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{IdeaStore, COMMITMENTS_TABLE, COUNTER_TABLE, IDEA_COMPONENTS_ROW_ID, IDEA_COMPONENTS_TABLE};
use crate::commitment::{Commitment, NewCommitment, ReminderContact};
use crate::counter::Counter;
use crate::error::{check_status, ChesedError, ChesedResult};
use crate::sheets::IdeaComponents;

const RETURN_ROWS: &str = "return=representation";
const UPSERT: &str = "resolution=merge-duplicates,return=minimal";

/// Hosted store reached over HTTP.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.table_url(table));
        if let Some(key) = &self.api_key {
            req = req.header("apikey", key).bearer_auth(key);
        }
        req
    }

    async fn rows<T: DeserializeOwned>(&self, req: RequestBuilder) -> ChesedResult<Vec<T>> {
        let response = check_status(req.send().await?).await?;
        Ok(response.json::<Vec<T>>().await?)
    }
}

#[async_trait]
impl IdeaStore for RestStore {
    async fn fetch_counter(&self) -> ChesedResult<Counter> {
        let req = self
            .request(Method::GET, COUNTER_TABLE)
            .query(&[("select", "count,last_updated"), ("limit", "1")]);
        let rows: Vec<Counter> = self.rows(req).await?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    async fn update_counter_if(&self, expected: i64, next: &Counter) -> ChesedResult<bool> {
        let req = self
            .request(Method::PATCH, COUNTER_TABLE)
            .query(&[("count", format!("eq.{}", expected))])
            .header("Prefer", RETURN_ROWS)
            .json(next);
        let rows: Vec<Counter> = self.rows(req).await?;
        Ok(!rows.is_empty())
    }

    async fn insert_commitment(&self, new: &NewCommitment) -> ChesedResult<Commitment> {
        let req = self
            .request(Method::POST, COMMITMENTS_TABLE)
            .header("Prefer", RETURN_ROWS)
            .json(new);
        let rows: Vec<Commitment> = self.rows(req).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| ChesedError::MalformedResponse(format!("insert into {} returned no rows", COMMITMENTS_TABLE)))
    }

    async fn attach_reminder(&self, id: i64, contact: &ReminderContact) -> ChesedResult<Commitment> {
        let req = self
            .request(Method::PATCH, COMMITMENTS_TABLE)
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", RETURN_ROWS)
            .json(&json!({
                "user_name": contact.name,
                "user_email": contact.email,
            }));
        let rows: Vec<Commitment> = self.rows(req).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| ChesedError::NotFound(format!("{} id={}", COMMITMENTS_TABLE, id)))
    }

    async fn get_commitment(&self, id: i64) -> ChesedResult<Option<Commitment>> {
        let req = self
            .request(Method::GET, COMMITMENTS_TABLE)
            .query(&[("id", format!("eq.{}", id)), ("select", "*".to_string())]);
        let rows: Vec<Commitment> = self.rows(req).await?;
        Ok(rows.into_iter().next())
    }

    async fn fetch_idea_components(&self) -> ChesedResult<Option<IdeaComponents>> {
        let req = self.request(Method::GET, IDEA_COMPONENTS_TABLE).query(&[
            ("id", format!("eq.{}", IDEA_COMPONENTS_ROW_ID)),
            ("select", "what,whom,when_to,last_updated".to_string()),
        ]);
        let rows: Vec<IdeaComponents> = self.rows(req).await?;
        Ok(rows.into_iter().next())
    }

    async fn replace_idea_components(&self, components: &IdeaComponents) -> ChesedResult<()> {
        let req = self
            .request(Method::POST, IDEA_COMPONENTS_TABLE)
            .header("Prefer", UPSERT)
            .json(&json!({
                "id": IDEA_COMPONENTS_ROW_ID,
                "what": components.what,
                "whom": components.whom,
                "when_to": components.when_to,
                "last_updated": components.last_updated,
            }));
        check_status(req.send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = RestStore::new("https://example.supabase.co/", None);
        assert_eq!(
            store.table_url(COUNTER_TABLE),
            "https://example.supabase.co/rest/v1/Counter"
        );
    }
}
