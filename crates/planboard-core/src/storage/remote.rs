//! Remote plan row behind a PostgREST-style HTTP API.
//!
//! The whole document lives in the `data` column of a single row whose `id`
//! is the configured plan id. Reads filter on that id; writes upsert it.

use chrono::Utc;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{Result, StorageError};
use crate::plan::PlanDocument;

/// Connection settings for [`RemoteStore`].
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub table: String,
    pub plan_id: String,
    pub api_key: String,
}

#[derive(Debug)]
pub struct RemoteStore {
    config: RemoteConfig,
    table_url: Url,
    http_client: Client,
}

#[derive(Serialize)]
struct PlanRow<'a> {
    id: &'a str,
    data: &'a PlanDocument,
    updated_at: String,
}

#[derive(Deserialize)]
struct FetchedRow {
    data: PlanDocument,
}

impl RemoteStore {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let table_url = Url::parse(&format!(
            "{}/rest/v1/{}",
            config.base_url.trim_end_matches('/'),
            config.table
        ))
        .map_err(StorageError::Url)?;

        Ok(Self {
            config,
            table_url,
            http_client: Client::new(),
        })
    }

    pub fn plan_id(&self) -> &str {
        &self.config.plan_id
    }

    /// Fetch the plan row. An empty result is `None`.
    pub async fn load(&self) -> Result<Option<PlanDocument>> {
        let filter = format!("eq.{}", self.config.plan_id);
        let resp = self
            .http_client
            .get(self.table_url.clone())
            .query(&[("id", filter.as_str()), ("select", "data")])
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(StorageError::Http)?;

        let rows: Vec<FetchedRow> = check_status(resp)
            .await?
            .json()
            .await
            .map_err(StorageError::Http)?;

        let Some(row) = rows.into_iter().next() else {
            debug!(plan_id = %self.config.plan_id, "no remote plan row");
            return Ok(None);
        };
        row.data.validate()?;
        debug!(plan_id = %self.config.plan_id, items = row.data.items.len(), "fetched remote plan");
        Ok(Some(row.data))
    }

    /// Upsert the plan row.
    pub async fn save(&self, doc: &PlanDocument) -> Result<()> {
        let body = [PlanRow {
            id: &self.config.plan_id,
            data: doc,
            updated_at: Utc::now().to_rfc3339(),
        }];

        let resp = self
            .http_client
            .post(self.table_url.clone())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&body)
            .send()
            .await
            .map_err(StorageError::Http)?;

        check_status(resp).await?;
        debug!(plan_id = %self.config.plan_id, "upserted remote plan");
        Ok(())
    }
}

async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(StorageError::Remote {
        status: status.as_u16(),
        body,
    }
    .into())
}
