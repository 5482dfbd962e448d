use super::{FileStore, StoreAction, decode_collection};
use crate::core::{DeskError, FileRecord, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Body of a write request.
#[derive(Debug, Serialize)]
pub struct PersistRequest<'a> {
    pub action: StoreAction,
    pub data: &'a FileRecord,
}

/// Client of the spreadsheet web service.
///
/// `GET <endpoint>` returns every row; `POST <endpoint>` with
/// `{action, data}` applies one operation. One round trip per call, no
/// retries.
#[derive(Debug, Clone)]
pub struct SheetsStore {
    client: reqwest::Client,
    endpoint: Url,
}

impl SheetsStore {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FileStore for SheetsStore {
    fn describe(&self) -> String {
        format!("sheet service at {}", self.endpoint)
    }

    async fn fetch_all(&self) -> Result<Vec<FileRecord>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching case files");
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeskError::Transport(format!(
                "fetch failed with status {}",
                status
            )));
        }

        let body: JsonValue = response
            .json()
            .await
            .map_err(|e| DeskError::Decode(format!("sheet response is not JSON: {}", e)))?;
        let records = decode_collection(body)?;
        tracing::debug!(count = records.len(), "fetched case files");
        Ok(records)
    }

    async fn persist(&self, record: &FileRecord, action: StoreAction) -> Result<()> {
        tracing::debug!(%action, file_id = record.id(), "persisting case file");
        let payload = PersistRequest {
            action,
            data: record,
        };
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeskError::Transport(format!(
                "failed to {} record {}: status {}",
                action,
                record.id(),
                status
            )));
        }
        Ok(())
    }
}
