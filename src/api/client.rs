use serde::Deserialize;

use super::ApiError;
use crate::models::{Entry, EntryDraft};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the travel-journal REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn entries_url(&self) -> String {
        format!("{}/entries", self.base_url)
    }

    fn entry_url(&self, id: i64) -> String {
        format!("{}/entries/{}", self.base_url, id)
    }

    pub async fn list_entries(&self) -> Result<Vec<Entry>, ApiError> {
        let response = check(self.http.get(self.entries_url()).send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn get_entry(&self, id: i64) -> Result<Entry, ApiError> {
        let response = check(self.http.get(self.entry_url(id)).send().await?).await?;
        Ok(response.json().await?)
    }

    /// The backend answers with `{id, message}`; no caller reads it.
    pub async fn create_entry(&self, draft: &EntryDraft) -> Result<(), ApiError> {
        check(self.http.post(self.entries_url()).json(draft).send().await?).await?;
        Ok(())
    }

    pub async fn update_entry(&self, id: i64, draft: &EntryDraft) -> Result<(), ApiError> {
        check(self.http.put(self.entry_url(id)).json(draft).send().await?).await?;
        Ok(())
    }

    pub async fn delete_entry(&self, id: i64) -> Result<(), ApiError> {
        check(self.http.delete(self.entry_url(id)).send().await?).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into `ApiError::Server`, pulling the backend's
/// `{"error": ...}` message out of the body when present.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .map(|body| body.error);

    Err(ApiError::Server { status, message })
}
