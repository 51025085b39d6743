use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{DirectoryUrl, Supervisor};

/// Client for the upstream supervisor directory API. Holds no response
/// state, so a failed fetch never affects later calls.
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: DirectoryUrl,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DirectoryUrl::new(base_url),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
    ) -> Result<T, DirectoryFetchError> {
        tracing::debug!("GET {}", url.as_ref());

        let resp = self
            .http
            .get(url.as_ref())
            .send()
            .await
            .map_err(|e| DirectoryFetchError::ResponseError(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DirectoryFetchError::ResponseError(format!(
                "Unexpected status code: {}",
                resp.status()
            )));
        }

        let resp_data = resp.json::<T>().await.map_err(|e| {
            DirectoryFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(resp_data)
    }

    /// Fetch the raw supervisor records. One request, no retries.
    pub async fn fetch_supervisors(&self) -> Result<Vec<Supervisor>, DirectoryFetchError> {
        let url = self.base_url.append_path("/managers");
        self.fetch(url).await
    }
}

#[derive(Error, Debug)]
pub enum DirectoryFetchError {
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}
