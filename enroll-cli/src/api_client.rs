use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use enroll_core::Submission;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// The server's verdict on a submission. A rejection is a normal outcome,
/// not a transport failure.
pub enum SubmitOutcome {
    Accepted(String),
    Rejected(String),
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /supervisors — the ordered roster of display strings.
    pub async fn get_supervisors(&self) -> Result<Vec<String>> {
        let resp = self
            .client
            .get(self.url("/supervisors"))
            .send()
            .await
            .context("Failed to call /supervisors")?;

        resp.error_for_status_ref()
            .context("GET /supervisors returned error")?;
        resp.json::<Vec<String>>()
            .await
            .context("Failed to parse /supervisors response")
    }

    /// POST /submit — one request, no retries.
    pub async fn submit(&self, submission: &Submission) -> Result<SubmitOutcome> {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(submission)
            .send()
            .await
            .context("Failed to call /submit")?;

        if resp.status() == StatusCode::BAD_REQUEST {
            let body = resp
                .json::<ErrorBody>()
                .await
                .context("Failed to parse /submit error response")?;
            return Ok(SubmitOutcome::Rejected(body.error));
        }

        resp.error_for_status_ref()
            .context("POST /submit returned error")?;
        let body = resp
            .json::<MessageBody>()
            .await
            .context("Failed to parse /submit response")?;
        Ok(SubmitOutcome::Accepted(body.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.url("/supervisors"), "http://localhost:8080/api/supervisors");
    }
}
