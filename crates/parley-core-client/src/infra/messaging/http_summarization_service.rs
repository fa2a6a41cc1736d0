// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::messaging::models::SummarizationError;
use crate::domain::messaging::services::SummarizationService;
use crate::infra::messaging::HttpConfig;

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    summary: Option<String>,
}

/// Calls the backend's summarization endpoint. Every call issues exactly one request.
pub struct HttpSummarizationService {
    client: reqwest::Client,
    config: HttpConfig,
}

impl HttpSummarizationService {
    pub fn new(config: HttpConfig) -> Result<Self> {
        Ok(Self {
            client: config.build_client()?,
            config,
        })
    }
}

#[async_trait]
impl SummarizationService for HttpSummarizationService {
    async fn summarize(&self, text: &str) -> Result<String> {
        let url = self.config.summarize_url()?;

        let response = self
            .client
            .post(url.clone())
            .json(&SummarizeRequest { text })
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?;

        let status = response.status();
        debug!(status = %status, "Summarization response received.");

        let body = response.error_for_status()?.text().await?;
        let response = serde_json::from_str::<SummarizeResponse>(&body)
            .map_err(|error| SummarizationError::MalformedResponse(error.to_string()))?;

        let Some(summary) = response.summary else {
            return Err(SummarizationError::MalformedResponse(
                "The response does not contain a summary.".to_string(),
            )
            .into());
        };

        Ok(summary)
    }
}
