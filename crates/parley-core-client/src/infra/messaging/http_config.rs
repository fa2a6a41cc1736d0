// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use url::Url;

/// Where and how to reach the chat backend.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL of the backend, e.g. `https://chat.example.com/`.
    pub base_url: Url,
    /// Path of the conversation history relative to `base_url`. The counterpart's id is
    /// appended as the last path segment.
    pub history_path: String,
    /// Path of the summarization endpoint relative to `base_url`.
    pub summarize_path: String,
    pub request_timeout: Duration,
}

impl HttpConfig {
    pub fn new(base_url: Url) -> Self {
        HttpConfig {
            base_url,
            history_path: "api/messages".to_string(),
            summarize_path: "api/summarize".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }

    pub(crate) fn build_client(&self) -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()?)
    }

    pub(crate) fn history_url(&self, counterpart_id: &str) -> Result<Url> {
        let mut url = self.base_url.join(&self.history_path)?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("{} cannot be used as a base URL.", self.base_url))?
            .pop_if_empty()
            .push(counterpart_id);
        Ok(url)
    }

    pub(crate) fn summarize_url(&self) -> Result<Url> {
        Ok(self.base_url.join(&self.summarize_path)?)
    }
}
