// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::domain::messaging::models::MessageSeed;
use crate::domain::messaging::services::MessageHistoryService;
use crate::domain::shared::models::UserId;
use crate::infra::messaging::message_record::MessageRecord;
use crate::infra::messaging::HttpConfig;

pub struct HttpMessageHistoryService {
    client: reqwest::Client,
    config: HttpConfig,
}

impl HttpMessageHistoryService {
    pub fn new(config: HttpConfig) -> Result<Self> {
        Ok(Self {
            client: config.build_client()?,
            config,
        })
    }
}

#[async_trait]
impl MessageHistoryService for HttpMessageHistoryService {
    async fn load_messages(&self, counterpart_id: &UserId) -> Result<Vec<MessageSeed>> {
        let url = self.config.history_url(counterpart_id.as_str())?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;

        let status = response.status();
        debug!(status = %status, "History response received.");

        let records = response
            .error_for_status()?
            .json::<Vec<MessageRecord>>()
            .await
            .context("Failed to parse conversation history")?;

        Ok(records.into_iter().map(MessageSeed::from).collect())
    }
}
