// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SummarizationService: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String>;
}
