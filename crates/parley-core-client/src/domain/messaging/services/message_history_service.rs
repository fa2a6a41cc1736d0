// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::MessageSeed;
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessageHistoryService: Send + Sync {
    /// Loads the stored messages exchanged with `counterpart_id`, oldest first.
    async fn load_messages(&self, counterpart_id: &UserId) -> Result<Vec<MessageSeed>>;
}
