// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use futures::stream::BoxStream;

use crate::domain::messaging::models::MessageSeed;
use crate::domain::shared::models::UserId;

/// Messages that arrive while subscribed. Delivery is at-least-once and the stream cannot be
/// restarted once it ended.
pub type MessageSeedStream = BoxStream<'static, MessageSeed>;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConversationStream: Send + Sync {
    fn subscribe(&self, counterpart_id: &UserId) -> Result<MessageSeedStream>;
    fn unsubscribe(&self, counterpart_id: &UserId);
}
