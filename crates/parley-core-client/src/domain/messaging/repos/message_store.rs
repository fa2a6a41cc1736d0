// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::messaging::models::{
    AppendError, Conversation, ConversationGeneration, Message, MessageId, StaleUpdateError,
};
use crate::domain::shared::models::UserId;

pub type MessageTransform = Box<dyn FnOnce(&Message) -> Option<Message> + Send>;

/// Owns the active conversation. Every mutation replaces the whole conversation at once, so
/// readers only ever observe complete snapshots.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessageStore: Send + Sync {
    /// Returns a snapshot of the active conversation.
    fn conversation(&self) -> Arc<Conversation>;

    fn generation(&self) -> ConversationGeneration;

    /// Discards the active conversation and starts an empty one for `counterpart_id`.
    fn reset(&self, counterpart_id: Option<UserId>) -> ConversationGeneration;

    /// Commits a history load. Fails if the conversation was reset since `generation`.
    fn replace(
        &self,
        generation: ConversationGeneration,
        messages: Vec<Message>,
    ) -> Result<(), StaleUpdateError>;

    /// Appends `message` at the end of the conversation of `generation`. Messages with an id
    /// that is already present are rejected.
    fn append(
        &self,
        generation: ConversationGeneration,
        message: Message,
    ) -> Result<(), AppendError>;

    /// Applies `transform` to the message with `id` and returns the updated message. Returns
    /// `None` without touching the conversation if there is no such message or if `transform`
    /// returned `None`.
    fn update_by_id(&self, id: &MessageId, transform: MessageTransform) -> Option<Message>;
}
