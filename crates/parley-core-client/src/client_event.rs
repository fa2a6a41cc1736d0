// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The history of the conversation with `counterpart_id` was loaded.
    ConversationLoaded { counterpart_id: UserId },

    /// The history of the conversation with `counterpart_id` could not be loaded.
    ConversationLoadFailed { counterpart_id: UserId },

    /// One or many messages were received in real-time.
    MessagesAppended { message_ids: Vec<MessageId> },

    /// The summary state of one or many messages changed.
    MessagesUpdated { message_ids: Vec<MessageId> },
}
