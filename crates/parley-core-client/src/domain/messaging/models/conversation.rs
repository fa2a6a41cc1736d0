// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;

use crate::domain::messaging::models::{DuplicateMessageError, Message, MessageId};
use crate::domain::shared::models::UserId;

/// Counts conversation switches. Work started for an older generation must not be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ConversationGeneration(u64);

impl ConversationGeneration {
    pub fn next(self) -> Self {
        ConversationGeneration(self.0 + 1)
    }
}

/// The ordered messages exchanged with one counterpart, keyed by id in arrival order.
///
/// A `Conversation` is never mutated in place. All operations return a new value which the
/// store swaps in as a whole.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversation {
    counterpart_id: Option<UserId>,
    messages: IndexMap<MessageId, Message>,
}

impl Conversation {
    pub fn new(counterpart_id: Option<UserId>) -> Self {
        Conversation {
            counterpart_id,
            messages: Default::default(),
        }
    }

    pub fn counterpart_id(&self) -> Option<&UserId> {
        self.counterpart_id.as_ref()
    }

    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.get(id)
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.messages.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.values()
    }

    pub fn appending(&self, message: Message) -> Result<Conversation, DuplicateMessageError> {
        if self.messages.contains_key(&message.id) {
            return Err(DuplicateMessageError(message.id));
        }

        let mut conversation = self.clone();
        conversation.messages.insert(message.id.clone(), message);
        Ok(conversation)
    }

    /// Applies `transform` to the message with `id`. Returns `None` if there is no such message
    /// or `transform` declined to change it.
    pub fn updating(
        &self,
        id: &MessageId,
        transform: impl FnOnce(&Message) -> Option<Message>,
    ) -> Option<(Conversation, Message)> {
        let message = transform(self.messages.get(id)?)?;
        debug_assert_eq!(&message.id, id, "A transform must not change the message id.");

        let mut conversation = self.clone();
        conversation.messages.insert(id.clone(), message.clone());
        Some((conversation, message))
    }

    /// Builds the conversation for a fresh history load.
    ///
    /// Messages follow the order of `history`. If a message is already known, the known instance
    /// is kept so that summaries and pending tasks survive a reload. Known messages that are
    /// missing from `history` (i.e. arrived in real-time while the history was loading) are
    /// appended after it in their arrival order. Duplicate ids within `history` keep their first
    /// occurrence.
    pub fn merging_history(&self, history: Vec<Message>) -> Conversation {
        let mut messages = IndexMap::with_capacity(history.len() + self.messages.len());

        for message in history {
            if messages.contains_key(&message.id) {
                continue;
            }
            let message = self.messages.get(&message.id).cloned().unwrap_or(message);
            messages.insert(message.id.clone(), message);
        }

        for (id, message) in self.messages.iter() {
            if !messages.contains_key(id) {
                messages.insert(id.clone(), message.clone());
            }
        }

        Conversation {
            counterpart_id: self.counterpart_id.clone(),
            messages,
        }
    }
}
