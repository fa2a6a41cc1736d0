// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::messaging::models::{
    AppendError, Conversation, ConversationGeneration, Message, MessageId, StaleUpdateError,
};
use crate::domain::messaging::repos::{MessageStore, MessageTransform};
use crate::domain::shared::models::UserId;

struct State {
    generation: ConversationGeneration,
    conversation: Arc<Conversation>,
}

pub struct InMemoryMessageStore {
    state: RwLock<State>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        InMemoryMessageStore {
            state: RwLock::new(State {
                generation: Default::default(),
                conversation: Default::default(),
            }),
        }
    }
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore for InMemoryMessageStore {
    fn conversation(&self) -> Arc<Conversation> {
        self.state.read().conversation.clone()
    }

    fn generation(&self) -> ConversationGeneration {
        self.state.read().generation
    }

    fn reset(&self, counterpart_id: Option<UserId>) -> ConversationGeneration {
        let mut state = self.state.write();
        state.generation = state.generation.next();
        state.conversation = Arc::new(Conversation::new(counterpart_id));
        state.generation
    }

    fn replace(
        &self,
        generation: ConversationGeneration,
        messages: Vec<Message>,
    ) -> Result<(), StaleUpdateError> {
        let mut state = self.state.write();
        if state.generation != generation {
            return Err(StaleUpdateError);
        }
        state.conversation = Arc::new(state.conversation.merging_history(messages));
        Ok(())
    }

    fn append(
        &self,
        generation: ConversationGeneration,
        message: Message,
    ) -> Result<(), AppendError> {
        let mut state = self.state.write();
        if state.generation != generation {
            return Err(StaleUpdateError.into());
        }
        state.conversation = Arc::new(state.conversation.appending(message)?);
        Ok(())
    }

    fn update_by_id(&self, id: &MessageId, transform: MessageTransform) -> Option<Message> {
        let mut state = self.state.write();
        let (conversation, message) = state.conversation.updating(id, transform)?;
        state.conversation = Arc::new(conversation);
        Some(message)
    }
}
