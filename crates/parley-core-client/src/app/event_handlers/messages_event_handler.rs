// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, info};

use crate::app::deps::{DynClientEventDispatcher, DynMessageStore};
use crate::domain::messaging::models::{
    AppendError, ConversationGeneration, Message, MessageSeed,
};
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

/// Applies messages arriving over the real-time channel to the conversation they were
/// subscribed for.
pub struct MessagesEventHandler {
    counterpart_id: UserId,
    generation: ConversationGeneration,
    client_event_dispatcher: DynClientEventDispatcher,
    message_store: DynMessageStore,
}

impl MessagesEventHandler {
    pub fn new(
        counterpart_id: UserId,
        generation: ConversationGeneration,
        client_event_dispatcher: DynClientEventDispatcher,
        message_store: DynMessageStore,
    ) -> Self {
        Self {
            counterpart_id,
            generation,
            client_event_dispatcher,
            message_store,
        }
    }

    /// Appends `seed` to the conversation. Messages from anybody but the counterpart are
    /// ignored, as are messages that are already known or arrive after the conversation was
    /// switched.
    pub fn handle_message(&self, seed: MessageSeed) {
        if seed.sender_id != self.counterpart_id {
            debug!(
                "Ignoring message {} from {} in conversation with {}.",
                seed.id, seed.sender_id, self.counterpart_id
            );
            return;
        }

        let message_id = seed.id.clone();

        match self
            .message_store
            .append(self.generation, Message::from(seed))
        {
            Ok(()) => {
                info!("Received message {message_id} from {}.", self.counterpart_id);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::MessagesAppended {
                        message_ids: vec![message_id],
                    })
            }
            Err(AppendError::Duplicate(error)) => debug!("Dropping message. {error}"),
            Err(AppendError::Stale(error)) => debug!("Dropping message {message_id}. {error}"),
        }
    }
}
