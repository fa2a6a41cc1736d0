// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use futures::StreamExt;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::app::deps::DynConversationStream;
use crate::app::event_handlers::MessagesEventHandler;
use crate::domain::shared::models::UserId;

/// A live subscription to the real-time channel of one conversation.
///
/// Incoming messages are forwarded to a `MessagesEventHandler` on a background task. Dropping
/// the subscription stops that task and unsubscribes from the channel.
pub(crate) struct ConversationSubscription {
    counterpart_id: UserId,
    conversation_stream: DynConversationStream,
    pump: JoinHandle<()>,
}

impl ConversationSubscription {
    pub fn start(
        counterpart_id: UserId,
        conversation_stream: DynConversationStream,
        handler: MessagesEventHandler,
    ) -> Result<Self> {
        let runtime = Handle::try_current()?;
        let mut messages = conversation_stream.subscribe(&counterpart_id)?;

        info!("Subscribed to conversation with {counterpart_id}.");

        let pump = runtime.spawn(async move {
            while let Some(seed) = messages.next().await {
                handler.handle_message(seed);
            }
            debug!("Real-time stream ended.");
        });

        Ok(Self {
            counterpart_id,
            conversation_stream,
            pump,
        })
    }
}

impl Drop for ConversationSubscription {
    fn drop(&mut self) {
        self.pump.abort();
        self.conversation_stream.unsubscribe(&self.counterpart_id);
        info!("Unsubscribed from conversation with {}.", self.counterpart_id);
    }
}
