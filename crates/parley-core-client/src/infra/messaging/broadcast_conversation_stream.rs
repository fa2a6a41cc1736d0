// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use futures::{stream, StreamExt};
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

use crate::domain::messaging::models::MessageSeed;
use crate::domain::messaging::services::{ConversationStream, MessageSeedStream};
use crate::domain::shared::models::UserId;

const CHANNEL_CAPACITY: usize = 256;

/// An in-process real-time channel. Whatever receives messages from the network (a socket
/// connection for example) publishes them here, and every subscriber sees every message.
/// Filtering by conversation is up to the subscriber.
pub struct BroadcastConversationStream {
    sender: broadcast::Sender<MessageSeed>,
    subscriptions: Mutex<HashMap<UserId, usize>>,
}

impl BroadcastConversationStream {
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            subscriptions: Default::default(),
        }
    }

    /// Delivers `message` to all current subscribers. Returns the number of receivers.
    pub fn publish(&self, message: MessageSeed) -> usize {
        self.sender.send(message).unwrap_or(0)
    }

    pub fn is_subscribed(&self, counterpart_id: &UserId) -> bool {
        self.subscriptions.lock().contains_key(counterpart_id)
    }
}

impl Default for BroadcastConversationStream {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStream for BroadcastConversationStream {
    fn subscribe(&self, counterpart_id: &UserId) -> Result<MessageSeedStream> {
        *self
            .subscriptions
            .lock()
            .entry(counterpart_id.clone())
            .or_default() += 1;

        let receiver = self.sender.subscribe();

        let messages = stream::unfold(receiver, |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(message) => return Some((message, receiver)),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Real-time subscriber lagged behind, skipped {skipped} messages.")
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        });

        Ok(messages.boxed())
    }

    fn unsubscribe(&self, counterpart_id: &UserId) {
        let mut subscriptions = self.subscriptions.lock();
        let Some(count) = subscriptions.get_mut(counterpart_id) else {
            return;
        };
        *count -= 1;
        if *count == 0 {
            subscriptions.remove(counterpart_id);
        }
    }
}
