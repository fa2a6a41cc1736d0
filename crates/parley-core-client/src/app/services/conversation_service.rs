// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use parley_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynConversationStream, DynMessageHistoryService,
    DynMessageStore,
};
use crate::app::dtos::MessageView;
use crate::app::event_handlers::MessagesEventHandler;
use crate::app::services::conversation_subscription::ConversationSubscription;
use crate::domain::messaging::models::{
    toggle, ConversationGeneration, LoadError, Message, MessageId, SummarizationOutcome,
};
use crate::domain::messaging::services::SummarizationTaskManager;
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

/// The message panel of the conversation with the currently selected counterpart.
#[derive(InjectDependencies)]
pub struct ConversationService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    conversation_stream: DynConversationStream,
    #[inject]
    message_history_service: DynMessageHistoryService,
    #[inject]
    message_store: DynMessageStore,
    #[inject(from_deps)]
    summarization_task_manager: SummarizationTaskManager,

    subscription: Mutex<Option<ConversationSubscription>>,
    loading: Mutex<Option<ConversationGeneration>>,
}

impl ConversationService {
    /// Makes the conversation with `counterpart_id` the active one.
    ///
    /// The previous conversation is discarded and its subscription released right away. The
    /// real-time subscription for the new counterpart is acquired before the history is fetched
    /// so that no message falls in between. If loading fails the subscription is released again
    /// and the conversation stays empty.
    pub async fn select_counterpart(&self, counterpart_id: &UserId) -> Result<(), LoadError> {
        let generation = {
            let mut subscription = self.subscription.lock();
            subscription.take();
            self.message_store.reset(Some(counterpart_id.clone()))
        };
        let loading = self.start_loading(generation);

        info!("Loading conversation with {counterpart_id}…");
        let result = self.activate(counterpart_id, generation).await;
        drop(loading);

        if self.message_store.generation() == generation {
            self.dispatch_load_result(counterpart_id, &result);
        }
        result
    }

    /// Fetches the history of the active conversation again. On failure the conversation is
    /// left exactly as it was.
    pub async fn reload(&self) -> Result<(), LoadError> {
        let (counterpart_id, generation) = {
            let _subscription = self.subscription.lock();
            let conversation = self.message_store.conversation();
            let Some(counterpart_id) = conversation.counterpart_id().cloned() else {
                return Err(LoadError::NoActiveConversation);
            };
            (counterpart_id, self.message_store.generation())
        };
        let loading = self.start_loading(generation);

        info!("Reloading conversation with {counterpart_id}…");
        let result = self.load_history(&counterpart_id, generation).await;
        drop(loading);

        if self.message_store.generation() == generation {
            self.dispatch_load_result(&counterpart_id, &result);
        }
        result
    }

    /// Releases the subscription and discards the active conversation.
    pub fn close(&self) {
        let mut subscription = self.subscription.lock();
        subscription.take();
        self.message_store.reset(None);
        *self.loading.lock() = None;
    }

    pub fn counterpart_id(&self) -> Option<UserId> {
        self.message_store.conversation().counterpart_id().cloned()
    }

    /// Whether the history of the active conversation is currently being fetched.
    pub fn is_loading(&self) -> bool {
        let generation = self.message_store.generation();
        *self.loading.lock() == Some(generation)
    }

    pub fn messages(&self) -> Vec<MessageView> {
        self.message_store
            .conversation()
            .iter()
            .map(|message| MessageView::new(message, &self.ctx))
            .collect()
    }

    pub fn message(&self, id: &MessageId) -> Option<MessageView> {
        self.message_store
            .conversation()
            .get(id)
            .map(|message| MessageView::new(message, &self.ctx))
    }

    /// Requests a summary for the message with `id`. Does nothing if the message is too short
    /// or already being summarized.
    pub async fn summarize_message(&self, id: &MessageId) -> SummarizationOutcome {
        self.summarization_task_manager.summarize(id).await
    }

    /// Switches the message with `id` between its summary and its original text. Returns the
    /// updated message or `None` if there was nothing to toggle.
    pub fn toggle_summary(&self, id: &MessageId) -> Option<MessageView> {
        let message = self.message_store.update_by_id(
            id,
            Box::new(|message| {
                let toggled = toggle(message);
                (toggled != *message).then_some(toggled)
            }),
        )?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::MessagesUpdated {
                message_ids: vec![id.clone()],
            });

        Some(MessageView::new(&message, &self.ctx))
    }
}

impl ConversationService {
    async fn activate(
        &self,
        counterpart_id: &UserId,
        generation: ConversationGeneration,
    ) -> Result<(), LoadError> {
        let handler = MessagesEventHandler::new(
            counterpart_id.clone(),
            generation,
            self.client_event_dispatcher.clone(),
            self.message_store.clone(),
        );

        let subscription = ConversationSubscription::start(
            counterpart_id.clone(),
            self.conversation_stream.clone(),
            handler,
        )
        .map_err(|source| LoadError::Subscribe {
            counterpart_id: counterpart_id.clone(),
            source,
        })?;

        self.load_history(counterpart_id, generation).await?;

        let mut active_subscription = self.subscription.lock();
        if self.message_store.generation() != generation {
            debug!("Conversation with {counterpart_id} was deselected while loading.");
            return Ok(());
        }
        *active_subscription = Some(subscription);

        Ok(())
    }

    async fn load_history(
        &self,
        counterpart_id: &UserId,
        generation: ConversationGeneration,
    ) -> Result<(), LoadError> {
        let seeds = self
            .message_history_service
            .load_messages(counterpart_id)
            .await
            .map_err(|source| LoadError::Fetch {
                counterpart_id: counterpart_id.clone(),
                source,
            })?;

        let count = seeds.len();
        let messages = seeds.into_iter().map(Message::from).collect();

        match self.message_store.replace(generation, messages) {
            Ok(()) => info!("Loaded {count} messages of conversation with {counterpart_id}."),
            Err(error) => debug!("Discarding history of {counterpart_id}. {error}"),
        }

        Ok(())
    }

    fn start_loading(&self, generation: ConversationGeneration) -> LoadingGuard<'_> {
        *self.loading.lock() = Some(generation);
        LoadingGuard {
            loading: &self.loading,
            generation,
        }
    }

    fn dispatch_load_result(&self, counterpart_id: &UserId, result: &Result<(), LoadError>) {
        let event = match result {
            Ok(()) => ClientEvent::ConversationLoaded {
                counterpart_id: counterpart_id.clone(),
            },
            Err(error) => {
                warn!("{error}");
                ClientEvent::ConversationLoadFailed {
                    counterpart_id: counterpart_id.clone(),
                }
            }
        };
        self.client_event_dispatcher.dispatch_event(event);
    }
}

/// Clears the loading flag of `generation` when the load ends, including when its future is
/// dropped. A newer load keeps its own flag.
struct LoadingGuard<'a> {
    loading: &'a Mutex<Option<ConversationGeneration>>,
    generation: ConversationGeneration,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut loading = self.loading.lock();
        if *loading == Some(self.generation) {
            *loading = None;
        }
    }
}
