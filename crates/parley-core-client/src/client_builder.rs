// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynConversationStream, DynMessageHistoryService,
    DynMessageStore, DynSummarizationService, DynTaskIdProvider,
};
use crate::app::services::ConversationService;
use crate::client::ClientInner;
use crate::domain::messaging::repos::MessageStore;
use crate::domain::messaging::services::{
    ConversationStream, IncrementingTaskIdProvider, MessageHistoryService, SummarizationService,
    TaskIdProvider,
};
use crate::domain::shared::models::UserId;
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::messaging::{BroadcastConversationStream, InMemoryMessageStore};
use crate::{Client, ClientDelegate};

pub struct UndefinedMessageHistoryService;
pub struct UndefinedSummarizationService;

pub struct ClientBuilder<H, S> {
    account_id: Option<UserId>,
    app_config: AppConfig,
    conversation_stream: DynConversationStream,
    delegate: Option<Box<dyn ClientDelegate>>,
    message_history_service: H,
    message_store: DynMessageStore,
    summarization_service: S,
    task_id_provider: DynTaskIdProvider,
}

impl ClientBuilder<UndefinedMessageHistoryService, UndefinedSummarizationService> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            account_id: None,
            app_config: Default::default(),
            conversation_stream: Arc::new(BroadcastConversationStream::new()),
            delegate: None,
            message_history_service: UndefinedMessageHistoryService,
            message_store: Arc::new(InMemoryMessageStore::new()),
            summarization_service: UndefinedSummarizationService,
            task_id_provider: Arc::new(IncrementingTaskIdProvider::new()),
        }
    }
}

impl<S> ClientBuilder<UndefinedMessageHistoryService, S> {
    pub fn set_message_history_service<H: MessageHistoryService + 'static>(
        self,
        message_history_service: H,
    ) -> ClientBuilder<DynMessageHistoryService, S> {
        ClientBuilder {
            account_id: self.account_id,
            app_config: self.app_config,
            conversation_stream: self.conversation_stream,
            delegate: self.delegate,
            message_history_service: Arc::new(message_history_service),
            message_store: self.message_store,
            summarization_service: self.summarization_service,
            task_id_provider: self.task_id_provider,
        }
    }
}

impl<H> ClientBuilder<H, UndefinedSummarizationService> {
    pub fn set_summarization_service<S: SummarizationService + 'static>(
        self,
        summarization_service: S,
    ) -> ClientBuilder<H, DynSummarizationService> {
        ClientBuilder {
            account_id: self.account_id,
            app_config: self.app_config,
            conversation_stream: self.conversation_stream,
            delegate: self.delegate,
            message_history_service: self.message_history_service,
            message_store: self.message_store,
            summarization_service: Arc::new(summarization_service),
            task_id_provider: self.task_id_provider,
        }
    }
}

impl<H, S> ClientBuilder<H, S> {
    /// Replaces the default `BroadcastConversationStream`. Pass an `Arc` to keep a handle for
    /// publishing.
    pub fn set_conversation_stream(
        mut self,
        conversation_stream: Arc<dyn ConversationStream>,
    ) -> Self {
        self.conversation_stream = conversation_stream;
        self
    }

    pub fn set_message_store<M: MessageStore + 'static>(mut self, message_store: M) -> Self {
        self.message_store = Arc::new(message_store);
        self
    }

    pub fn set_task_id_provider<P: TaskIdProvider + 'static>(mut self, provider: P) -> Self {
        self.task_id_provider = Arc::new(provider);
        self
    }

    pub fn set_account_id(mut self, account_id: Option<UserId>) -> Self {
        self.account_id = account_id;
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<DynMessageHistoryService, DynSummarizationService> {
    pub fn build(self) -> Client {
        let event_dispatcher = Arc::new(ImmediateClientEventDispatcher::new(self.delegate));

        let dependencies = AppDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            conversation_stream: self.conversation_stream,
            ctx: Arc::new(AppContext::new(self.account_id, self.app_config)),
            message_history_service: self.message_history_service,
            message_store: self.message_store,
            summarization_service: self.summarization_service,
            task_id_provider: self.task_id_provider,
        };

        let client_inner = Arc::new(ClientInner {
            conversation: ConversationService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
