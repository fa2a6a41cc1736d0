// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::messaging::repos::MessageStore;
use crate::domain::messaging::services::{
    ConversationStream, MessageHistoryService, SummarizationService, TaskIdProvider,
};

pub type DynAppContext = Arc<AppContext>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynConversationStream = Arc<dyn ConversationStream>;
pub type DynMessageHistoryService = Arc<dyn MessageHistoryService>;
pub type DynMessageStore = Arc<dyn MessageStore>;
pub type DynSummarizationService = Arc<dyn SummarizationService>;
pub type DynTaskIdProvider = Arc<dyn TaskIdProvider>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub conversation_stream: DynConversationStream,
    pub ctx: DynAppContext,
    pub message_history_service: DynMessageHistoryService,
    pub message_store: DynMessageStore,
    pub summarization_service: DynSummarizationService,
    pub task_id_provider: DynTaskIdProvider,
}
