// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_stream::{ConversationStream, MessageSeedStream};
pub use message_history_service::MessageHistoryService;
pub use summarization_service::SummarizationService;
pub use summarization_task_manager::SummarizationTaskManager;
pub use task_id_provider::{IncrementingTaskIdProvider, TaskIdProvider};

mod conversation_stream;
mod message_history_service;
mod summarization_service;
mod summarization_task_manager;
mod task_id_provider;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::conversation_stream::MockConversationStream;
    pub use super::message_history_service::MockMessageHistoryService;
    pub use super::summarization_service::MockSummarizationService;
}
