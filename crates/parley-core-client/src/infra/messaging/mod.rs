// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use broadcast_conversation_stream::BroadcastConversationStream;
pub use http_config::HttpConfig;
pub use http_message_history_service::HttpMessageHistoryService;
pub use http_summarization_service::HttpSummarizationService;
pub use in_memory_message_store::InMemoryMessageStore;

mod broadcast_conversation_stream;
mod http_config;
mod http_message_history_service;
mod http_summarization_service;
mod in_memory_message_store;
mod message_record;
