// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_service::ConversationService;

mod conversation_service;
mod conversation_subscription;
