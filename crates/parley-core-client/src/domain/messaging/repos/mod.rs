// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_store::{MessageStore, MessageTransform};

mod message_store;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::message_store::MockMessageStore;
}
