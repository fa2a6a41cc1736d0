// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message::{MessageView, TaskStatus};

pub use crate::domain::messaging::models::{
    Attachment, MessageId, MessageSeed, SummarizationOutcome,
};
pub use crate::domain::shared::models::UserId;

mod message;
