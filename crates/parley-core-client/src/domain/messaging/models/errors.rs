// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::UserId;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to load the conversation with {counterpart_id}: {source:#}")]
    Fetch {
        counterpart_id: UserId,
        #[source]
        source: anyhow::Error,
    },
    #[error("Failed to subscribe to the conversation with {counterpart_id}: {source:#}")]
    Subscribe {
        counterpart_id: UserId,
        #[source]
        source: anyhow::Error,
    },
    #[error("No conversation is selected.")]
    NoActiveConversation,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SummarizationError {
    #[error("The summarization request failed: {0}")]
    Request(String),
    #[error("The summarization response was malformed: {0}")]
    MalformedResponse(String),
}

impl From<anyhow::Error> for SummarizationError {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<SummarizationError>() {
            Ok(error) => error,
            Err(error) => SummarizationError::Request(format!("{error:#}")),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("A message with id {0} already exists in the conversation.")]
pub struct DuplicateMessageError(pub MessageId);

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("The conversation changed before the update could be applied.")]
pub struct StaleUpdateError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AppendError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateMessageError),
    #[error(transparent)]
    Stale(#[from] StaleUpdateError),
}
