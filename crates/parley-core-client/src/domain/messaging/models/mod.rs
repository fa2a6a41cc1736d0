// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use attachment::Attachment;
pub use conversation::{Conversation, ConversationGeneration};
pub use errors::{
    AppendError, DuplicateMessageError, LoadError, StaleUpdateError, SummarizationError,
};
pub use message::Message;
pub use message_id::MessageId;
pub use message_seed::MessageSeed;
pub use summarization_outcome::SummarizationOutcome;
pub use task_state::{TaskId, TaskState};
pub use view_toggle::{displayed_text, toggle};

mod attachment;
mod conversation;
mod errors;
mod message;
mod message_id;
mod message_seed;
mod summarization_outcome;
mod task_state;
mod view_toggle;
