// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::{StaleUpdateError, SummarizationError};

/// The result of a single summarization trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum SummarizationOutcome {
    /// Nothing happened. The message was either absent, too short to summarize or already
    /// being summarized.
    Skipped,
    /// The summary was stored and is now being displayed.
    Completed { summary: String },
    /// The call failed and the message was rolled back to `TaskState::Idle`.
    Failed(SummarizationError),
    /// The response arrived after the message left the conversation and was dropped.
    Discarded(StaleUpdateError),
}
