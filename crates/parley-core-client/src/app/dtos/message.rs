// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::deps::AppContext;
use crate::domain::messaging::models::{Attachment, Message, MessageId, TaskState};
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Idle,
    /// A summary is being computed. The message should show a loading indicator instead of its
    /// text.
    Pending,
    Done,
}

/// What the presentation layer needs to render a single message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageView {
    pub id: MessageId,
    pub sender_id: UserId,
    pub created_at: DateTime<Utc>,
    pub attachment: Option<Attachment>,
    pub display_text: String,
    pub task_status: TaskStatus,
    pub is_from_self: bool,
    pub is_showing_summary: bool,
    pub can_summarize: bool,
    pub can_toggle_summary: bool,
}

impl From<TaskState> for TaskStatus {
    fn from(value: TaskState) -> Self {
        match value {
            TaskState::Idle => TaskStatus::Idle,
            TaskState::Pending { .. } => TaskStatus::Pending,
            TaskState::Done => TaskStatus::Done,
        }
    }
}

impl MessageView {
    pub(crate) fn new(message: &Message, ctx: &AppContext) -> Self {
        let task_state = message.task_state();

        MessageView {
            id: message.id().clone(),
            sender_id: message.sender_id().clone(),
            created_at: *message.created_at(),
            attachment: message.attachment().cloned(),
            display_text: message.display_text().to_string(),
            task_status: task_state.into(),
            is_from_self: ctx.is_own_message(message.sender_id()),
            is_showing_summary: message.is_showing_summary(),
            can_summarize: !task_state.is_pending()
                && message.is_eligible_for_summary(ctx.config.summary_min_length),
            can_toggle_summary: message.can_toggle_summary(),
        }
    }
}
