// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::messaging::models::{Attachment, MessageId, MessageSeed, TaskId, TaskState};
use crate::domain::shared::models::UserId;

/// A message of the active conversation together with the state of its summary.
///
/// `original_text` is set once on creation and never changes. `display_text` always equals
/// either `original_text` or `current_summary`, depending on `showing_summary`. All state changes
/// produce a new `Message` so that the store can swap them in atomically.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub(super) id: MessageId,
    pub(super) sender_id: UserId,
    pub(super) created_at: DateTime<Utc>,
    pub(super) attachment: Option<Attachment>,
    pub(super) original_text: String,
    pub(super) current_summary: Option<String>,
    pub(super) display_text: String,
    pub(super) task_state: TaskState,
    pub(super) showing_summary: bool,
}

impl From<MessageSeed> for Message {
    fn from(seed: MessageSeed) -> Self {
        Message {
            id: seed.id,
            sender_id: seed.sender_id,
            created_at: seed.created_at,
            attachment: seed.attachment,
            display_text: seed.text.clone(),
            original_text: seed.text,
            current_summary: None,
            task_state: TaskState::Idle,
            showing_summary: false,
        }
    }
}

impl Message {
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn sender_id(&self) -> &UserId {
        &self.sender_id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn current_summary(&self) -> Option<&str> {
        self.current_summary.as_deref()
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn task_state(&self) -> TaskState {
        self.task_state
    }

    pub fn is_showing_summary(&self) -> bool {
        self.showing_summary
    }
}

impl Message {
    /// Messages with a `display_text` of `min_length` characters or less are not worth
    /// summarizing.
    pub fn is_eligible_for_summary(&self, min_length: usize) -> bool {
        self.display_text.chars().count() > min_length
    }

    /// Whether the presentation layer should offer to switch between summary and original.
    pub fn can_toggle_summary(&self) -> bool {
        self.current_summary.is_some() && !self.task_state.is_pending()
    }

    /// Moves the message into `TaskState::Pending`. Returns `None` if the message is already
    /// pending or too short. `display_text` is left untouched.
    pub fn begin_summarization(&self, task_id: TaskId, min_length: usize) -> Option<Message> {
        if self.task_state.is_pending() || !self.is_eligible_for_summary(min_length) {
            return None;
        }

        Some(Message {
            task_state: TaskState::Pending { task_id },
            ..self.clone()
        })
    }

    /// Stores `summary` and displays it. Returns `None` unless the message is pending with
    /// `task_id`.
    pub fn complete_summarization(&self, task_id: TaskId, summary: String) -> Option<Message> {
        if self.task_state != (TaskState::Pending { task_id }) {
            return None;
        }

        Some(Message {
            display_text: summary.clone(),
            current_summary: Some(summary),
            showing_summary: true,
            task_state: TaskState::Done,
            ..self.clone()
        })
    }

    /// Rolls the message back to `TaskState::Idle`, leaving texts and summary as they were
    /// before the task started. Returns `None` unless the message is pending with `task_id`.
    pub fn fail_summarization(&self, task_id: TaskId) -> Option<Message> {
        if self.task_state != (TaskState::Pending { task_id }) {
            return None;
        }

        Some(Message {
            task_state: TaskState::Idle,
            ..self.clone()
        })
    }
}
