// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::messaging::models::{Attachment, MessageId};
use crate::domain::shared::models::UserId;

/// The minimal set of fields needed to construct a `Message`, as delivered by the history
/// endpoint or the real-time channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSeed {
    pub id: MessageId,
    pub sender_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub attachment: Option<Attachment>,
}
