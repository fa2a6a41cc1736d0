// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::messaging::models::{Attachment, MessageId, MessageSeed};
use crate::domain::shared::models::UserId;

/// A message as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MessageRecord {
    #[serde(rename = "_id")]
    pub id: MessageId,
    pub sender_id: UserId,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image: Option<Url>,
    pub created_at: DateTime<Utc>,
}

impl From<MessageRecord> for MessageSeed {
    fn from(record: MessageRecord) -> Self {
        MessageSeed {
            id: record.id,
            sender_id: record.sender_id,
            text: record.text.unwrap_or_default(),
            created_at: record.created_at,
            attachment: record.image.map(Attachment::from),
        }
    }
}
