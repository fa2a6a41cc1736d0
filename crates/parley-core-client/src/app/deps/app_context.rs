// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Messages whose displayed text has this many characters or fewer can't be summarized.
    pub summary_min_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            summary_min_length: 5,
        }
    }
}

pub struct AppContext {
    /// The signed-in user. Used to tell own messages apart from the counterpart's.
    pub account_id: Option<UserId>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(account_id: Option<UserId>, config: AppConfig) -> Self {
        Self { account_id, config }
    }

    pub fn is_own_message(&self, sender_id: &UserId) -> bool {
        self.account_id.as_ref() == Some(sender_id)
    }
}
