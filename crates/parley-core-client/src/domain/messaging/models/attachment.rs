// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use url::Url;

/// An opaque media reference sent along with a message. The core never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub url: Url,
}

impl From<Url> for Attachment {
    fn from(url: Url) -> Self {
        Attachment { url }
    }
}
