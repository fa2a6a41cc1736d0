// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use parley_utils::id_string;

// The ID assigned by the backend when the message was stored. Stable for the lifetime of the
// message and unique across conversations.
id_string!(MessageId);
