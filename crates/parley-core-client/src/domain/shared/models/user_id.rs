// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use parley_utils::id_string;

id_string!(
    /// Identifies a participant, either the connected account or a counterpart.
    UserId
);
