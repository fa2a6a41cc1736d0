// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::messaging::models::TaskId;

pub trait TaskIdProvider: Send + Sync {
    fn new_id(&self) -> TaskId;
}

#[derive(Default)]
pub struct IncrementingTaskIdProvider {
    last_id: AtomicU64,
}

impl IncrementingTaskIdProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskIdProvider for IncrementingTaskIdProvider {
    fn new_id(&self) -> TaskId {
        TaskId::new(self.last_id.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
