// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::DynAppContext;
use crate::client_builder::{
    ClientBuilder, UndefinedMessageHistoryService, UndefinedSummarizationService,
};
use crate::domain::shared::models::UserId;
use crate::services::ConversationService;
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedMessageHistoryService, UndefinedSummarizationService>
    {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub conversation: ConversationService,
    pub(crate) ctx: DynAppContext,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub fn account_id(&self) -> Option<&UserId> {
        self.ctx.account_id.as_ref()
    }
}
