// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use app::{dtos, services};
pub use client::{Client, ClientDelegate, ClientInner};
pub use client_builder::{
    ClientBuilder, UndefinedMessageHistoryService, UndefinedSummarizationService,
};
pub use client_event::ClientEvent;
pub use domain::messaging::models::{LoadError, StaleUpdateError, SummarizationError};
pub use domain::messaging::services::{
    ConversationStream, MessageHistoryService, MessageSeedStream, SummarizationService,
};
pub use infra::messaging::{
    BroadcastConversationStream, HttpConfig, HttpMessageHistoryService, HttpSummarizationService,
};


pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;
