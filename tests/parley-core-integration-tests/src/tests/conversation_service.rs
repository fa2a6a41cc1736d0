// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use futures::stream;
use futures::StreamExt;
use futures::{future, FutureExt};
use mockall::predicate;
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

use parley_core_client::domain::messaging::models::{LoadError, Message, MessageSeed, TaskId};
use parley_core_client::domain::messaging::repos::MessageStore;
use parley_core_client::domain::shared::models::UserId;
use parley_core_client::dtos::{MessageView, TaskStatus};
use parley_core_client::infra::messaging::BroadcastConversationStream;
use parley_core_client::services::ConversationService;
use parley_core_client::test::{mock_data, MessageBuilder, MockAppDependencies};
use parley_core_client::ClientEvent;

use super::helpers::wait_until;

fn texts(messages: &[MessageView]) -> Vec<String> {
    messages
        .iter()
        .map(|message| message.display_text.clone())
        .collect()
}

fn summarized(idx: u32, text: &str, summary: &str) -> Message {
    MessageBuilder::new_with_index(idx)
        .set_text(text)
        .build_message()
        .begin_summarization(TaskId::new(1), 5)
        .and_then(|message| message.complete_summarization(TaskId::new(1), summary.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_select_counterpart_loads_history() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.conversation_stream
        .expect_subscribe()
        .once()
        .with(predicate::eq(mock_data::counterpart_id()))
        .return_once(|_| Ok(stream::pending().boxed()));

    deps.conversation_stream
        .expect_unsubscribe()
        .once()
        .with(predicate::eq(mock_data::counterpart_id()))
        .return_const(());

    deps.message_history_service
        .expect_load_messages()
        .once()
        .with(predicate::eq(mock_data::counterpart_id()))
        .return_once(|_| {
            Box::pin(async {
                Ok(vec![
                    MessageBuilder::new_with_index(1).build_seed(),
                    MessageBuilder::new_with_index(2)
                        .set_sender(mock_data::account_id())
                        .build_seed(),
                ])
            })
        });

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::ConversationLoaded {
            counterpart_id: mock_data::counterpart_id(),
        }))
        .return_const(());

    let service = ConversationService::from(&deps.into_deps());
    service.select_counterpart(&mock_data::counterpart_id()).await?;

    let messages = service.messages();
    assert_eq!(texts(&messages), vec!["Message 1", "Message 2"]);
    assert_eq!(
        messages
            .iter()
            .map(|message| message.is_from_self)
            .collect::<Vec<_>>(),
        vec![false, true]
    );
    assert_eq!(service.counterpart_id(), Some(mock_data::counterpart_id()));
    assert!(!service.is_loading());

    Ok(())
}

#[tokio::test]
async fn test_load_failure_releases_subscription() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.message_history_service
        .expect_load_messages()
        .once()
        .return_once(|_| Box::pin(async { Err(anyhow!("Connection refused")) }));

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::ConversationLoadFailed {
            counterpart_id: mock_data::counterpart_id(),
        }))
        .return_const(());

    let conversation_stream = Arc::new(BroadcastConversationStream::new());
    let mut deps = deps.into_deps();
    deps.conversation_stream = conversation_stream.clone();

    let service = ConversationService::from(&deps);
    let result = service.select_counterpart(&mock_data::counterpart_id()).await;

    assert!(matches!(result, Err(LoadError::Fetch { .. })));
    assert!(!conversation_stream.is_subscribed(&mock_data::counterpart_id()));
    assert!(service.messages().is_empty());
    assert_eq!(service.counterpart_id(), Some(mock_data::counterpart_id()));
    assert!(!service.is_loading());

    Ok(())
}

#[tokio::test]
async fn test_cancelled_load_ends_loading() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let mut seq = mockall::Sequence::new();

    deps.message_history_service
        .expect_load_messages()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_| Box::pin(future::pending::<Result<Vec<MessageSeed>>>()));
    deps.message_history_service
        .expect_load_messages()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_| {
            Box::pin(async { Ok(vec![MessageBuilder::new_with_index(1).build_seed()]) })
        });
    deps.message_history_service
        .expect_load_messages()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_| Box::pin(future::pending::<Result<Vec<MessageSeed>>>()));

    // Cancelled loads don't report anything.
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::ConversationLoaded {
            counterpart_id: mock_data::counterpart_id(),
        }))
        .return_const(());

    let conversation_stream = Arc::new(BroadcastConversationStream::new());
    let mut deps = deps.into_deps();
    deps.conversation_stream = conversation_stream.clone();

    let service = ConversationService::from(&deps);
    let id = mock_data::counterpart_id();

    assert!(service.select_counterpart(&id).now_or_never().is_none());
    assert!(!service.is_loading());
    assert!(!conversation_stream.is_subscribed(&id));
    assert_eq!(service.counterpart_id(), Some(id.clone()));

    service.select_counterpart(&id).await?;
    assert!(conversation_stream.is_subscribed(&id));

    assert!(service.reload().now_or_never().is_none());
    assert!(!service.is_loading());
    assert_eq!(texts(&service.messages()), vec!["Message 1"]);
    assert!(conversation_stream.is_subscribed(&id));

    Ok(())
}

#[tokio::test]
async fn test_subscribe_failure_skips_history() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.conversation_stream
        .expect_subscribe()
        .once()
        .return_once(|_| Err(anyhow!("Socket closed")));

    deps.message_history_service.expect_load_messages().never();

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::ConversationLoadFailed {
            counterpart_id: mock_data::counterpart_id(),
        }))
        .return_const(());

    let service = ConversationService::from(&deps.into_deps());
    let result = service.select_counterpart(&mock_data::counterpart_id()).await;

    assert!(matches!(result, Err(LoadError::Subscribe { .. })));

    Ok(())
}

#[tokio::test]
async fn test_appends_realtime_messages_of_counterpart() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.message_history_service
        .expect_load_messages()
        .once()
        .return_once(|_| {
            Box::pin(async { Ok(vec![MessageBuilder::new_with_index(1).build_seed()]) })
        });

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::ConversationLoaded {
            counterpart_id: mock_data::counterpart_id(),
        }))
        .return_const(());

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::MessagesAppended {
            message_ids: vec![MessageBuilder::id_for_index(2)],
        }))
        .return_const(());

    let conversation_stream = Arc::new(BroadcastConversationStream::new());
    let mut deps = deps.into_deps();
    deps.conversation_stream = conversation_stream.clone();

    let service = ConversationService::from(&deps);
    service.select_counterpart(&mock_data::counterpart_id()).await?;
    assert!(conversation_stream.is_subscribed(&mock_data::counterpart_id()));

    // From somebody else.
    conversation_stream.publish(
        MessageBuilder::new_with_index(3)
            .set_sender("someone.else".into())
            .build_seed(),
    );
    // Already known from the history.
    conversation_stream.publish(MessageBuilder::new_with_index(1).build_seed());
    conversation_stream.publish(MessageBuilder::new_with_index(2).build_seed());

    assert!(wait_until(|| service.messages().len() == 2).await);
    // Let the pump drain the channel before checking nothing else was appended.
    wait_until(|| false).await;
    assert_eq!(texts(&service.messages()), vec!["Message 1", "Message 2"]);

    service.close();
    assert!(!conversation_stream.is_subscribed(&mock_data::counterpart_id()));
    assert_eq!(service.counterpart_id(), None);
    assert!(service.messages().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_switching_conversation_releases_previous_subscription() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let other_id = UserId::from("someone.else");

    deps.message_history_service
        .expect_load_messages()
        .times(2)
        .returning(|_| Box::pin(async { Ok(vec![]) }));

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(2)
        .return_const(());

    let conversation_stream = Arc::new(BroadcastConversationStream::new());
    let mut deps = deps.into_deps();
    deps.conversation_stream = conversation_stream.clone();

    let service = ConversationService::from(&deps);
    service.select_counterpart(&mock_data::counterpart_id()).await?;
    service.select_counterpart(&other_id).await?;

    assert!(!conversation_stream.is_subscribed(&mock_data::counterpart_id()));
    assert!(conversation_stream.is_subscribed(&other_id));

    // Messages of the previous counterpart don't show up anymore.
    conversation_stream.publish(MessageBuilder::new_with_index(1).build_seed());
    wait_until(|| false).await;
    assert!(service.messages().is_empty());
    assert_eq!(service.counterpart_id(), Some(other_id));

    Ok(())
}

#[tokio::test]
async fn test_discards_history_of_deselected_conversation() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let other_id = UserId::from("someone.else");
    let (tx, rx) = oneshot::channel::<()>();

    deps.message_history_service
        .expect_load_messages()
        .once()
        .with(predicate::eq(mock_data::counterpart_id()))
        .return_once(move |_| {
            Box::pin(async move {
                rx.await?;
                Ok::<_, anyhow::Error>(vec![MessageBuilder::new_with_index(1).build_seed()])
            })
        });

    deps.message_history_service
        .expect_load_messages()
        .once()
        .with(predicate::eq(other_id.clone()))
        .return_once(|_| {
            Box::pin(async {
                Ok(vec![MessageBuilder::new_with_index(2)
                    .set_sender("someone.else".into())
                    .build_seed()])
            })
        });

    // The stale load doesn't report anything.
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::ConversationLoaded {
            counterpart_id: other_id.clone(),
        }))
        .return_const(());

    let conversation_stream = Arc::new(BroadcastConversationStream::new());
    let mut deps = deps.into_deps();
    deps.conversation_stream = conversation_stream.clone();

    let service = ConversationService::from(&deps);
    let first_id = mock_data::counterpart_id();

    let (first, second) = tokio::join!(
        service.select_counterpart(&first_id),
        async {
            assert!(service.is_loading());
            let result = service.select_counterpart(&other_id).await;
            tx.send(()).unwrap();
            result
        }
    );

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(service.counterpart_id(), Some(other_id.clone()));
    assert_eq!(texts(&service.messages()), vec!["Message 2"]);
    assert!(!conversation_stream.is_subscribed(&mock_data::counterpart_id()));
    assert!(conversation_stream.is_subscribed(&other_id));
    assert!(!service.is_loading());

    Ok(())
}

#[tokio::test]
async fn test_reload_failure_keeps_conversation() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let calls = AtomicUsize::new(0);

    deps.conversation_stream
        .expect_subscribe()
        .once()
        .return_once(|_| Ok(stream::pending().boxed()));
    deps.conversation_stream
        .expect_unsubscribe()
        .once()
        .return_const(());

    deps.message_history_service
        .expect_load_messages()
        .times(3)
        .returning(move |_| {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                if call == 1 {
                    return Err(anyhow!("Gateway timeout"));
                }
                Ok((1..=call as u32 + 1)
                    .map(|idx| MessageBuilder::new_with_index(idx).build_seed())
                    .collect::<Vec<_>>())
            })
        });

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(2)
        .with(predicate::eq(ClientEvent::ConversationLoaded {
            counterpart_id: mock_data::counterpart_id(),
        }))
        .return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::ConversationLoadFailed {
            counterpart_id: mock_data::counterpart_id(),
        }))
        .return_const(());

    let service = ConversationService::from(&deps.into_deps());
    service.select_counterpart(&mock_data::counterpart_id()).await?;
    assert_eq!(texts(&service.messages()), vec!["Message 1"]);

    assert!(matches!(
        service.reload().await,
        Err(LoadError::Fetch { .. })
    ));
    assert_eq!(texts(&service.messages()), vec!["Message 1"]);

    service.reload().await?;
    assert_eq!(
        texts(&service.messages()),
        vec!["Message 1", "Message 2", "Message 3"]
    );

    Ok(())
}

#[tokio::test]
async fn test_reload_without_conversation_fails() {
    let deps = MockAppDependencies::default();
    let service = ConversationService::from(&deps.into_deps());

    assert!(matches!(
        service.reload().await,
        Err(LoadError::NoActiveConversation)
    ));
}

#[tokio::test]
async fn test_reload_keeps_summaries() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let generation = deps
        .message_store
        .reset(Some(mock_data::counterpart_id()));
    deps.message_store.replace(
        generation,
        vec![summarized(1, "Hello, how are you doing today?", "Greeting")],
    )?;

    deps.message_history_service
        .expect_load_messages()
        .once()
        .return_once(|_| {
            Box::pin(async {
                Ok(vec![
                    MessageBuilder::new_with_index(1)
                        .set_text("Hello, how are you doing today?")
                        .build_seed(),
                    MessageBuilder::new_with_index(2).build_seed(),
                ])
            })
        });

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .return_const(());

    let service = ConversationService::from(&deps.into_deps());
    service.reload().await?;

    assert_eq!(texts(&service.messages()), vec!["Greeting", "Message 2"]);

    Ok(())
}

#[tokio::test]
async fn test_toggles_between_summary_and_original() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let id = MessageBuilder::id_for_index(1);

    let generation = deps
        .message_store
        .reset(Some(mock_data::counterpart_id()));
    deps.message_store.replace(
        generation,
        vec![
            summarized(1, "Hello, how are you doing today?", "Greeting"),
            MessageBuilder::new_with_index(2)
                .set_text("Not summarized yet")
                .build_message(),
        ],
    )?;

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(2)
        .with(predicate::eq(ClientEvent::MessagesUpdated {
            message_ids: vec![id.clone()],
        }))
        .return_const(());

    let service = ConversationService::from(&deps.into_deps());

    let message = service.toggle_summary(&id).unwrap();
    assert_eq!(message.display_text, "Hello, how are you doing today?");
    assert!(!message.is_showing_summary);
    assert_eq!(message.task_status, TaskStatus::Done);

    let message = service.toggle_summary(&id).unwrap();
    assert_eq!(message.display_text, "Greeting");
    assert!(message.is_showing_summary);

    assert!(service
        .toggle_summary(&MessageBuilder::id_for_index(2))
        .is_none());
    assert!(service.toggle_summary(&"unknown".into()).is_none());

    Ok(())
}

#[tokio::test]
async fn test_message_view_reflects_task_state() -> Result<()> {
    let deps = MockAppDependencies::default();

    let generation = deps
        .message_store
        .reset(Some(mock_data::counterpart_id()));
    deps.message_store.replace(
        generation,
        vec![
            MessageBuilder::new_with_index(1).set_text("Hi").build_message(),
            MessageBuilder::new_with_index(2)
                .set_text("Long enough to summarize")
                .build_message()
                .begin_summarization(TaskId::new(1), 5)
                .unwrap(),
            MessageBuilder::new_with_index(3)
                .set_text("Long enough to summarize")
                .build_message(),
        ],
    )?;

    let service = ConversationService::from(&deps.into_deps());
    let messages = service.messages();

    assert_eq!(
        messages
            .iter()
            .map(|m| (m.task_status, m.can_summarize, m.can_toggle_summary))
            .collect::<Vec<_>>(),
        vec![
            (TaskStatus::Idle, false, false),
            (TaskStatus::Pending, false, false),
            (TaskStatus::Idle, true, false),
        ]
    );
    // The text stays in place while the summary is pending.
    assert_eq!(messages[1].display_text, "Long enough to summarize");
    assert_eq!(
        service.message(&MessageBuilder::id_for_index(3)),
        Some(messages[2].clone())
    );

    Ok(())
}
