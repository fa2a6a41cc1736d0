// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, info, warn};

use parley_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynMessageStore, DynSummarizationService,
    DynTaskIdProvider,
};
use crate::domain::messaging::models::{
    MessageId, StaleUpdateError, SummarizationError, SummarizationOutcome, TaskId,
};
use crate::ClientEvent;

/// Drives the summarization task of individual messages.
///
/// A trigger moves the message into `Pending` inside the store, performs exactly one call to the
/// `SummarizationService` and then applies either the summary or a rollback. Since entering
/// `Pending` happens atomically in the store, a second trigger for a pending message is ignored.
/// Dropping the future before the service responded rolls the message back to `Idle`.
#[derive(InjectDependencies)]
pub struct SummarizationTaskManager {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    message_store: DynMessageStore,
    #[inject]
    summarization_service: DynSummarizationService,
    #[inject]
    task_id_provider: DynTaskIdProvider,
}

impl SummarizationTaskManager {
    pub async fn summarize(&self, message_id: &MessageId) -> SummarizationOutcome {
        let task_id = self.task_id_provider.new_id();
        let min_length = self.ctx.config.summary_min_length;

        let Some(pending_message) = self.message_store.update_by_id(
            message_id,
            Box::new(move |message| message.begin_summarization(task_id, min_length)),
        ) else {
            debug!("Not summarizing message {message_id}. It is either unknown, too short or already pending.");
            return SummarizationOutcome::Skipped;
        };

        info!("Summarizing message {message_id} ({task_id})…");
        self.dispatch_message_updated(message_id);

        let pending = PendingSummarization {
            manager: self,
            message_id,
            task_id,
            settled: false,
        };

        let result = self
            .summarization_service
            .summarize(pending_message.display_text())
            .await
            .map_err(SummarizationError::from)
            .and_then(|summary| {
                if summary.trim().is_empty() {
                    return Err(SummarizationError::MalformedResponse(
                        "The summary is empty.".to_string(),
                    ));
                }
                Ok(summary)
            });

        pending.settle(result)
    }
}

/// Rolls the message back to `Idle` if the summarization future is dropped before the service
/// responded.
struct PendingSummarization<'a> {
    manager: &'a SummarizationTaskManager,
    message_id: &'a MessageId,
    task_id: TaskId,
    settled: bool,
}

impl PendingSummarization<'_> {
    fn settle(mut self, result: Result<String, SummarizationError>) -> SummarizationOutcome {
        self.settled = true;
        match result {
            Ok(summary) => self.manager.complete(self.message_id, self.task_id, summary),
            Err(error) => self.manager.fail(self.message_id, self.task_id, error),
        }
    }
}

impl Drop for PendingSummarization<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.manager.cancel(self.message_id, self.task_id);
        }
    }
}

impl SummarizationTaskManager {
    fn complete(
        &self,
        message_id: &MessageId,
        task_id: TaskId,
        summary: String,
    ) -> SummarizationOutcome {
        let stored_summary = summary.clone();
        let updated = self.message_store.update_by_id(
            message_id,
            Box::new(move |message| message.complete_summarization(task_id, stored_summary)),
        );

        if updated.is_none() {
            debug!("Dropping summary for message {message_id} ({task_id}). The message is gone.");
            return SummarizationOutcome::Discarded(StaleUpdateError);
        }

        info!("Summarized message {message_id} ({task_id}).");
        self.dispatch_message_updated(message_id);
        SummarizationOutcome::Completed { summary }
    }

    fn fail(
        &self,
        message_id: &MessageId,
        task_id: TaskId,
        error: SummarizationError,
    ) -> SummarizationOutcome {
        warn!("Failed to summarize message {message_id} ({task_id}). {error}");

        let updated = self.message_store.update_by_id(
            message_id,
            Box::new(move |message| message.fail_summarization(task_id)),
        );

        if updated.is_none() {
            debug!("Dropping rollback for message {message_id} ({task_id}). The message is gone.");
            return SummarizationOutcome::Discarded(StaleUpdateError);
        }

        self.dispatch_message_updated(message_id);
        SummarizationOutcome::Failed(error)
    }

    fn cancel(&self, message_id: &MessageId, task_id: TaskId) {
        let updated = self.message_store.update_by_id(
            message_id,
            Box::new(move |message| message.fail_summarization(task_id)),
        );

        if updated.is_none() {
            return;
        }

        info!("Cancelled summarization of message {message_id} ({task_id}).");
        self.dispatch_message_updated(message_id);
    }

    fn dispatch_message_updated(&self, message_id: &MessageId) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::MessagesUpdated {
                message_ids: vec![message_id.clone()],
            });
    }
}
