// parley/parley-core-client
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::Message;

/// Resolves the text to display for the given combination of stored fields.
pub fn displayed_text<'a>(
    original_text: &'a str,
    current_summary: Option<&'a str>,
    showing_summary: bool,
) -> &'a str {
    match current_summary {
        Some(summary) if showing_summary => summary,
        _ => original_text,
    }
}

/// Switches between summary and original text.
///
/// Returns an identical copy if the message has no summary yet or a summarization task is
/// pending, since the displayed text must not change while a task is in flight.
pub fn toggle(message: &Message) -> Message {
    if !message.can_toggle_summary() {
        return message.clone();
    }

    let showing_summary = !message.showing_summary;
    let display_text = displayed_text(
        &message.original_text,
        message.current_summary.as_deref(),
        showing_summary,
    )
    .to_string();

    Message {
        showing_summary,
        display_text,
        ..message.clone()
    }
}
