//! Builds the structured template variables for one notification.
//!
//! The builder is pure: a recognized event always produces the same variable
//! set for the same input. Rendering the final message body from these
//! variables belongs to the transport behind
//! [`NotificationTransport`](crate::core::NotificationTransport).

use crate::core::{DomainEvent, EventPayload, NotificationParams};
use crate::dispatcher::NotifyError;

/// Fallback text when a schema version ships without a change description.
const GENERIC_SCHEMA_CHANGE_TEXT: &str = "A new schema version was published for this topic.";

/// Builds the notification variables for `event`.
///
/// Fails with [`NotifyError::UnsupportedEventKind`] for event kinds that have
/// no notification mapping, rather than building an empty variable set.
pub fn build_params(event: &DomainEvent) -> Result<NotificationParams, NotifyError> {
    let mut params = NotificationParams::new();
    params.insert("topic_name", event.topic.name.as_str());

    match &event.payload {
        EventPayload::TopicDeprecated => {
            params.insert("action", "deprecated");
            if let Some(text) = &event.topic.deprecation_text {
                params.insert("deprecation_text", text.as_str());
            }
            if let Some(eol) = &event.topic.eol_date {
                params.insert("eol_date", eol.format("%Y-%m-%d").to_string());
            }
        }
        EventPayload::TopicUndeprecated => {
            params.insert("action", "undeprecated");
        }
        EventPayload::SchemaAdded(schema) => {
            params.insert("schema_id", schema.id.as_str());
            params.insert("schema_version", schema.schema_version);
            // The verbatim description when one was supplied; a schema change
            // without a description must still yield readable text.
            let change_text = match schema.change_description.as_deref() {
                Some(text) if !text.is_empty() => text,
                _ => GENERIC_SCHEMA_CHANGE_TEXT,
            };
            params.insert("change_action_text", change_text);
        }
        other => return Err(NotifyError::UnsupportedEventKind(other.kind())),
    }

    Ok(params)
}
