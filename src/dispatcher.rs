//! Routes topic lifecycle events to the notification transport.
//!
//! Each handler call is a stateless, one-shot transaction: classify the
//! event's environment, build the template variables, issue a single
//! transport call. There is no retry or queued state across calls, and
//! concurrent dispatches never affect each other.

use crate::{
    classifier::EnvironmentClassifier,
    core::{
        ClusterRegistry, DomainEvent, NotificationCategory, NotificationParams,
        NotificationTarget, NotificationTransport,
    },
    params::build_params,
};
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// Errors surfaced by the dispatch path.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The event kind has no notification mapping.
    #[error("unsupported event kind: {0}")]
    UnsupportedEventKind(&'static str),

    /// Opaque failure reported by the notification transport.
    #[error("notification transport failed")]
    Transport(#[source] anyhow::Error),
}

/// The notification event dispatcher.
///
/// Holds only read-only shared state (the cached production environment id
/// and the transport handle), so handlers may be called concurrently from
/// any number of event sources without locking.
pub struct NotificationDispatcher {
    classifier: EnvironmentClassifier,
    transport: Arc<dyn NotificationTransport>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher.
    ///
    /// The production environment id is resolved from the registry here,
    /// once; handlers only compare against the cached id.
    pub fn new(registry: &dyn ClusterRegistry, transport: Arc<dyn NotificationTransport>) -> Self {
        Self {
            classifier: EnvironmentClassifier::new(registry.production_environment_id()),
            transport,
        }
    }

    /// Handles a topic deprecation event.
    pub async fn handle_topic_deprecated(&self, event: &DomainEvent) -> Result<(), NotifyError> {
        self.route(event, NotificationCategory::TopicDeprecated)
            .await
    }

    /// Handles a topic un-deprecation event.
    pub async fn handle_topic_undeprecated(&self, event: &DomainEvent) -> Result<(), NotifyError> {
        self.route(event, NotificationCategory::TopicUndeprecated)
            .await
    }

    /// Handles a new schema version registered for a topic.
    pub async fn handle_topic_schema_added(&self, event: &DomainEvent) -> Result<(), NotifyError> {
        self.route(event, NotificationCategory::SchemaChanged)
            .await
    }

    /// Classifies, builds parameters, and issues the dispatch for one event.
    ///
    /// Ineligible events complete immediately without touching the builder
    /// or the transport.
    #[instrument(skip(self, event), fields(
        topic = %event.topic.name,
        environment = %event.context.environment_id,
        category = category.as_str()
    ))]
    async fn route(
        &self,
        event: &DomainEvent,
        category: NotificationCategory,
    ) -> Result<(), NotifyError> {
        if !self.classifier.is_production_eligible(event) {
            counter!("events_filtered_total").increment(1);
            trace!("Event did not originate from production, skipping notification");
            return Ok(());
        }

        let params = build_params(event)?;
        let target = NotificationTarget {
            topic_name: event.topic.name.clone(),
            category,
        };

        self.dispatch(&event.context.environment_id, &event.topic.name, &params, &target)
            .await
    }

    /// Issues a single transport call and surfaces its result verbatim.
    ///
    /// No retry, no batching; a failed dispatch affects only the one event
    /// being processed.
    async fn dispatch(
        &self,
        environment_id: &str,
        topic_name: &str,
        params: &NotificationParams,
        target: &NotificationTarget,
    ) -> Result<(), NotifyError> {
        debug!("Dispatching notification to subscribers");
        match self
            .transport
            .notify_subscribers(environment_id, topic_name, params, target)
            .await
        {
            Ok(()) => {
                counter!("notifications_dispatched_total").increment(1);
                Ok(())
            }
            Err(e) => {
                counter!("notifications_failed_total").increment(1);
                Err(NotifyError::Transport(e))
            }
        }
    }
}
