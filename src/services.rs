//! Encapsulation for wiring the notification pipeline.

use crate::{
    config::Config,
    core::{ClusterRegistry, DomainEvent, EventPayload, NotificationTransport},
    dispatcher::NotificationDispatcher,
    types::EventSender,
};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, trace};

/// Sets up the notification pipeline if it is enabled in the configuration.
///
/// Returns a `broadcast::Sender<DomainEvent>` the event source can publish
/// into, or `Ok(None)` when notifications are disabled. The production
/// environment id is read from the registry once, here.
pub fn setup_notification_pipeline(
    config: &Config,
    registry: &dyn ClusterRegistry,
    transport: Arc<dyn NotificationTransport>,
) -> Result<Option<EventSender>> {
    if !config.notifications.enabled {
        return Ok(None);
    }

    let (tx, rx) = broadcast::channel::<DomainEvent>(config.performance.queue_capacity);
    let dispatcher = Arc::new(NotificationDispatcher::new(registry, transport));
    info!("Notification pipeline enabled.");

    tokio::spawn(run_event_loop(rx, dispatcher));
    Ok(Some(tx))
}

/// Consumes events from the channel and hands each one to the dispatcher.
///
/// Every event is handled in its own task so a slow transport call cannot
/// stall the feed or any other in-flight dispatch.
async fn run_event_loop(
    mut rx: broadcast::Receiver<DomainEvent>,
    dispatcher: Arc<NotificationDispatcher>,
) {
    loop {
        match rx.recv().await {
            Ok(event) => {
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move {
                    let result = match &event.payload {
                        EventPayload::TopicDeprecated => {
                            dispatcher.handle_topic_deprecated(&event).await
                        }
                        EventPayload::TopicUndeprecated => {
                            dispatcher.handle_topic_undeprecated(&event).await
                        }
                        EventPayload::SchemaAdded(_) => {
                            dispatcher.handle_topic_schema_added(&event).await
                        }
                        other => {
                            trace!(kind = other.kind(), "No notification mapping for event kind");
                            Ok(())
                        }
                    };
                    if let Err(e) = result {
                        error!(topic = %event.topic.name, error = %e, "Failed to dispatch notification");
                    }
                });
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                error!("Notification pipeline lagged, dropping {} events.", n);
            }
            Err(broadcast::error::RecvError::Closed) => {
                info!("Event channel closed. Shutting down notification pipeline.");
                break;
            }
        }
    }
}
