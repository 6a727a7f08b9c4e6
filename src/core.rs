//! Core domain types and service traits for TopicWatch
//!
//! This module defines the fundamental data structures and trait contracts
//! that govern component interactions throughout the dispatcher.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Identifies the cluster/environment an event originated from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventContext {
    /// Opaque identifier of the originating environment (e.g. "devtest", "prod").
    pub environment_id: String,
    /// When the upstream service emitted the event.
    pub occurred_at: DateTime<Utc>,
}

impl EventContext {
    /// Creates a context for an event emitted now in the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// The topic taxonomy of the upstream messaging subsystem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TopicType {
    Events,
    Data,
    Commands,
    Internal,
}

/// Metadata describing a managed topic at the time of the event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicMetadata {
    /// The topic name, unique within an environment.
    pub name: String,
    /// The topic's place in the upstream taxonomy.
    pub topic_type: TopicType,
    /// Free-text reason attached to a deprecation, if one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_text: Option<String>,
    /// Planned end-of-life date for a deprecated topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eol_date: Option<NaiveDate>,
}

impl TopicMetadata {
    /// Creates metadata for a topic with no deprecation state.
    pub fn new(name: impl Into<String>, topic_type: TopicType) -> Self {
        Self {
            name: name.into(),
            topic_type,
            deprecation_text: None,
            eol_date: None,
        }
    }
}

/// Metadata describing one schema version registered for a topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaMetadata {
    /// The schema registry id.
    pub id: String,
    /// The topic this schema version belongs to.
    pub topic_name: String,
    /// Version number, increasing per topic.
    pub schema_version: u32,
    /// The JSON schema body.
    pub json_schema: String,
    /// Human-supplied description of what changed in this version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_description: Option<String>,
}

/// The event-specific payload carried by a [`DomainEvent`].
///
/// The upstream service emits a wider family of events than the dispatcher
/// notifies for; kinds without a notification mapping are rejected by the
/// parameter builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EventPayload {
    TopicCreated,
    TopicDeleted,
    TopicDeprecated,
    TopicUndeprecated,
    SchemaAdded(SchemaMetadata),
}

impl EventPayload {
    /// A stable name for the payload kind, used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            EventPayload::TopicCreated => "topic-created",
            EventPayload::TopicDeleted => "topic-deleted",
            EventPayload::TopicDeprecated => "topic-deprecated",
            EventPayload::TopicUndeprecated => "topic-undeprecated",
            EventPayload::SchemaAdded(_) => "schema-added",
        }
    }
}

/// An immutable record of something that happened to a topic.
///
/// Constructed by the upstream topic service at the moment of a state change
/// and consumed exactly once by the dispatcher; never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainEvent {
    /// Where and when the event originated.
    pub context: EventContext,
    /// The topic the event is about.
    pub topic: TopicMetadata,
    /// The event-specific payload.
    pub payload: EventPayload,
}

/// Template variables for one notification, built per dispatch.
///
/// Values are either plain strings or structured text; rendering them into a
/// message body is the transport's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotificationParams {
    variables: BTreeMap<String, Value>,
}

impl NotificationParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a template variable, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Looks up a template variable by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// All variables, keyed by template name.
    pub fn variables(&self) -> &BTreeMap<String, Value> {
        &self.variables
    }
}

/// The notification category a subscriber registers for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationCategory {
    TopicDeprecated,
    TopicUndeprecated,
    SchemaChanged,
}

impl NotificationCategory {
    /// The stable string form used for subscriber matching.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::TopicDeprecated => "topic-deprecated",
            NotificationCategory::TopicUndeprecated => "topic-undeprecated",
            NotificationCategory::SchemaChanged => "schema-changed",
        }
    }
}

/// Addressing information the transport uses to resolve subscribers.
///
/// Derived per event and discarded after the transport call returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationTarget {
    /// The topic whose subscribers should be notified.
    pub topic_name: String,
    /// The category subscribers must have registered for.
    pub category: NotificationCategory,
}

// =============================================================================
// Service Traits
// =============================================================================

/// Read-only view of the multi-cluster registry.
pub trait ClusterRegistry: Send + Sync {
    /// Returns the identifier of the production environment.
    ///
    /// Read once at dispatcher construction; the hot path only compares
    /// against the cached id.
    fn production_environment_id(&self) -> String;
}

/// Delivers notifications to the subscribers of a topic.
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    /// Resolves the subscribers for `target` and delivers a notification
    /// rendered from `params`.
    ///
    /// # Arguments
    /// * `environment_id` - The environment the triggering event came from
    /// * `topic_name` - The topic whose subscribers are addressed
    /// * `params` - Template variables for the message body
    /// * `target` - Topic name and category used for subscriber matching
    ///
    /// # Returns
    /// * `Ok(())` once delivery has been handed to the underlying channel
    /// * `Err` on transport failure (no subscribers, delivery error, ...)
    async fn notify_subscribers(
        &self,
        environment_id: &str,
        topic_name: &str,
        params: &NotificationParams,
        target: &NotificationTarget,
    ) -> Result<()>;
}
