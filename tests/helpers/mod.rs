#![allow(dead_code)]
pub mod mock_transport;

use topicwatch::core::{
    ClusterRegistry, DomainEvent, EventContext, EventPayload, SchemaMetadata, TopicMetadata,
    TopicType,
};

/// Installs a compact tracing subscriber so failing tests show the
/// dispatcher's log output. Safe to call from multiple tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A cluster registry with a fixed production environment id.
pub struct FixedRegistry {
    production_id: String,
}

impl FixedRegistry {
    pub fn new(production_id: &str) -> Self {
        Self {
            production_id: production_id.to_string(),
        }
    }
}

impl ClusterRegistry for FixedRegistry {
    fn production_environment_id(&self) -> String {
        self.production_id.clone()
    }
}

/// Builds a topic lifecycle event originating from `env`.
pub fn topic_event(env: &str, payload: EventPayload) -> DomainEvent {
    DomainEvent {
        context: EventContext::new(env),
        topic: TopicMetadata::new("topic-1", TopicType::Events),
        payload,
    }
}

/// Builds a schema-added event for `topic` originating from `env`.
pub fn schema_event(
    env: &str,
    topic: &str,
    schema_id: &str,
    version: u32,
    change_description: Option<&str>,
) -> DomainEvent {
    DomainEvent {
        context: EventContext::new(env),
        topic: TopicMetadata::new(topic, TopicType::Events),
        payload: EventPayload::SchemaAdded(SchemaMetadata {
            id: schema_id.to_string(),
            topic_name: topic.to_string(),
            schema_version: version,
            json_schema: "{}".to_string(),
            change_description: change_description.map(str::to_string),
        }),
    }
}
