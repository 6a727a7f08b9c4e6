/// TopicWatch - notification dispatcher for topic lifecycle events
///
/// This library converts domain events emitted by a multi-cluster
/// topic-management subsystem (deprecation, un-deprecation, new schema
/// versions) into asynchronous notification deliveries to subscribers.
pub mod notification;

pub mod classifier;
pub mod config;
pub mod core;
pub mod dispatcher;
pub mod params;
pub mod services;
pub mod types;

// Re-export core types for convenience
pub use crate::core::*;
pub use crate::dispatcher::{NotificationDispatcher, NotifyError};
