//! Common type aliases used throughout the crate.

use crate::core::DomainEvent;
use tokio::sync::broadcast;

pub type EventSender = broadcast::Sender<DomainEvent>;
