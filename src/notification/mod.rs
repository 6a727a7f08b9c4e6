//! Transport-side plumbing for notification delivery.
//!
//! The dispatcher never renders message bodies or resolves subscribers;
//! both belong to the [`NotificationTransport`](crate::core::NotificationTransport)
//! implementation behind the trait. This module hosts the implementations
//! that ship with the crate.
pub mod logging_transport;
