//! A transport that logs delivery requests instead of sending them.
//!
//! This serves as a basic implementation to validate the dispatch pipeline
//! and can be used for debugging purposes. Real delivery belongs to an
//! out-of-process transport.

use crate::core::{NotificationParams, NotificationTarget, NotificationTransport};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// A [`NotificationTransport`] that logs every delivery request.
#[derive(Debug, Default, Clone)]
pub struct LoggingTransport;

#[async_trait]
impl NotificationTransport for LoggingTransport {
    async fn notify_subscribers(
        &self,
        environment_id: &str,
        topic_name: &str,
        params: &NotificationParams,
        target: &NotificationTarget,
    ) -> Result<()> {
        info!(
            environment_id,
            topic_name,
            category = target.category.as_str(),
            variables = ?params.variables(),
            "Would notify subscribers"
        );
        Ok(())
    }
}
