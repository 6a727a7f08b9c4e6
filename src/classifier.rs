//! Environment eligibility filtering for outward notifications.
//!
//! Only events originating from the production environment trigger
//! notifications to subscribers; events from test or staging clusters are
//! dropped before any parameters are built.

use crate::core::DomainEvent;

/// Decides whether an event is eligible for outward notification.
#[derive(Debug, Clone)]
pub struct EnvironmentClassifier {
    production_environment_id: String,
}

impl EnvironmentClassifier {
    /// Creates a classifier for the given production environment id.
    pub fn new(production_environment_id: String) -> Self {
        Self {
            production_environment_id,
        }
    }

    /// Returns `true` iff the event originated from the production
    /// environment.
    ///
    /// Pure function of the event's environment id and the configured
    /// production id; never fails.
    pub fn is_production_eligible(&self, event: &DomainEvent) -> bool {
        event.context.environment_id == self.production_environment_id
    }
}
