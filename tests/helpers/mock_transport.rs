#![allow(dead_code)]
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;
use tokio::sync::Notify;
use topicwatch::core::{NotificationParams, NotificationTarget, NotificationTransport};

/// Waits until `count` reaches `target`, or panics after `timeout_duration`.
async fn wait_for(count: &AtomicUsize, notifier: &Notify, target: usize, timeout_duration: Duration) {
    let wait_future = async {
        while count.load(Ordering::SeqCst) < target {
            notifier.notified().await;
        }
    };

    tokio::time::timeout(timeout_duration, wait_future)
        .await
        .expect("Timed out waiting for transport calls");
}

/// A mock transport that counts the deliveries it has received.
#[derive(Clone, Debug)]
pub struct CountingTransport {
    pub count: Arc<AtomicUsize>,
    pub notifier: Arc<Notify>,
}

impl CountingTransport {
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            notifier: Arc::new(Notify::new()),
        }
    }

    pub async fn wait_for_count(&self, target_count: usize, timeout_duration: Duration) {
        wait_for(&self.count, &self.notifier, target_count, timeout_duration).await;
    }
}

#[async_trait]
impl NotificationTransport for CountingTransport {
    async fn notify_subscribers(
        &self,
        _environment_id: &str,
        _topic_name: &str,
        _params: &NotificationParams,
        _target: &NotificationTarget,
    ) -> anyhow::Result<()> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.notifier.notify_one();
        Ok(())
    }
}

/// One recorded delivery request, as the transport saw it.
#[derive(Clone, Debug)]
pub struct DeliveryRecord {
    pub environment_id: String,
    pub topic_name: String,
    pub params: NotificationParams,
    pub target: NotificationTarget,
}

/// A mock transport that records every delivery request it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    deliveries: Arc<Mutex<Vec<DeliveryRecord>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The delivery requests received so far.
    pub fn deliveries(&self) -> Vec<DeliveryRecord> {
        self.deliveries.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationTransport for RecordingTransport {
    async fn notify_subscribers(
        &self,
        environment_id: &str,
        topic_name: &str,
        params: &NotificationParams,
        target: &NotificationTarget,
    ) -> anyhow::Result<()> {
        self.deliveries.lock().unwrap().push(DeliveryRecord {
            environment_id: environment_id.to_string(),
            topic_name: topic_name.to_string(),
            params: params.clone(),
            target: target.clone(),
        });
        Ok(())
    }
}

/// A mock transport whose deliveries never complete.
///
/// Counts each call before parking, so tests can assert that dispatches were
/// issued even though none of them will finish.
#[derive(Clone, Debug)]
pub struct HangingTransport {
    pub issued: Arc<AtomicUsize>,
    pub notifier: Arc<Notify>,
}

impl HangingTransport {
    pub fn new() -> Self {
        Self {
            issued: Arc::new(AtomicUsize::new(0)),
            notifier: Arc::new(Notify::new()),
        }
    }

    pub async fn wait_for_issued(&self, target: usize, timeout_duration: Duration) {
        wait_for(&self.issued, &self.notifier, target, timeout_duration).await;
    }
}

#[async_trait]
impl NotificationTransport for HangingTransport {
    async fn notify_subscribers(
        &self,
        _environment_id: &str,
        _topic_name: &str,
        _params: &NotificationParams,
        _target: &NotificationTarget,
    ) -> anyhow::Result<()> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        self.notifier.notify_one();
        futures::future::pending::<()>().await;
        unreachable!("pending future resolved")
    }
}

/// A mock transport that rejects every delivery.
#[derive(Clone, Debug)]
pub struct FailingTransport {
    pub count: Arc<AtomicUsize>,
    pub notifier: Arc<Notify>,
}

impl FailingTransport {
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            notifier: Arc::new(Notify::new()),
        }
    }

    pub async fn wait_for_count(&self, target_count: usize, timeout_duration: Duration) {
        wait_for(&self.count, &self.notifier, target_count, timeout_duration).await;
    }
}

#[async_trait]
impl NotificationTransport for FailingTransport {
    async fn notify_subscribers(
        &self,
        _environment_id: &str,
        _topic_name: &str,
        _params: &NotificationParams,
        _target: &NotificationTarget,
    ) -> anyhow::Result<()> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.notifier.notify_one();
        Err(anyhow!("delivery rejected by downstream"))
    }
}
