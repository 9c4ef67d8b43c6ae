use async_trait::async_trait;
use tracing::info;
use crate::config::NotifierConfig;
use crate::error::Result;
use crate::models::{NotificationPayload, NotificationReceipt};
use crate::utils::time::sleep_with_jitter;

/// Delivers an enquiry to a vendor or the site operators.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, payload: &NotificationPayload) -> Result<NotificationReceipt>;
}

/// Stands in for real email delivery: waits, logs the payload, succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedNotifier {
    delay_ms: u64,
    jitter_ms: u64,
}

impl SimulatedNotifier {
    pub fn new(config: &NotifierConfig) -> Self {
        Self {
            delay_ms: config.delay_ms,
            jitter_ms: config.jitter_ms,
        }
    }
}

#[async_trait]
impl Notifier for SimulatedNotifier {
    async fn send(&self, payload: &NotificationPayload) -> Result<NotificationReceipt> {
        sleep_with_jitter(self.delay_ms, self.jitter_ms).await;

        info!(
            name = %payload.name,
            email = %payload.email,
            phone = %payload.phone,
            event_details = %payload.event_details,
            kind = %payload.kind,
            recipient = ?payload.recipient,
            "Simulated email notification"
        );

        Ok(NotificationReceipt { success: true })
    }
}
