//! Outbound delivery of budget alerts to the automation webhook.

use std::time::Duration;

use hormiga_core::alerts::{BudgetAlert, BudgetAlertNotifier};
use reqwest::Client;

/// Posts each alert as JSON in a detached task. Failures are logged and not
/// retried.
#[derive(Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: String,
    token: Option<String>,
}

impl WebhookNotifier {
    pub fn new(url: String, token: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, url, token })
    }

    async fn deliver(self, alert: BudgetAlert) {
        let mut request = self.client.post(&self.url).json(&alert);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        match request.send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(
                    "Delivered {:?} alert for user {}",
                    alert.alert_type,
                    alert.user_id
                );
            }
            Ok(response) => {
                tracing::warn!(
                    "Alert webhook answered {} for user {}",
                    response.status(),
                    alert.user_id
                );
            }
            Err(e) => {
                tracing::warn!("Alert webhook failed for user {}: {}", alert.user_id, e);
            }
        }
    }
}

impl BudgetAlertNotifier for WebhookNotifier {
    fn notify(&self, alert: BudgetAlert) {
        let notifier = self.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(notifier.deliver(alert));
            }
            Err(_) => tracing::warn!(
                "No async runtime available; dropping alert for user {}",
                alert.user_id
            ),
        }
    }
}
