//! Webhook dispatch.

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::error::DispatchError;
use crate::report::Report;

/// Message sink capability. The production sink is Slack; tests substitute
/// a recording fake.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn dispatch(&self, report: &Report) -> Result<(), DispatchError>;
}

/// Posts the assembled report to a Slack incoming webhook. One POST per
/// invocation, no retry: a rejected payload fails the run.
pub struct SlackNotifier {
    client: Client,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(client: Client, webhook_url: impl Into<String>) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
        }
    }
}

#[async_trait]
impl ReportSink for SlackNotifier {
    async fn dispatch(&self, report: &Report) -> Result<(), DispatchError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(report)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Rejected(status));
        }

        info!(blocks = report.blocks.len(), "report posted to webhook");
        Ok(())
    }
}
