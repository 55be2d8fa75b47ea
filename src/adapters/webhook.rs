use crate::domain::model::{EnquiryRecord, SubmissionReceipt};
use crate::domain::ports::EnquirySink;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Posts enquiries as JSON to the spreadsheet web app.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    endpoint: String,
    client: Client,
}

impl WebhookClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EnquirySink for WebhookClient {
    async fn submit(&self, record: &EnquiryRecord) -> Result<SubmissionReceipt> {
        tracing::debug!("Posting enquiry to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(record)?)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Webhook response status: {}", status);

        // The web app answers with a JSON body even on errors; its `status`
        // field decides the outcome, not the HTTP code.
        let body = response.bytes().await?;
        let receipt: SubmissionReceipt = serde_json::from_slice(&body)?;
        if !status.is_success() {
            tracing::warn!("Webhook returned HTTP {} with status '{}'", status, receipt.status);
        }

        Ok(receipt)
    }
}
