// clients/webhook.rs
use crate::clients::{http_client, ClientError};
use crate::domain::TourRequest;
use reqwest::blocking::Client;

/// Delivers tour requests to whoever follows up on leads.
pub trait TourSink: Send + Sync {
    fn deliver(&self, request: &TourRequest) -> Result<(), ClientError>;
}

/// Posts tour requests as JSON to a configured webhook. Without a URL the
/// request is only logged.
pub struct TourWebhook {
    client: Client,
    url: Option<String>,
}

impl TourWebhook {
    pub fn new(url: Option<String>) -> Result<Self, ClientError> {
        Ok(Self {
            client: http_client()?,
            url,
        })
    }
}

impl TourSink for TourWebhook {
    fn deliver(&self, request: &TourRequest) -> Result<(), ClientError> {
        let Some(url) = self.url.as_deref() else {
            tracing::info!(
                listing_id = %request.listing_id,
                email = %request.email,
                "tour request received (no webhook configured)"
            );
            return Ok(());
        };

        let resp = self.client.post(url).json(request).send()?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ClientError::Status(format!("Tour webhook error: {status} - {text}")));
        }

        tracing::info!(listing_id = %request.listing_id, "tour request delivered");
        Ok(())
    }
}
