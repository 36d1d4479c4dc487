use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::errors::SubmissionError;
use crate::models::email::EmailMessage;

/// Mail transport seam. The production implementation talks to the mail
/// provider's HTTP API; tests substitute a recording fake.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), SubmissionError>;
}

/// Client for the provider's `POST {base_url}/email` endpoint. One sender
/// identity per process, bearer-token auth, per-request timeout.
pub struct ApiMailer {
    http: Client,
    base_url: String,
    sender: String,
    auth_token: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
}

impl ApiMailer {
    pub fn new(
        base_url: String,
        sender: String,
        auth_token: String,
        timeout: Duration,
    ) -> Result<Self, SubmissionError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmissionError::ConfigError(format!("Mail client build error: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            sender,
            auth_token,
        })
    }
}

#[async_trait]
impl Mailer for ApiMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), SubmissionError> {
        let request = SendEmailRequest {
            from: &self.sender,
            to: &message.to,
            subject: &message.subject,
            html_body: &message.html_body,
        };

        let response = self
            .http
            .post(format!("{}/email", self.base_url))
            .bearer_auth(&self.auth_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| SubmissionError::TransportError(e.to_string()))?;

        response
            .error_for_status()
            .map_err(|e| SubmissionError::TransportError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn send_request_serializes_provider_shape() {
        let request = SendEmailRequest {
            from: "journal@aju.example",
            to: "ana@x.com",
            subject: "Thank You for Your Submission",
            html_body: "<p>Received.</p>",
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "from": "journal@aju.example",
                "to": "ana@x.com",
                "subject": "Thank You for Your Submission",
                "html_body": "<p>Received.</p>",
            })
        );
    }
}
