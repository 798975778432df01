use std::time::Duration;

use async_trait::async_trait;

use vesselmail_core::error::{MailError, Result};
use vesselmail_core::protocol::{HealthCheck, HEALTH_PATH, SEND_MESSAGE_PATH};
use vesselmail_core::PackagedMessage;

use super::Transport;

/// JSON-over-HTTP transport against a vesselmail gateway.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vesselmail-client/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| MailError::Config(format!("http client build failed: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn status_error(status: reqwest::StatusCode, what: &str) -> MailError {
    MailError::Transport {
        status: Some(status.as_u16()),
        reason: format!("{what} returned {status}"),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn health(&self) -> Result<HealthCheck> {
        let res = self
            .client
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| MailError::transport(format!("health request failed: {e}")))?;

        if !res.status().is_success() {
            return Err(status_error(res.status(), "health"));
        }

        res.json::<HealthCheck>()
            .await
            .map_err(|e| MailError::transport(format!("health body undecodable: {e}")))
    }

    async fn deliver(&self, msg: &PackagedMessage) -> Result<()> {
        let res = self
            .client
            .post(self.url(SEND_MESSAGE_PATH))
            .json(msg)
            .send()
            .await
            .map_err(|e| MailError::transport(format!("send-message request failed: {e}")))?;

        if !res.status().is_success() {
            return Err(status_error(res.status(), "send-message"));
        }
        Ok(())
    }
}
