//! Sender-side facade: identity + secret + outbox.

use std::time::Duration;

use vesselmail_core::error::Result;
use vesselmail_core::{RawMessage, SharedSecret};

use crate::config::ClientConfig;
use crate::outbox::Outbox;
use crate::transport::{HttpTransport, Transport};

pub struct Client<T> {
    name: String,
    vessel: String,
    secret: SharedSecret,
    outbox: Outbox<T>,
}

impl Client<HttpTransport> {
    /// Build an HTTP client from config. The secret is read from the
    /// configured environment variable.
    pub fn from_config(cfg: &ClientConfig) -> Result<Self> {
        let secret = cfg.secret.load()?;
        let transport = HttpTransport::new(
            &cfg.client.server,
            Duration::from_millis(cfg.client.timeout_ms),
        )?;
        Ok(Self::new(
            transport,
            secret,
            cfg.client.name.clone(),
            cfg.client.vessel.clone(),
        ))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(
        transport: T,
        secret: SharedSecret,
        name: impl Into<String>,
        vessel: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vessel: vessel.into(),
            secret,
            outbox: Outbox::new(transport),
        }
    }

    pub fn outbox(&self) -> &Outbox<T> {
        &self.outbox
    }

    /// Sign a message from us and queue it.
    pub fn compose(
        &self,
        to_name: &str,
        to_vessel: &str,
        subject: &str,
        body: &str,
    ) -> Result<()> {
        let raw = RawMessage::new(
            (to_name, to_vessel),
            (self.name.as_str(), self.vessel.as_str()),
            subject,
            body,
        );
        self.outbox.add(&raw, self.secret.as_bytes())
    }

    /// Probe the server now; used on startup before deciding to send.
    pub async fn check_server(&self) -> Result<()> {
        self.outbox.check_liveness().await
    }

    pub async fn send_one(&self) -> Result<()> {
        self.outbox.send_one(self.secret.as_bytes()).await
    }

    pub async fn send_all(&self) -> Result<usize> {
        self.outbox.send_all(self.secret.as_bytes()).await
    }
}
