use serde::Deserialize;
use vesselmail_core::error::{MailError, Result};
use vesselmail_core::SecretSource;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    pub client: ClientSection,

    #[serde(default)]
    pub secret: SecretSource,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MailError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.client.validate()?;
        self.secret.validate()?;

        Ok(())
    }
}

/// Who we are and where the server lives.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    #[serde(default = "default_server")]
    pub server: String,

    pub name: String,

    pub vessel: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ClientSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.server.starts_with("http://") || self.server.starts_with("https://")) {
            return Err(MailError::Config(
                "client.server must be an http:// or https:// url".into(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(MailError::Config("client.name must not be empty".into()));
        }
        if self.vessel.trim().is_empty() {
            return Err(MailError::Config("client.vessel must not be empty".into()));
        }
        if !(100..=120000).contains(&self.timeout_ms) {
            return Err(MailError::Config(
                "client.timeout_ms must be between 100 and 120000".into(),
            ));
        }
        Ok(())
    }
}

fn default_server() -> String {
    "http://localhost:8080".into()
}
fn default_timeout_ms() -> u64 {
    5000
}
