//! Out-of-band shared HMAC secret.

use std::fmt;

use serde::Deserialize;
use zeroize::Zeroizing;

use crate::error::{MailError, Result};

/// Non-empty shared secret. Wiped on drop and never printed.
#[derive(Clone)]
pub struct SharedSecret(Zeroizing<Vec<u8>>);

impl SharedSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(MailError::Config("shared secret must not be empty".into()));
        }
        Ok(Self(Zeroizing::new(bytes)))
    }

    /// Read the secret from an environment variable.
    pub fn from_env(var: &str) -> Result<Self> {
        let raw = std::env::var(var)
            .map_err(|e| MailError::Config(format!("unable to read {var}: {e}")))?;
        Self::new(raw.into_bytes())
            .map_err(|_| MailError::Config(format!("{var} must not be empty")))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

/// Config section naming where the secret comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretSource {
    #[serde(default = "default_secret_env")]
    pub env: String,
}

impl Default for SecretSource {
    fn default() -> Self {
        Self {
            env: default_secret_env(),
        }
    }
}

impl SecretSource {
    pub fn validate(&self) -> Result<()> {
        if self.env.trim().is_empty() {
            return Err(MailError::Config("secret.env must not be empty".into()));
        }
        Ok(())
    }

    pub fn load(&self) -> Result<SharedSecret> {
        SharedSecret::from_env(&self.env)
    }
}

fn default_secret_env() -> String {
    "HMAC_SECRET".into()
}
