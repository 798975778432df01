//! Shared application state for the vesselmail gateway.
//!
//! One inbox per process, shared by every request handler. The secret is kept
//! alongside it and handed to the inbox on each call.

use std::sync::Arc;

use vesselmail_core::{Inbox, SharedSecret};

use crate::config::GatewayConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    inbox: Arc<Inbox>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    secret: SharedSecret,
}

impl AppState {
    pub fn new(cfg: GatewayConfig, secret: SharedSecret) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, secret }),
            inbox: Arc::new(Inbox::new()),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn secret(&self) -> &SharedSecret {
        &self.inner.secret
    }

    pub fn inbox(&self) -> Arc<Inbox> {
        Arc::clone(&self.inbox)
    }
}
