use std::sync::Arc;
use std::time::Duration;

use healthbuddy_core::CompletionGateway;

use crate::config::Config;
use crate::page::PageRenderer;
use crate::session::SessionRegistry;

/// Shared application state passed to all handlers
///
/// Sessions are the only mutable part; everything else is built once at
/// startup.
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: CompletionGateway,
    pub sessions: SessionRegistry,
    pub pages: PageRenderer,
}

impl AppState {
    pub fn new(config: Config, gateway: CompletionGateway) -> Result<Self, minijinja::Error> {
        let sessions = SessionRegistry::new(Duration::from_secs(config.session.idle_timeout_secs));
        Ok(Self {
            config: Arc::new(config),
            gateway,
            sessions,
            pages: PageRenderer::new()?,
        })
    }
}
