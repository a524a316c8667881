/// Shared application state
use crate::services::{CredentialService, SessionIssuer};
use staffboard_core::JobStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobStore>,
    pub credentials: Arc<CredentialService>,
    pub sessions: Arc<SessionIssuer>,
    /// Mark session cookies `Secure`
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(
        jobs: Arc<dyn JobStore>,
        credentials: Arc<CredentialService>,
        sessions: Arc<SessionIssuer>,
        secure_cookies: bool,
    ) -> Self {
        Self {
            jobs,
            credentials,
            sessions,
            secure_cookies,
        }
    }
}
