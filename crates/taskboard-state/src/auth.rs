//! Login session state.
//!
//! A placeholder gate in front of the board: one accepted credential pair, an
//! in-memory flag, and an optional remembered flag in the record store. It
//! does not protect anything and is not meant to.

use serde::Serialize;
use std::sync::Arc;
use taskboard_core::{CredentialConfig, TaskboardError, TaskboardResult};
use taskboard_persistence::KeyValueStore;

/// Record key of the remembered login.
pub const AUTH_KEY: &str = "isAuthenticated";
const REMEMBERED: &str = "true";

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, identifier: &str, secret: &str) -> bool;
}

/// Accepts exactly one identifier/secret pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    identifier: String,
    secret: String,
}

impl StaticCredentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        CredentialConfig::default().into()
    }
}

impl From<CredentialConfig> for StaticCredentials {
    fn from(config: CredentialConfig) -> Self {
        Self::new(config.identifier, config.secret)
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, identifier: &str, secret: &str) -> bool {
        identifier == self.identifier && secret == self.secret
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

pub struct AuthSession {
    records: Arc<dyn KeyValueStore>,
    verifier: Arc<dyn CredentialVerifier>,
    state: AuthState,
}

impl AuthSession {
    /// A fresh session is loading until [`AuthSession::resolve`] runs.
    pub fn new(records: Arc<dyn KeyValueStore>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            records,
            verifier,
            state: AuthState {
                is_authenticated: false,
                is_loading: true,
            },
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    /// Read the remembered flag once. Only the exact value `"true"` counts.
    /// An unreadable record leaves the session logged out.
    pub async fn resolve(&mut self) -> AuthState {
        if !self.state.is_loading {
            return self.state;
        }

        match self.records.get(AUTH_KEY).await {
            Ok(Some(value)) if value == REMEMBERED => self.state.is_authenticated = true,
            Ok(_) => {}
            Err(e) => tracing::warn!("Could not read {}: {}", AUTH_KEY, e),
        }
        self.state.is_loading = false;
        tracing::debug!("Session resolved, authenticated: {}", self.state.is_authenticated);
        self.state
    }

    /// `Ok(false)` for a rejected pair, with the session unchanged. With
    /// `remember`, a successful login is also written to the record store.
    pub async fn login(
        &mut self,
        identifier: &str,
        secret: &str,
        remember: bool,
    ) -> TaskboardResult<bool> {
        if !self.verifier.verify(identifier, secret) {
            tracing::debug!("Rejected login for {}", identifier);
            return Ok(false);
        }

        self.state.is_authenticated = true;
        if remember {
            self.records.set(AUTH_KEY, REMEMBERED).await?;
        }
        tracing::info!("Logged in (remembered: {})", remember);
        Ok(true)
    }

    pub async fn logout(&mut self) -> TaskboardResult<()> {
        self.state.is_authenticated = false;
        self.records.remove(AUTH_KEY).await?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Gate for board access.
    pub fn require_authenticated(&self) -> TaskboardResult<()> {
        if self.state.is_loading {
            return Err(TaskboardError::Unauthenticated(
                "Session is still loading".to_string(),
            ));
        }
        if !self.state.is_authenticated {
            return Err(TaskboardError::Unauthenticated(
                "Login required".to_string(),
            ));
        }
        Ok(())
    }
}
