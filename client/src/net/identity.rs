//! Seam between the UI and the external identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never talk HTTP directly. They hold an `Rc<dyn IdentityService>`
//! (see [`IdentityHandle`]) and observe session changes through
//! [`SessionFeed`]. `net::api::HttpIdentityService` is the production
//! implementation; tests substitute an in-memory fake.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::rc::Rc;

use async_trait::async_trait;
use leptos::prelude::{LocalStorage, StoredValue};

use super::types::{AttemptResult, ProviderError, SessionId, User};
use crate::state::session::SessionFeed;

/// Errors surfaced by an [`IdentityService`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The provider answered with a non-success status and (possibly empty)
    /// structured errors.
    #[error("identity provider rejected request: status {status}")]
    Rejected { status: u16, errors: Vec<ProviderError> },

    /// The request never produced a response.
    #[error("identity request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("identity response parse failed: {0}")]
    Parse(String),

    /// No provider is reachable from this build (server-side rendering).
    #[error("identity service unavailable")]
    Unavailable,
}

impl IdentityError {
    /// Structured provider errors carried by this failure, if any.
    pub fn provider_messages(&self) -> &[ProviderError] {
        match self {
            Self::Rejected { errors, .. } => errors,
            Self::Transport(_) | Self::Parse(_) | Self::Unavailable => &[],
        }
    }
}

/// Client-side contract of the identity provider.
#[async_trait(?Send)]
pub trait IdentityService {
    /// Start a sign-in attempt for an existing account.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the request fails or the provider
    /// rejects the credentials.
    async fn create_session(&self, identifier: &str, secret: &str) -> Result<AttemptResult, IdentityError>;

    /// Register a new account; a complete attempt also yields a session.
    async fn create_account(&self, username: &str, secret: &str) -> Result<AttemptResult, IdentityError>;

    /// Make `session` the active session for this client and publish it.
    async fn activate_session(&self, session: &SessionId) -> Result<(), IdentityError>;

    /// End the active session and publish the signed-out snapshot.
    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Load whatever session the provider already has for this client.
    async fn refresh(&self) -> Result<Option<User>, IdentityError>;

    /// Feed of session snapshots, updated by the calls above.
    fn sessions(&self) -> &SessionFeed;

    fn current_user(&self) -> Option<User> {
        self.sessions().snapshot().user
    }
}

/// Thread-local handle to the identity service, `Copy` so it can be captured
/// by reactive closures and provided through context.
pub type IdentityHandle = StoredValue<Rc<dyn IdentityService>, LocalStorage>;
