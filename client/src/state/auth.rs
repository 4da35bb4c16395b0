//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the latest [`SessionSnapshot`] from the identity service into a
//! plain struct the panel keeps in an `RwSignal` for identity-dependent
//! rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{SessionId, User};
use crate::state::session::SessionSnapshot;

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays true until the first snapshot arrives after the initial
/// session refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub session_id: Option<SessionId>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, session_id: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Fold a session snapshot into this state. Returns true when the
    /// authenticated flag flipped.
    pub fn apply_snapshot(&mut self, snapshot: &SessionSnapshot) -> bool {
        let was_authenticated = self.is_authenticated();
        self.user.clone_from(&snapshot.user);
        self.session_id.clone_from(&snapshot.session_id);
        was_authenticated != self.is_authenticated()
    }

    /// The initial refresh settled (with or without a session).
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}
