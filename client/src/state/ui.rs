//! Local view state: which screen the panel shows.
//!
//! DESIGN
//! ======
//! The visible screen is a pure function of the provider-owned authenticated
//! flag, the local `show_profile` flag, and the form mode. Keeping it derived
//! (never stored) is what guarantees a single screen at a time.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::auth::AuthState;
use crate::state::form::{AuthMode, FormState};
use crate::state::session::SessionSnapshot;

/// The four mutually exclusive screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    SignUp,
    Dashboard,
    Profile,
}

impl Screen {
    pub fn resolve(authenticated: bool, show_profile: bool, mode: AuthMode) -> Self {
        match (authenticated, show_profile, mode) {
            (false, _, AuthMode::SignIn) => Self::SignIn,
            (false, _, AuthMode::SignUp) => Self::SignUp,
            (true, false, _) => Self::Dashboard,
            (true, true, _) => Self::Profile,
        }
    }

    /// Whether this screen is one of the login form variants.
    pub fn is_login_form(self) -> bool {
        matches!(self, Self::SignIn | Self::SignUp)
    }
}

/// Local presentation flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub show_profile: bool,
}

impl UiState {
    pub fn open_profile(&mut self) {
        self.show_profile = true;
    }

    pub fn close_profile(&mut self) {
        self.show_profile = false;
    }

    /// Any sign-in or sign-out lands on the dashboard the next time the user
    /// is authenticated.
    pub fn on_auth_changed(&mut self) {
        self.show_profile = false;
    }
}

/// Fold a session snapshot into the panel's local state.
///
/// When the authenticated flag flips (sign-in or sign-out) the profile flag
/// is reset and the form fields and error are cleared, keeping the mode.
/// Returns whether that edge occurred.
pub fn apply_session(auth: &mut AuthState, ui: &mut UiState, form: &mut FormState, snapshot: &SessionSnapshot) -> bool {
    let changed = auth.apply_snapshot(snapshot);
    if changed {
        ui.on_auth_changed();
        form.clear_fields();
    }
    changed
}
