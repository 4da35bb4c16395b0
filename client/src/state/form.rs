//! Sign-in / sign-up form state.
//!
//! DESIGN
//! ======
//! All transitions are plain `&mut self` methods so the page only wires
//! signals to them. `submitting` is set by [`FormState::begin_submit`] and
//! cleared by [`FormState::finish`] for every [`SubmitOutcome`].

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::SessionId;

/// Shown when the provider wants a verification step this panel lacks.
pub const INCOMPLETE_MESSAGE: &str = "Additional verification is required, which this app does not support yet.";

/// Which flow the form submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Snapshot of the fields handed to the identity service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub mode: AuthMode,
    pub identifier: String,
    pub secret: String,
}

/// Result of trying to start a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStart {
    /// A submission is already in flight; nothing changed.
    Busy,
    /// Fields failed the form constraints; the error is set.
    Invalid,
    Ready(SubmitRequest),
}

/// How a dispatched submission resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session was created and activated.
    Activated(SessionId),
    /// The provider needs another step; nothing was activated.
    Incomplete,
    /// Display-ready error message.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub identifier: String,
    pub secret: String,
    pub mode: AuthMode,
    pub submitting: bool,
    pub error: Option<String>,
}

impl FormState {
    /// Switch between sign-in and sign-up, clearing fields and error.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.clear_fields();
    }

    /// Clear fields and error but keep the mode.
    pub fn clear_fields(&mut self) {
        self.identifier.clear();
        self.secret.clear();
        self.error = None;
    }

    pub fn set_identifier(&mut self, value: String) {
        self.identifier = value;
    }

    pub fn set_secret(&mut self, value: String) {
        self.secret = value;
    }

    /// Check preconditions and mark the form as submitting.
    pub fn begin_submit(&mut self, min_secret_len: usize) -> SubmitStart {
        if self.submitting {
            return SubmitStart::Busy;
        }
        if let Err(message) = validate_credentials(&self.identifier, &self.secret, min_secret_len) {
            self.error = Some(message);
            return SubmitStart::Invalid;
        }
        self.error = None;
        self.submitting = true;
        SubmitStart::Ready(SubmitRequest {
            mode: self.mode,
            identifier: self.identifier.clone(),
            secret: self.secret.clone(),
        })
    }

    /// Record the outcome of the in-flight submission.
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        self.submitting = false;
        self.error = match outcome {
            SubmitOutcome::Activated(_) => None,
            SubmitOutcome::Incomplete => Some(INCOMPLETE_MESSAGE.to_owned()),
            SubmitOutcome::Failed(message) => Some(message.clone()),
        };
    }
}

/// Same constraints the HTML form enforces with `required` and `minlength`.
/// Length is counted in UTF-16 code units, as `minlength` counts it.
///
/// # Errors
///
/// Returns the message to show when a field is empty or the secret is short.
pub fn validate_credentials(identifier: &str, secret: &str, min_secret_len: usize) -> Result<(), String> {
    if identifier.is_empty() || secret.is_empty() {
        return Err("Enter both a username and a password.".to_owned());
    }
    if secret.encode_utf16().count() < min_secret_len {
        return Err(format!("Password must be at least {min_secret_len} characters."));
    }
    Ok(())
}
