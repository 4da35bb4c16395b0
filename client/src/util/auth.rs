//! Form submission against the identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only boundary where identity errors are caught. Everything the
//! provider reports, from transport failures to rejected credentials, leaves
//! here as a [`SubmitOutcome`] the form can display.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::identity::{IdentityError, IdentityService};
use crate::net::types::AttemptStatus;
use crate::state::form::{AuthMode, SubmitOutcome, SubmitRequest};

/// Shown when the provider gave no usable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// First non-empty provider message, or the generic fallback.
pub fn display_message(err: &IdentityError) -> String {
    err.provider_messages()
        .iter()
        .map(|e| e.message.trim())
        .find(|m| !m.is_empty())
        .map_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned(), str::to_owned)
}

/// Create a session or account for `request`, then activate the session.
pub async fn submit_credentials(service: &dyn IdentityService, request: &SubmitRequest) -> SubmitOutcome {
    match try_submit(service, request).await {
        Ok(outcome) => outcome,
        Err(err) => {
            log::error!("{:?} submission failed: {err}", request.mode);
            SubmitOutcome::Failed(display_message(&err))
        }
    }
}

async fn try_submit(service: &dyn IdentityService, request: &SubmitRequest) -> Result<SubmitOutcome, IdentityError> {
    let attempt = match request.mode {
        AuthMode::SignIn => service.create_session(&request.identifier, &request.secret).await?,
        AuthMode::SignUp => service.create_account(&request.identifier, &request.secret).await?,
    };

    if attempt.status == AttemptStatus::NeedsMoreInfo {
        log::warn!("{:?} attempt needs an unsupported verification step", request.mode);
        return Ok(SubmitOutcome::Incomplete);
    }

    let Some(session) = attempt.session_id else {
        log::error!("{:?} attempt completed without a session id", request.mode);
        return Ok(SubmitOutcome::Failed(FALLBACK_ERROR_MESSAGE.to_owned()));
    };

    service.activate_session(&session).await?;
    log::info!("activated session {session}");
    Ok(SubmitOutcome::Activated(session))
}

/// Sign out, logging instead of surfacing failures.
pub async fn sign_out(service: &dyn IdentityService) {
    match service.sign_out().await {
        Ok(()) => log::info!("signed out"),
        Err(err) => log::error!("sign out failed: {err}"),
    }
}
