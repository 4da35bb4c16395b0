//! HTTP binding of [`IdentityService`] against the provider's JSON API.
//!
//! Client-side (hydrate): real `fetch` calls via `gloo-net`, cookies included
//! so the provider can keep its own session cookie.
//! Server-side (SSR): every call returns [`IdentityError::Unavailable`] since
//! sessions only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are decoded into [`IdentityError::Rejected`] with the
//! provider's structured error list. Undecodable error bodies keep the status
//! and an empty list so the UI falls back to its generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::identity::{IdentityError, IdentityService};
use super::types::{AttemptResult, SessionId, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::state::session::SessionFeed;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionSnapshot;

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_endpoint(base: &str) -> String {
    format!("{base}/sign_ins")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_endpoint(base: &str) -> String {
    format!("{base}/sign_ups")
}

#[cfg(any(test, feature = "hydrate"))]
fn activate_endpoint(base: &str, session: &SessionId) -> String {
    format!("{base}/sessions/{session}/activate")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_out_endpoint(base: &str) -> String {
    format!("{base}/sign_out")
}

#[cfg(any(test, feature = "hydrate"))]
fn me_endpoint(base: &str) -> String {
    format!("{base}/me")
}

/// Build the error for a non-success response from its status and raw body.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_from_body(status: u16, body: &str) -> IdentityError {
    let errors = serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.errors)
        .unwrap_or_default();
    IdentityError::Rejected { status, errors }
}

/// Whether a `/me` status means "no session" rather than a failure.
#[cfg(any(test, feature = "hydrate"))]
fn is_signed_out_status(status: u16) -> bool {
    matches!(status, 401 | 404)
}

/// [`IdentityService`] backed by the provider's REST API.
pub struct HttpIdentityService {
    base: String,
    feed: SessionFeed,
}

impl HttpIdentityService {
    /// `base` is the provider API root, e.g. `https://id.example.com/v1`.
    pub fn new(base: &str, feed: SessionFeed) -> Self {
        Self { base: base.trim_end_matches('/').to_owned(), feed }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

#[cfg(feature = "hydrate")]
impl HttpIdentityService {
    async fn post_json<T: serde::Serialize>(&self, url: &str, payload: &T) -> Result<gloo_net::http::Response, IdentityError> {
        let resp = gloo_net::http::Request::post(url)
            .credentials(web_sys::RequestCredentials::Include)
            .json(payload)
            .map_err(|e| IdentityError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;
        ensure_ok(resp).await
    }

    async fn post_empty(&self, url: &str) -> Result<gloo_net::http::Response, IdentityError> {
        let resp = gloo_net::http::Request::post(url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;
        ensure_ok(resp).await
    }

    async fn attempt<T: serde::Serialize>(&self, url: &str, payload: &T) -> Result<AttemptResult, IdentityError> {
        let resp = self.post_json(url, payload).await?;
        resp.json::<AttemptResult>()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))
    }

    async fn fetch_me(&self) -> Result<Option<User>, IdentityError> {
        let resp = gloo_net::http::Request::get(&me_endpoint(&self.base))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;
        if is_signed_out_status(resp.status()) {
            return Ok(None);
        }
        let resp = ensure_ok(resp).await?;
        let user = resp.json::<User>().await.map_err(|e| IdentityError::Parse(e.to_string()))?;
        Ok(Some(user))
    }
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, IdentityError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::debug!("identity request to {} failed with {status}", resp.url());
    Err(rejection_from_body(status, &body))
}

#[async_trait(?Send)]
impl IdentityService for HttpIdentityService {
    async fn create_session(&self, identifier: &str, secret: &str) -> Result<AttemptResult, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::SignInRequest { identifier, password: secret };
            self.attempt(&sign_in_endpoint(&self.base), &payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier, secret);
            Err(IdentityError::Unavailable)
        }
    }

    async fn create_account(&self, username: &str, secret: &str) -> Result<AttemptResult, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::SignUpRequest { username, password: secret };
            self.attempt(&sign_up_endpoint(&self.base), &payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, secret);
            Err(IdentityError::Unavailable)
        }
    }

    async fn activate_session(&self, session: &SessionId) -> Result<(), IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_empty(&activate_endpoint(&self.base, session)).await?;
            let user = self.fetch_me().await?.ok_or(IdentityError::Rejected { status: 401, errors: Vec::new() })?;
            self.feed.publish(SessionSnapshot::signed_in(Some(session.clone()), user));
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            Err(IdentityError::Unavailable)
        }
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_empty(&sign_out_endpoint(&self.base)).await?;
            self.feed.publish(SessionSnapshot::signed_out());
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(IdentityError::Unavailable)
        }
    }

    async fn refresh(&self) -> Result<Option<User>, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let user = self.fetch_me().await?;
            let snapshot = match user.clone() {
                Some(user) => SessionSnapshot::signed_in(self.feed.snapshot().session_id, user),
                None => SessionSnapshot::signed_out(),
            };
            self.feed.publish(snapshot);
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(IdentityError::Unavailable)
        }
    }

    fn sessions(&self) -> &SessionFeed {
        &self.feed
    }
}
