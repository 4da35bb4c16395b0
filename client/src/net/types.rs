//! Identity-provider DTOs for the client/provider boundary.
//!
//! DESIGN
//! ======
//! These types mirror the provider's JSON payloads. Decoding is lenient where
//! the provider is known to vary (unknown attempt statuses, float timestamps,
//! missing error lists) so a schema drift degrades to a fallback message
//! instead of a parse failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque reference to a session issued by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Status of a sign-in or sign-up attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    /// The attempt finished and a session was created.
    Complete,
    /// The provider wants another step (second factor, email verification, ...).
    /// Any status string other than `complete` lands here.
    #[serde(other)]
    NeedsMoreInfo,
}

/// Result of `create_session` / `create_account`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptResult {
    pub status: AttemptStatus,
    /// Session created by a completed attempt.
    #[serde(default, alias = "created_session_id")]
    pub session_id: Option<SessionId>,
}

impl AttemptResult {
    pub fn complete(session_id: impl Into<String>) -> Self {
        Self { status: AttemptStatus::Complete, session_id: Some(SessionId(session_id.into())) }
    }

    pub fn needs_more_info() -> Self {
        Self { status: AttemptStatus::NeedsMoreInfo, session_id: None }
    }
}

/// The signed-in user as reported by the identity provider. Read-only here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user identifier.
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Primary email address, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Account creation time in milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_optional_millis")]
    pub created_at: Option<i64>,
    /// Last successful authentication in milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_optional_millis")]
    pub last_sign_in_at: Option<i64>,
}

/// A single structured error reported by the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderError {
    /// Short human-readable message suitable for display.
    #[serde(default)]
    pub message: String,
    /// Machine-readable code (e.g. `"form_password_pwned"`).
    #[serde(default)]
    pub code: Option<String>,
    /// Longer explanation, when the provider sends one.
    #[serde(default)]
    pub long_message: Option<String>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), code: None, long_message: None }
    }
}

/// Error envelope returned with non-success statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ProviderError>,
}

/// `POST /sign_ins` payload.
#[derive(Debug, Serialize)]
pub struct SignInRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// `POST /sign_ups` payload.
#[derive(Debug, Serialize)]
pub struct SignUpRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

fn deserialize_optional_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float < i64::MAX as f64
            {
                return Ok(Some(float as i64));
            }
            Err(D::Error::custom("expected integer-compatible timestamp"))
        }
        _ => Err(D::Error::custom("expected timestamp number or null")),
    }
}
