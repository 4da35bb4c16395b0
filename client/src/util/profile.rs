//! Display formatting for the profile screen.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::User;

/// Placeholder for fields the provider did not report.
pub const MISSING_VALUE: &str = "None";

/// One labelled line on the profile screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRow {
    pub label: &'static str,
    pub value: String,
}

/// Rows shown on the profile screen, in display order.
pub fn profile_rows(user: &User) -> Vec<ProfileRow> {
    let or_missing = |value: Option<String>| value.filter(|v| !v.is_empty()).unwrap_or_else(|| MISSING_VALUE.to_owned());
    vec![
        ProfileRow { label: "User ID", value: user.id.clone() },
        ProfileRow { label: "Username", value: or_missing(user.username.clone()) },
        ProfileRow { label: "Email", value: or_missing(user.email.clone()) },
        ProfileRow { label: "Joined", value: or_missing(reported(user.created_at).and_then(format_date)) },
        ProfileRow { label: "Last sign-in", value: or_missing(reported(user.last_sign_in_at).and_then(format_date)) },
    ]
}

/// Providers send `0` for "never"; treat it like an absent timestamp.
fn reported(millis: Option<i64>) -> Option<i64> {
    millis.filter(|ms| *ms != 0)
}

/// Format a millisecond Unix timestamp as a UTC `YYYY-MM-DD` date.
///
/// Returns `None` for timestamps outside the representable range.
pub fn format_date(millis: i64) -> Option<String> {
    let nanos = i128::from(millis) * 1_000_000;
    let date = time::OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?.date();
    Some(format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day()))
}
