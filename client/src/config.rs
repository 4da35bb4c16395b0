//! Runtime configuration shared by the SSR shell and the hydrated app.
//!
//! The server renders each field into a `<meta>` tag; the browser reads the
//! tags back at hydration so both sides agree without a rebuild.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/identity/v1";
pub const DEFAULT_MIN_SECRET_LEN: usize = 8;

pub const META_API_BASE: &str = "keygate-api-base";
pub const META_MIN_SECRET_LEN: &str = "keygate-min-secret-len";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root URL of the identity provider API, without a trailing slash.
    pub api_base: String,
    /// Minimum password length enforced by the form.
    pub min_secret_len: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), min_secret_len: DEFAULT_MIN_SECRET_LEN }
    }
}

impl ClientConfig {
    /// Build from named values (meta tags); missing or malformed values fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup(META_API_BASE)
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        let min_secret_len = lookup(META_MIN_SECRET_LEN)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MIN_SECRET_LEN);
        Self { api_base, min_secret_len }
    }

    /// Read the `<meta>` tags written by the SSR shell.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::from_lookup(|name| {
            let element = document
                .as_ref()?
                .query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()??;
            element.get_attribute("content")
        })
    }

    /// `(name, content)` pairs for the SSR shell's `<meta>` tags.
    pub fn meta_tags(&self) -> [(&'static str, String); 2] {
        [
            (META_API_BASE, self.api_base.clone()),
            (META_MIN_SECRET_LEN, self.min_secret_len.to_string()),
        ]
    }
}
