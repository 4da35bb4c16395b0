//! Networking modules for the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` defines the service seam, `api` binds it to the provider's HTTP
//! API, and `types` defines the shared wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod fake;
pub mod identity;
pub mod types;
