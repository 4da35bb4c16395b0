//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the provider-owned side (observed, never mutated here);
//! `auth`, `form`, and `ui` are local state held in Leptos signals.

pub mod auth;
pub mod form;
pub mod session;
pub mod ui;
