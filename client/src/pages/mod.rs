//! Page modules for the panel's screens.
//!
//! ARCHITECTURE
//! ============
//! `panel` is the only route. It owns session observation and local state and
//! picks exactly one of the login, dashboard, and profile pages to render.

pub mod dashboard;
pub mod login;
pub mod panel;
pub mod profile;
