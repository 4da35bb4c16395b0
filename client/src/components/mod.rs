//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render small pieces of the panel from props only; pages own the
//! state they are given.

pub mod profile_row;
