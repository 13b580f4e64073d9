//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared chrome, the auth gate and generated output
//! while reading auth and language state from Leptos context providers.

pub mod layout;
pub mod proposal_view;
pub mod require_auth;
