//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: busy flags, liveness and the
//! backend calls. Protected pages wrap their body in `RequireAuth`, and all
//! pages render inside the shared `Layout`.

pub mod analyzer;
pub(crate) mod document_list;
pub mod history;
pub mod home;
pub mod login;
pub mod profile;
pub mod proposal;
pub mod signup;
pub mod upload;
