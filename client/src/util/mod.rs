//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep translation, guard decisions and error wording out
//! of page code so they can be tested without a browser.

pub mod errors;
pub mod guard;
pub mod i18n;
pub mod liveness;
