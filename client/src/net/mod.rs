//! Browser adapters for the `contract` seams.
//!
//! ARCHITECTURE
//! ============
//! `transport` implements HTTP over `fetch`, `storage` persists through
//! `localStorage`, and `api` assembles them into the session store and the
//! backend client used by pages.

pub mod api;
pub mod storage;
pub mod transport;
