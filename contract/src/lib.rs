//! Session lifecycle and backend function contract for the Sphere client.
//!
//! This crate owns everything that is not a view: the session model and its
//! single-writer store, the identity-provider seam (with the Supabase GoTrue
//! adapter), and the typed contract for the hosted document functions. It has
//! no browser or runtime dependency so the same code drives the Leptos
//! `client` in WASM and the `cli` natively.
//!
//! ARCHITECTURE
//! ============
//! `transport` is the HTTP seam, `gotrue` and `backend` speak JSON over it,
//! and `store` sits on top of any [`provider::IdentityProvider`] to expose
//! snapshot reads and whole-value writes.

pub mod analysis;
pub mod backend;
pub mod config;
pub mod documents;
pub mod gotrue;
pub mod proposal;
pub mod provider;
pub mod session;
pub mod store;
pub mod subscription;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use analysis::Analysis;
pub use backend::{ApiError, BackendClient, Function, SessionSource, backend_error_message};
pub use config::{ConfigError, SphereConfig};
pub use documents::{DocumentSummary, ExportLink};
pub use gotrue::{GoTrueProvider, MemoryStorage, SessionStorage};
pub use proposal::{GenerateRequest, Proposal, ProposalKind, ProposalSection, section_title};
pub use provider::{AuthError, IdentityProvider, SessionChange, SignUpOutcome};
pub use session::{AuthEvent, AuthState, Phase, Session, User};
pub use store::SessionStore;
pub use subscription::{Listeners, Subscription};
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
