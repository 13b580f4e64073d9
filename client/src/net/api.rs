//! Wiring of the browser adapters into the shared contract.
//!
//! The deployment settings are baked in at build time (`option_env!`), the
//! same keys the server and CLI read from their environment.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contract::config::{ENV_FUNCTIONS_URL, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL};
use contract::{BackendClient, ConfigError, GoTrueProvider, SessionStore, SphereConfig};

use super::storage::BrowserStorage;
use super::transport::BrowserTransport;

pub type SphereProvider = GoTrueProvider<BrowserTransport, BrowserStorage>;
pub type SphereStore = SessionStore<SphereProvider>;
pub type SphereBackend = BackendClient<BrowserTransport, SphereStore>;

fn compiled_setting(key: &str) -> Option<String> {
    let value = match key {
        ENV_SUPABASE_URL => option_env!("SPHERE_SUPABASE_URL"),
        ENV_SUPABASE_ANON_KEY => option_env!("SPHERE_SUPABASE_ANON_KEY"),
        ENV_FUNCTIONS_URL => option_env!("SPHERE_FUNCTIONS_URL"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Settings compiled into this bundle.
///
/// # Errors
///
/// Returns [`ConfigError`] when the bundle was built without the required keys.
pub fn config() -> Result<SphereConfig, ConfigError> {
    SphereConfig::from_lookup(compiled_setting)
}

/// Current unix time in seconds.
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

pub fn session_store(config: &SphereConfig) -> SphereStore {
    SessionStore::new(GoTrueProvider::new(config, BrowserTransport, BrowserStorage, now_secs))
}

pub fn backend(config: &SphereConfig, store: SphereStore) -> SphereBackend {
    BackendClient::new(config.functions_url.clone(), BrowserTransport, store)
}
