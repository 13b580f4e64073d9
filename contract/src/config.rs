//! Deployment configuration: where the identity provider and functions live.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::Url;

pub const ENV_SUPABASE_URL: &str = "SPHERE_SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "SPHERE_SUPABASE_ANON_KEY";
pub const ENV_FUNCTIONS_URL: &str = "SPHERE_FUNCTIONS_URL";

const FALLBACK_STORAGE_KEY: &str = "sphere-auth-token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting `{0}`")]
    Missing(&'static str),
    #[error("invalid `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Typed endpoints for one Sphere deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SphereConfig {
    /// Project base URL, without a trailing slash.
    pub supabase_url: String,
    /// Public anon key sent as `apikey` to the auth API.
    pub anon_key: String,
    /// Base URL of the hosted functions, without a trailing slash.
    pub functions_url: String,
}

impl SphereConfig {
    /// Build from explicit values. `functions_url` defaults to
    /// `{supabase_url}/functions/v1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for blank values and
    /// [`ConfigError::Invalid`] for URLs that do not parse.
    pub fn from_parts(supabase_url: &str, anon_key: &str, functions_url: Option<&str>) -> Result<Self, ConfigError> {
        let supabase_url = normalize_url(ENV_SUPABASE_URL, supabase_url)?;
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(ENV_SUPABASE_ANON_KEY));
        }
        let functions_url = match functions_url.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => normalize_url(ENV_FUNCTIONS_URL, raw)?,
            None => format!("{supabase_url}/functions/v1"),
        };
        Ok(Self { supabase_url, anon_key: anon_key.to_owned(), functions_url })
    }

    /// Build from process environment variables.
    ///
    /// Required: `SPHERE_SUPABASE_URL`, `SPHERE_SUPABASE_ANON_KEY`.
    /// Optional: `SPHERE_FUNCTIONS_URL`.
    ///
    /// # Errors
    ///
    /// See [`SphereConfig::from_parts`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, compile-time values, tests).
    ///
    /// # Errors
    ///
    /// See [`SphereConfig::from_parts`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup(ENV_SUPABASE_URL).ok_or(ConfigError::Missing(ENV_SUPABASE_URL))?;
        let key = lookup(ENV_SUPABASE_ANON_KEY).ok_or(ConfigError::Missing(ENV_SUPABASE_ANON_KEY))?;
        let functions = lookup(ENV_FUNCTIONS_URL);
        Self::from_parts(&url, &key, functions.as_deref())
    }

    /// Subdomain label that identifies the hosted project, e.g. `abcd` for
    /// `https://abcd.supabase.co`.
    #[must_use]
    pub fn project_ref(&self) -> Option<String> {
        let url = Url::parse(&self.supabase_url).ok()?;
        let host = url.host_str()?;
        let label = host.split('.').next()?;
        (!label.is_empty() && host.contains('.')).then(|| label.to_owned())
    }

    /// Key under which the provider session is persisted.
    #[must_use]
    pub fn storage_key(&self) -> String {
        self.project_ref()
            .map_or_else(|| FALLBACK_STORAGE_KEY.to_owned(), |r| format!("sb-{r}-auth-token"))
    }
}

fn normalize_url(key: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Missing(key));
    }
    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::Invalid { key, message: e.to_string() })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid { key, message: format!("unsupported scheme `{}`", parsed.scheme()) });
    }
    Ok(trimmed.to_owned())
}
