//! Gateway configuration.
//!
//! The endpoint is baked in at compile time from `CHAT_API_URL`, since a WASM
//! bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend chat endpoint used when `CHAT_API_URL` is unset or invalid.
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://localhost:8000/api/chat";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid chat endpoint '{0}' (expected http://, https:// or a path starting with /)")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub endpoint: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_CHAT_ENDPOINT.to_owned() }
    }
}

impl GatewayConfig {
    /// Build config from the compile-time `CHAT_API_URL`.
    ///
    /// An invalid value is logged and replaced by the default endpoint.
    #[must_use]
    pub fn from_build_env() -> Self {
        match Self::from_raw(option_env!("CHAT_API_URL")) {
            Ok(cfg) => cfg,
            Err(e) => {
                leptos::logging::warn!("{e}; using {DEFAULT_CHAT_ENDPOINT}");
                Self::default()
            }
        }
    }

    /// Parse an optional endpoint override.
    ///
    /// `None` or a blank value selects the default. Trailing slashes are
    /// stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the value is neither an
    /// http(s) URL nor an absolute path.
    pub fn from_raw(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::default());
        };
        let trimmed = raw.trim_end_matches('/');
        let url_rest = trimmed.strip_prefix("http://").or_else(|| trimmed.strip_prefix("https://"));
        let valid = match url_rest {
            Some(host_and_path) => !host_and_path.is_empty(),
            None => trimmed.starts_with('/'),
        };
        if !valid {
            return Err(ConfigError::InvalidEndpoint(raw.to_owned()));
        }
        Ok(Self { endpoint: trimmed.to_owned() })
    }
}
