//! Client configuration, validated once at construction.

use crate::error::messages;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Production endpoint for the Layer platform API.
pub const DEFAULT_BASE_URL: &str = "https://api.layer.com";

/// Accepted app id grammar: a bare UUID. The platform also hands out a
/// fully-qualified `layer:///apps/<env>/<uuid>` form; that one is rejected
/// here and must be stripped by the caller.
static DEFAULT_APP_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("app id pattern is a valid regex")
});

/// Immutable configuration shared by every call the client makes.
///
/// Both fields are checked once in [`ClientConfig::new`]; after that the
/// config is read-only and safe to share across concurrent calls.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    token: String,
    app_id: String,
    base_url: String,
}

impl ClientConfig {
    /// Validate `token` and `app_id` and produce a config bound to the
    /// production endpoint.
    pub fn new(token: impl Into<String>, app_id: impl Into<String>) -> Result<Self> {
        Self::with_pattern(token, app_id, DEFAULT_BASE_URL, &DEFAULT_APP_ID_PATTERN)
    }

    /// Like [`ClientConfig::new`] but with an explicit base URL and app id
    /// pattern. Used by the client builder; the pattern override exists so
    /// integrators against non-production environments can widen the
    /// accepted grammar without a release.
    pub fn with_pattern(
        token: impl Into<String>,
        app_id: impl Into<String>,
        base_url: impl Into<String>,
        app_id_pattern: &Regex,
    ) -> Result<Self> {
        let token = token.into();
        let app_id = app_id.into();
        let base_url = base_url.into();

        if token.trim().is_empty() {
            return Err(Error::configuration(messages::TOKEN_REQUIRED));
        }
        if app_id.contains("://") || app_id.starts_with("layer:") {
            return Err(Error::configuration(messages::APP_ID_NOT_BARE));
        }
        if !app_id_pattern.is_match(&app_id) {
            return Err(Error::configuration(messages::APP_ID_INVALID));
        }
        if url::Url::parse(&base_url).is_err() {
            return Err(Error::configuration(messages::BASE_URL_INVALID));
        }

        Ok(Self {
            token,
            app_id,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// The default bare-UUID app id pattern.
pub fn default_app_id_pattern() -> &'static Regex {
    &DEFAULT_APP_ID_PATTERN
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_ID: &str = "24f43c32-4d95-11e4-b3a2-0fd00000020d";

    #[test]
    fn accepts_bare_uuid_app_id() {
        let config = ClientConfig::new("tok-123", APP_ID).unwrap();
        assert_eq!(config.app_id(), APP_ID);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_empty_token() {
        let err = ClientConfig::new("", APP_ID).unwrap_err();
        assert!(err.to_string().contains(messages::TOKEN_REQUIRED));
    }

    #[test]
    fn rejects_malformed_app_id() {
        let err = ClientConfig::new("tok-123", "12345").unwrap_err();
        assert!(err.to_string().contains(messages::APP_ID_INVALID));
    }

    #[test]
    fn rejects_fully_qualified_app_id() {
        let full = format!("layer:///apps/staging/{APP_ID}");
        let err = ClientConfig::new("tok-123", full).unwrap_err();
        assert!(err.to_string().contains(messages::APP_ID_NOT_BARE));
    }

    #[test]
    fn custom_pattern_widens_accepted_grammar() {
        let pattern = Regex::new(r"^[a-z0-9-]+$").unwrap();
        let config =
            ClientConfig::with_pattern("tok-123", "staging-app-1", DEFAULT_BASE_URL, &pattern)
                .unwrap();
        assert_eq!(config.app_id(), "staging-app-1");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = ClientConfig::with_pattern(
            "tok-123",
            APP_ID,
            "not a url",
            default_app_id_pattern(),
        )
        .unwrap_err();
        assert!(err.to_string().contains(messages::BASE_URL_INVALID));
    }

    #[test]
    fn trims_trailing_slash_on_base_url() {
        let config = ClientConfig::with_pattern(
            "tok-123",
            APP_ID,
            "https://api.layer.com/",
            default_app_id_pattern(),
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://api.layer.com");
    }
}
