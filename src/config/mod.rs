//! Configuration types for the Zendesk API SDK.
//!
//! This module provides the configuration used to build request URLs and to
//! authenticate against a Zendesk account.
//!
//! # Overview
//!
//! - [`ZendeskConfig`]: The main configuration struct holding all SDK settings
//! - [`ZendeskConfigBuilder`]: A builder for constructing [`ZendeskConfig`] instances
//! - [`EndpointUri`]: A validated API endpoint
//! - [`Subdomain`]: A validated account subdomain
//! - [`Credentials`]: Token, password or OAuth credentials with masked debug output
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::{ZendeskConfig, Credentials, Subdomain};
//!
//! let config = ZendeskConfig::builder()
//!     .subdomain(Subdomain::new("acme").unwrap())
//!     .credentials(Credentials::token("agent@acme.com", "token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint_uri().as_ref(), "https://acme.zendesk.com/api/v2");
//! ```

mod newtypes;

pub use newtypes::{Credentials, EndpointUri, Subdomain};

use crate::error::ConfigError;
use serde_json::Value;

/// Configuration for the Zendesk API SDK.
///
/// # Thread Safety
///
/// `ZendeskConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ZendeskConfig {
    endpoint_uri: EndpointUri,
    credentials: Option<Credentials>,
    default_query: Option<Value>,
    use_dot_json: bool,
    user_agent_prefix: Option<String>,
}

impl ZendeskConfig {
    /// Creates a new builder for constructing a `ZendeskConfig`.
    #[must_use]
    pub fn builder() -> ZendeskConfigBuilder {
        ZendeskConfigBuilder::new()
    }

    /// Returns the API endpoint every request path is appended to.
    #[must_use]
    pub const fn endpoint_uri(&self) -> &EndpointUri {
        &self.endpoint_uri
    }

    /// Returns the credentials, if configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the query object merged into every request URL.
    ///
    /// Keys in this object take precedence over every other query source.
    #[must_use]
    pub const fn default_query(&self) -> Option<&Value> {
        self.default_query.as_ref()
    }

    /// Returns whether `.json` is appended to request paths.
    #[must_use]
    pub const fn use_dot_json(&self) -> bool {
        self.use_dot_json
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ZendeskConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZendeskConfig>();
};

/// Builder for constructing [`ZendeskConfig`] instances.
///
/// One of `endpoint_uri` or `subdomain` is required. When both are set the
/// explicit endpoint wins.
///
/// # Defaults
///
/// - `credentials`: `None`
/// - `default_query`: `None`
/// - `use_dot_json`: `true`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ZendeskConfigBuilder {
    endpoint_uri: Option<EndpointUri>,
    subdomain: Option<Subdomain>,
    credentials: Option<Credentials>,
    default_query: Option<Value>,
    use_dot_json: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl ZendeskConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit API endpoint.
    #[must_use]
    pub fn endpoint_uri(mut self, uri: EndpointUri) -> Self {
        self.endpoint_uri = Some(uri);
        self
    }

    /// Sets the account subdomain, used when no endpoint is given.
    #[must_use]
    pub fn subdomain(mut self, subdomain: Subdomain) -> Self {
        self.subdomain = Some(subdomain);
        self
    }

    /// Sets the credentials sent with every request.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the default query object.
    #[must_use]
    pub fn default_query(mut self, query: Value) -> Self {
        self.default_query = Some(query);
        self
    }

    /// Controls whether `.json` is appended to request paths.
    #[must_use]
    pub const fn use_dot_json(mut self, enabled: bool) -> Self {
        self.use_dot_json = Some(enabled);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ZendeskConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if neither an endpoint
    /// nor a subdomain was set.
    pub fn build(self) -> Result<ZendeskConfig, ConfigError> {
        let endpoint_uri = match (self.endpoint_uri, self.subdomain) {
            (Some(uri), _) => uri,
            (None, Some(subdomain)) => EndpointUri::for_subdomain(&subdomain),
            (None, None) => {
                return Err(ConfigError::MissingRequiredField {
                    field: "endpoint_uri",
                })
            }
        };

        Ok(ZendeskConfig {
            endpoint_uri,
            credentials: self.credentials,
            default_query: self.default_query,
            use_dot_json: self.use_dot_json.unwrap_or(true),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_requires_endpoint_or_subdomain() {
        let result = ZendeskConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "endpoint_uri"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ZendeskConfig::builder()
            .subdomain(Subdomain::new("acme").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.endpoint_uri().as_ref(), "https://acme.zendesk.com/api/v2");
        assert!(config.use_dot_json());
        assert!(config.credentials().is_none());
        assert!(config.default_query().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_explicit_endpoint_wins_over_subdomain() {
        let config = ZendeskConfig::builder()
            .subdomain(Subdomain::new("acme").unwrap())
            .endpoint_uri(EndpointUri::new("https://support.acme.com/api/v2").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.endpoint_uri().as_ref(), "https://support.acme.com/api/v2");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ZendeskConfig::builder()
            .endpoint_uri(EndpointUri::new("https://acme.zendesk.com/api/v2").unwrap())
            .credentials(Credentials::oauth("token").unwrap())
            .default_query(json!({"locale": "en-US"}))
            .use_dot_json(false)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert!(!config.use_dot_json());
        assert_eq!(config.default_query(), Some(&json!({"locale": "en-US"})));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert!(matches!(config.credentials(), Some(Credentials::OAuth { .. })));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = ZendeskConfig::builder()
            .subdomain(Subdomain::new("acme").unwrap())
            .credentials(Credentials::token("agent@acme.com", "secret-token").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.endpoint_uri(), config.endpoint_uri());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ZendeskConfig"));
        assert!(!debug_str.contains("secret-token"));
    }
}
