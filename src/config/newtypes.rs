//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Zendesk API endpoint, e.g. `https://acme.zendesk.com/api/v2`.
///
/// Trailing slashes are removed so that path segments can be appended
/// with a single `/`.
///
/// # Example
///
/// ```rust
/// use zendesk_api::EndpointUri;
///
/// let uri = EndpointUri::new("https://acme.zendesk.com/api/v2/").unwrap();
/// assert_eq!(uri.as_ref(), "https://acme.zendesk.com/api/v2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUri(String);

impl EndpointUri {
    /// Creates a new validated endpoint URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUri`] if the URI has no
    /// `http`/`https` scheme or no host.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into();
        let trimmed = uri.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidEndpointUri { uri: uri.clone() })?;

        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() || rest.contains(['?', '#']) {
            return Err(ConfigError::InvalidEndpointUri { uri });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Builds the standard endpoint for an account subdomain.
    #[must_use]
    pub fn for_subdomain(subdomain: &Subdomain) -> Self {
        Self(format!("https://{}.zendesk.com/api/v2", subdomain.as_ref()))
    }
}

impl AsRef<str> for EndpointUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EndpointUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EndpointUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Zendesk account subdomain (`acme` in `acme.zendesk.com`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subdomain(String);

impl Subdomain {
    /// Creates a new validated subdomain. Input is lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSubdomain`] if the value is empty,
    /// starts or ends with a hyphen, or contains anything other than
    /// ASCII letters, digits and hyphens.
    pub fn new(subdomain: impl Into<String>) -> Result<Self, ConfigError> {
        let subdomain = subdomain.into().trim().to_lowercase();

        let valid = !subdomain.is_empty()
            && !subdomain.starts_with('-')
            && !subdomain.ends_with('-')
            && subdomain
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if !valid {
            return Err(ConfigError::InvalidSubdomain { subdomain });
        }
        Ok(Self(subdomain))
    }
}

impl AsRef<str> for Subdomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Subdomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Subdomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// Credentials passed through to the API on every request.
///
/// # Security
///
/// The `Debug` implementation masks every secret value.
///
/// # Example
///
/// ```rust
/// use zendesk_api::Credentials;
///
/// let creds = Credentials::token("agent@example.com", "abc123").unwrap();
/// assert_eq!(
///     format!("{:?}", creds),
///     "Credentials::Token { username: \"agent@example.com\", token: ***** }"
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// API token authentication (`{username}/token:{token}`).
    Token {
        /// The agent's email address.
        username: String,
        /// The API token.
        token: String,
    },
    /// Basic authentication with a password.
    Password {
        /// The agent's email address.
        username: String,
        /// The password.
        password: String,
    },
    /// OAuth access token sent as a bearer token.
    OAuth {
        /// The access token.
        access_token: String,
    },
}

impl Credentials {
    /// Creates API token credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if either part is empty.
    pub fn token(
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::Token {
            username: non_empty(username.into(), "username")?,
            token: non_empty(token.into(), "token")?,
        })
    }

    /// Creates password credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if either part is empty.
    pub fn password(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::Password {
            username: non_empty(username.into(), "username")?,
            password: non_empty(password.into(), "password")?,
        })
    }

    /// Creates OAuth bearer credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the token is empty.
    pub fn oauth(access_token: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::OAuth {
            access_token: non_empty(access_token.into(), "access_token")?,
        })
    }

    /// Returns the value of the `Authorization` header for these credentials.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::Token { username, token } => {
                format!("Basic {}", STANDARD.encode(format!("{username}/token:{token}")))
            }
            Self::Password { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
            }
            Self::OAuth { access_token } => format!("Bearer {access_token}"),
        }
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyCredential { field });
    }
    Ok(value)
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token { username, .. } => {
                write!(f, "Credentials::Token {{ username: {username:?}, token: ***** }}")
            }
            Self::Password { username, .. } => {
                write!(f, "Credentials::Password {{ username: {username:?}, password: ***** }}")
            }
            Self::OAuth { .. } => f.write_str("Credentials::OAuth(*****)"),
        }
    }
}
