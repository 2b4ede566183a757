//! Error types for the Zendesk API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::{Subdomain, ConfigError};
//!
//! let result = Subdomain::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidSubdomain { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint URI is not an absolute `http(s)` URL.
    #[error("Invalid endpoint URI '{uri}'. Expected an absolute URL such as 'https://acme.zendesk.com/api/v2'.")]
    InvalidEndpointUri {
        /// The invalid URI that was provided.
        uri: String,
    },

    /// The account subdomain is invalid.
    #[error("Invalid subdomain '{subdomain}'. Expected letters, digits and hyphens only (e.g., 'acme').")]
    InvalidSubdomain {
        /// The invalid subdomain that was provided.
        subdomain: String,
    },

    /// A credential component was empty.
    #[error("Credential field '{field}' cannot be empty.")]
    EmptyCredential {
        /// The name of the empty credential field.
        field: &'static str,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_uri_error_message() {
        let error = ConfigError::InvalidEndpointUri {
            uri: "acme.zendesk.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("acme.zendesk.com"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "endpoint_uri",
        };
        let message = error.to_string();
        assert!(message.contains("endpoint_uri"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_empty_credential_error_message() {
        let error = ConfigError::EmptyCredential { field: "token" };
        assert_eq!(error.to_string(), "Credential field 'token' cannot be empty.");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::InvalidSubdomain {
            subdomain: "bad one".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
