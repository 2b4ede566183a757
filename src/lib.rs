//! # Zendesk API Rust SDK
//!
//! A Rust SDK for the Zendesk Support REST API. It turns method calls into
//! request URLs, sends them, and normalizes the responses.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ZendeskConfig`] and [`ZendeskConfigBuilder`]
//! - Validated newtypes for the endpoint, subdomain and credentials
//! - Query serialization with bracket notation and key-wise merging
//! - URL assembly with cursor pagination hints and side-load includes
//! - Response classification into [`rest::ResponseError`] variants, including
//!   rate limit detection
//! - Side-loaded association population on response payloads
//! - An async HTTP transport and resource clients built on top of it
//!
//! ## Quick Start
//!
//! ```rust
//! use zendesk_api::{Credentials, Subdomain, ZendeskConfig};
//!
//! let config = ZendeskConfig::builder()
//!     .subdomain(Subdomain::new("acme").unwrap())
//!     .credentials(Credentials::token("agent@acme.com", "api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.use_dot_json());
//! ```
//!
//! ## Calling a Resource
//!
//! ```rust,ignore
//! use zendesk_api::rest::resources::Requests;
//! use zendesk_api::rest::{CheckedResponse, ResponseError, ResourceError};
//!
//! let requests = Requests::new(&config).with_side_load(["users"]);
//!
//! match requests.show(42).await {
//!     Ok(CheckedResponse::Body(request)) => println!("{}", request["subject"]),
//!     Ok(CheckedResponse::StatusUnreadable(failure)) => eprintln!("{}", failure.exception),
//!     Err(ResourceError::Response(ResponseError::RateLimited { .. })) => { /* back off */ }
//!     Err(error) => eprintln!("{error}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events (URL assembly, requests, responses at
//! `debug`; rate limiting at `warn`). It never installs a subscriber.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{Credentials, EndpointUri, Subdomain, ZendeskConfig, ZendeskConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RateLimitInfo,
};
