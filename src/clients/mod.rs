//! HTTP transport types for Zendesk API communication.
//!
//! This module is the transport collaborator of the request pipeline in
//! [`crate::rest`]: it sends an already assembled URL and returns the raw
//! status, headers and parsed JSON body.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use zendesk_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config);
//! let request = HttpRequest::builder(HttpMethod::Get, "https://acme.zendesk.com/api/v2/users.json")
//!     .build()
//!     .unwrap();
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Requests are sent once; rate limiting is reported through
//! [`ResponseError::RateLimited`](crate::rest::ResponseError::RateLimited)
//! and the `Retry-After` value is available on [`HttpResponse`].

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimitInfo};
