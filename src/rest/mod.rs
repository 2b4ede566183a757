//! Request building and response normalization for the Zendesk REST API.
//!
//! This module is the core of the SDK. It is synchronous and performs no I/O:
//!
//! - **Query serialization**: [`serialize`] and [`merge_query_parameters`]
//! - **URL assembly**: [`assemble_url`] from a [`RequestContext`] and a [`UriSpec`]
//! - **Cursor pagination detection**: [`EndpointChecker`] and [`CursorPaginationEndpoints`]
//! - **Response checking**: [`check_request_response`] and [`ResponseError`]
//! - **Side-loading**: [`SideLoadDirective`] and [`populate_fields`]
//! - **Body resolution**: [`find_body`] and [`process_response_body`]
//!
//! [`ResourceClient`] ties these to the HTTP transport, and the
//! [`resources`] submodule defines the individual API resources on top of it.
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::clients::HttpMethod;
//! use zendesk_api::rest::{
//!     assemble_url, process_response_body, CursorPaginationEndpoints, RequestContext,
//!     SideLoadDirective, UriSpec,
//! };
//! use serde_json::json;
//!
//! const MAP: &[SideLoadDirective] = &[SideLoadDirective::one_to_one("user_id", "user", "users")];
//!
//! let checker = CursorPaginationEndpoints::default();
//! let side_load = vec!["users".to_string()];
//! let context = RequestContext::new("https://acme.zendesk.com/api/v2", &checker)
//!     .side_load(&side_load)
//!     .json_api_names(&["organization_memberships"])
//!     .side_load_map(MAP);
//!
//! let url = assemble_url(&context, HttpMethod::Get, &UriSpec::path(["organization_memberships"]));
//! assert_eq!(
//!     url,
//!     "https://acme.zendesk.com/api/v2/organization_memberships.json?page[size]=100&include=users"
//! );
//!
//! let raw = json!({
//!     "organization_memberships": [{"id": 1, "user_id": 9}],
//!     "users": [{"id": 9, "name": "Ann"}]
//! });
//! let body = process_response_body(&raw, &context);
//! assert_eq!(body[0]["user"]["name"], json!("Ann"));
//! ```

mod context;
mod errors;
mod pagination;
mod query;
mod resource;
mod response;
mod side_load;
mod url;

pub mod resources;

pub use context::RequestContext;
pub use errors::{
    check_request_response, status_message, CheckedResponse, ResponseError, ResponseStatus,
    StatusReadError, StatusReadFailure, SERVICE_NAME, STATUS_MESSAGES,
};
pub use pagination::{
    CursorPaginationEndpoints, EndpointChecker, NoCursorPagination, CURSOR_PAGE_SIZE,
    DEFAULT_CURSOR_PAGINATION_PATTERNS,
};
pub use query::{merge_query_parameters, serialize};
pub use resource::{ResourceClient, ResourceDefinition, ResourceError};
pub use response::{find_body, process_response_body};
pub use side_load::{populate_fields, SideLoadDirective, DEFAULT_DATA_KEY};
pub use url::{assemble_url, TrailingQuery, UriPart, UriSpec};
