//! Resource client plumbing.
//!
//! A [`ResourceClient`] runs one call through the whole pipeline:
//!
//! 1. [`assemble_url`] builds the request URL from the descriptor
//! 2. [`HttpClient`] sends the request once
//! 3. [`check_request_response`] classifies the response
//! 4. [`process_response_body`] unwraps and enriches a usable body
//!
//! Individual resources (see [`resources`](crate::rest::resources)) are thin
//! wrappers holding a [`ResourceClient`] configured with their
//! [`ResourceDefinition`].

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::ZendeskConfig;
use crate::rest::context::RequestContext;
use crate::rest::errors::{check_request_response, CheckedResponse, ResponseError};
use crate::rest::pagination::{CursorPaginationEndpoints, EndpointChecker};
use crate::rest::response::process_response_body;
use crate::rest::side_load::SideLoadDirective;
use crate::rest::url::{assemble_url, UriSpec};

/// Static metadata describing how a resource's responses are shaped.
///
/// # Example
///
/// ```rust
/// use zendesk_api::rest::{ResourceDefinition, SideLoadDirective};
///
/// const TAGS: ResourceDefinition = ResourceDefinition::new(
///     &["tags", "tag"],
///     &[SideLoadDirective::one_to_one("user_id", "user", "users")],
/// );
/// assert_eq!(TAGS.json_api_names, &["tags", "tag"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceDefinition {
    /// Candidate root keys holding the payload, in lookup order.
    pub json_api_names: &'static [&'static str],
    /// Side-load directives applied to the payload.
    pub side_load_map: &'static [SideLoadDirective],
}

impl ResourceDefinition {
    /// Creates a resource definition.
    #[must_use]
    pub const fn new(
        json_api_names: &'static [&'static str],
        side_load_map: &'static [SideLoadDirective],
    ) -> Self {
        Self {
            json_api_names,
            side_load_map,
        }
    }
}

/// Errors from a resource call.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The response was classified as an error.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The request could not be built or sent.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the status code of a classified response error.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(error) => Some(error.status_code()),
            Self::Http(_) => None,
        }
    }
}

/// Executes calls for one resource.
///
/// # Thread Safety
///
/// `ResourceClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use zendesk_api::rest::{ResourceClient, ResourceDefinition, UriSpec};
/// use zendesk_api::{Subdomain, ZendeskConfig};
///
/// const USERS: ResourceDefinition = ResourceDefinition::new(&["users", "user"], &[]);
///
/// let config = ZendeskConfig::builder()
///     .subdomain(Subdomain::new("acme")?)
///     .build()?;
/// let client = ResourceClient::new(&config, USERS);
///
/// let users = client.get(UriSpec::path(["users"])).await?;
/// ```
pub struct ResourceClient {
    config: ZendeskConfig,
    http_client: HttpClient,
    definition: ResourceDefinition,
    side_load: Vec<String>,
    endpoint_checker: Box<dyn EndpointChecker>,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a client with no side-loads and the default cursor
    /// pagination endpoints.
    #[must_use]
    pub fn new(config: &ZendeskConfig, definition: ResourceDefinition) -> Self {
        Self {
            config: config.clone(),
            http_client: HttpClient::new(config),
            definition,
            side_load: Vec::new(),
            endpoint_checker: Box::new(CursorPaginationEndpoints::default()),
        }
    }

    /// Requests related resources with `include=`.
    #[must_use]
    pub fn with_side_load<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.side_load = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the cursor pagination checker.
    #[must_use]
    pub fn with_endpoint_checker(mut self, checker: impl EndpointChecker + 'static) -> Self {
        self.endpoint_checker = Box::new(checker);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ZendeskConfig {
        &self.config
    }

    /// Returns the resource definition.
    #[must_use]
    pub const fn definition(&self) -> &ResourceDefinition {
        &self.definition
    }

    /// Returns the requested side-load names.
    #[must_use]
    pub fn side_load(&self) -> &[String] {
        &self.side_load
    }

    /// Returns the request context used for URL assembly and body resolution.
    #[must_use]
    pub fn context(&self) -> RequestContext<'_> {
        let mut context = RequestContext::new(
            self.config.endpoint_uri().as_ref(),
            self.endpoint_checker.as_ref(),
        )
        .side_load(&self.side_load)
        .with_dot_json(self.config.use_dot_json());

        if let Some(query) = self.config.default_query() {
            context = context.default_query(query);
        }
        if !self.definition.json_api_names.is_empty() {
            context = context.json_api_names(self.definition.json_api_names);
        }
        if !self.definition.side_load_map.is_empty() {
            context = context.side_load_map(self.definition.side_load_map);
        }
        context
    }

    /// Builds the request URL without sending anything.
    #[must_use]
    pub fn url(&self, method: HttpMethod, uri: &UriSpec) -> String {
        assemble_url(&self.context(), method, uri)
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::request`].
    pub async fn get(&self, uri: impl Into<UriSpec>) -> Result<CheckedResponse, ResourceError> {
        self.request(HttpMethod::Get, uri, None).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::request`].
    pub async fn post(
        &self,
        uri: impl Into<UriSpec>,
        body: Value,
    ) -> Result<CheckedResponse, ResourceError> {
        self.request(HttpMethod::Post, uri, Some(body)).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::request`].
    pub async fn put(
        &self,
        uri: impl Into<UriSpec>,
        body: Value,
    ) -> Result<CheckedResponse, ResourceError> {
        self.request(HttpMethod::Put, uri, Some(body)).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::request`].
    pub async fn patch(
        &self,
        uri: impl Into<UriSpec>,
        body: Value,
    ) -> Result<CheckedResponse, ResourceError> {
        self.request(HttpMethod::Patch, uri, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// Zendesk answers most deletes with an empty `204`, which is reported
    /// as [`ResponseError::EmptyResult`].
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::request`].
    pub async fn delete(&self, uri: impl Into<UriSpec>) -> Result<CheckedResponse, ResourceError> {
        self.request(HttpMethod::Delete, uri, None).await
    }

    /// Sends a request and returns the checked, unwrapped body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] when the request is invalid or cannot
    /// be sent, and [`ResourceError::Response`] when the response is
    /// classified as an error.
    pub async fn request(
        &self,
        method: HttpMethod,
        uri: impl Into<UriSpec>,
        body: Option<Value>,
    ) -> Result<CheckedResponse, ResourceError> {
        let context = self.context();
        let url = assemble_url(&context, method, &uri.into());

        let mut builder = HttpRequest::builder(method, url);
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        let request = builder.build().map_err(HttpError::from)?;

        let mut response = self.http_client.request(request).await?;
        let result = response.body.take();

        match check_request_response(&response, result)? {
            CheckedResponse::Body(raw) => Ok(CheckedResponse::Body(process_response_body(
                &raw, &context,
            ))),
            unreadable @ CheckedResponse::StatusUnreadable(_) => Ok(unreadable),
        }
    }
}

impl fmt::Debug for ResourceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("config", &self.config)
            .field("definition", &self.definition)
            .field("side_load", &self.side_load)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndpointUri;
    use crate::rest::pagination::NoCursorPagination;
    use serde_json::json;

    const WIDGETS: ResourceDefinition = ResourceDefinition::new(
        &["widgets", "widget"],
        &[SideLoadDirective::one_to_one("owner_id", "owner", "users")],
    );

    fn create_test_config() -> ZendeskConfig {
        ZendeskConfig::builder()
            .endpoint_uri(EndpointUri::new("https://acme.zendesk.com/api/v2").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_url_includes_side_load_and_pagination_hint() {
        let client = ResourceClient::new(&create_test_config(), WIDGETS)
            .with_side_load(["users"])
            .with_endpoint_checker(CursorPaginationEndpoints::with_patterns(&["widgets"]));

        assert_eq!(
            client.url(HttpMethod::Get, &UriSpec::path(["widgets"])),
            "https://acme.zendesk.com/api/v2/widgets.json?page[size]=100&include=users"
        );
        assert_eq!(
            client.url(HttpMethod::Post, &UriSpec::path(["widgets"])),
            "https://acme.zendesk.com/api/v2/widgets.json?include=users"
        );
    }

    #[test]
    fn test_context_reflects_config_and_definition() {
        let config = ZendeskConfig::builder()
            .endpoint_uri(EndpointUri::new("https://acme.zendesk.com/api/v2").unwrap())
            .default_query(json!({"locale": "de"}))
            .use_dot_json(false)
            .build()
            .unwrap();
        let client = ResourceClient::new(&config, WIDGETS).with_endpoint_checker(NoCursorPagination);
        let context = client.context();

        assert_eq!(context.endpoint_uri(), "https://acme.zendesk.com/api/v2");
        assert_eq!(context.query(), Some(&json!({"locale": "de"})));
        assert_eq!(context.api_names(), Some(&["widgets", "widget"][..]));
        assert_eq!(context.directives().map(<[_]>::len), Some(1));
        assert!(!context.use_dot_json());
    }

    #[test]
    fn test_empty_definition_leaves_context_unset() {
        const BARE: ResourceDefinition = ResourceDefinition::new(&[], &[]);
        let client = ResourceClient::new(&create_test_config(), BARE);
        let context = client.context();
        assert!(context.api_names().is_none());
        assert!(context.directives().is_none());
    }

    #[test]
    fn test_resource_error_status_code() {
        let error = ResourceError::from(ResponseError::NoContent { status_code: 204 });
        assert_eq!(error.status_code(), Some(204));
        assert_eq!(error.to_string(), "No Content");

        let error = ResourceError::from(HttpError::from(
            crate::clients::InvalidHttpRequestError::MissingBodyType,
        ));
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_debug_output() {
        let client = ResourceClient::new(&create_test_config(), WIDGETS).with_side_load(["users"]);
        let debug = format!("{client:?}");
        assert!(debug.contains("ResourceClient"));
        assert!(debug.contains("users"));
    }
}
