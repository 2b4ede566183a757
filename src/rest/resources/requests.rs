//! Requests: tickets as seen by the end user who opened them.

use serde_json::Value;

use crate::config::ZendeskConfig;
use crate::rest::errors::CheckedResponse;
use crate::rest::resource::{ResourceClient, ResourceDefinition, ResourceError};
use crate::rest::side_load::SideLoadDirective;
use crate::rest::url::UriSpec;

/// End-user requests.
///
/// Listing calls fetch the first page only.
///
/// # Example
///
/// ```rust,ignore
/// use zendesk_api::rest::resources::Requests;
///
/// let requests = Requests::new(&config).with_side_load(["users", "organizations"]);
/// let open = requests.list_open().await?;
/// let one = requests.show(42).await?;
/// ```
#[derive(Debug)]
pub struct Requests {
    client: ResourceClient,
}

impl Requests {
    /// Root keys and side-loads of request payloads.
    pub const DEFINITION: ResourceDefinition = ResourceDefinition::new(
        &["requests", "request"],
        &[
            SideLoadDirective::one_to_one("assignee_id", "assignee", "users"),
            SideLoadDirective::one_to_one("requester_id", "requester", "users"),
            SideLoadDirective::one_to_one("organization_id", "organization", "organizations"),
        ],
    );

    /// Creates the resource for the given configuration.
    #[must_use]
    pub fn new(config: &ZendeskConfig) -> Self {
        Self {
            client: ResourceClient::new(config, Self::DEFINITION),
        }
    }

    /// Requests related resources with `include=`.
    #[must_use]
    pub fn with_side_load<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client: self.client.with_side_load(names),
        }
    }

    /// Returns the underlying resource client.
    #[must_use]
    pub const fn client(&self) -> &ResourceClient {
        &self.client
    }

    /// Lists the current user's requests.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn list(&self) -> Result<CheckedResponse, ResourceError> {
        self.client.get(UriSpec::path(["requests"])).await
    }

    /// Lists open requests.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn list_open(&self) -> Result<CheckedResponse, ResourceError> {
        self.client.get(UriSpec::path(["requests", "open"])).await
    }

    /// Lists solved requests.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn list_solved(&self) -> Result<CheckedResponse, ResourceError> {
        self.client.get(UriSpec::path(["requests", "solved"])).await
    }

    /// Lists requests the current user is CC'd on.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn list_ccd(&self) -> Result<CheckedResponse, ResourceError> {
        self.client.get(UriSpec::path(["requests", "ccd"])).await
    }

    /// Lists the requests of a user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn list_by_user(&self, user_id: u64) -> Result<CheckedResponse, ResourceError> {
        self.client
            .get(UriSpec::path(["users"]).segment(user_id).segment("requests"))
            .await
    }

    /// Lists the requests of an organization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn list_by_organization(
        &self,
        organization_id: u64,
    ) -> Result<CheckedResponse, ResourceError> {
        self.client
            .get(
                UriSpec::path(["organizations"])
                    .segment(organization_id)
                    .segment("requests"),
            )
            .await
    }

    /// Searches requests; `parameters` is serialized as the query string.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn search(&self, parameters: Value) -> Result<CheckedResponse, ResourceError> {
        self.client
            .get(UriSpec::path(["requests", "search"]).with_query(parameters))
            .await
    }

    /// Fetches one request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn show(&self, request_id: u64) -> Result<CheckedResponse, ResourceError> {
        self.client
            .get(UriSpec::path(["requests"]).segment(request_id))
            .await
    }

    /// Creates a request. `details` is the full body, e.g. `{"request": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn create(&self, details: Value) -> Result<CheckedResponse, ResourceError> {
        self.client.post(UriSpec::path(["requests"]), details).await
    }

    /// Updates a request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn update(
        &self,
        request_id: u64,
        details: Value,
    ) -> Result<CheckedResponse, ResourceError> {
        self.client
            .put(UriSpec::path(["requests"]).segment(request_id), details)
            .await
    }

    /// Lists the comments of a request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn list_comments(&self, request_id: u64) -> Result<CheckedResponse, ResourceError> {
        self.client
            .get(
                UriSpec::path(["requests"])
                    .segment(request_id)
                    .segment("comments"),
            )
            .await
    }

    /// Fetches one comment of a request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn get_comment(
        &self,
        request_id: u64,
        comment_id: u64,
    ) -> Result<CheckedResponse, ResourceError> {
        self.client
            .get(
                UriSpec::path(["requests"])
                    .segment(request_id)
                    .segment("comments")
                    .segment(comment_id),
            )
            .await
    }
}
