//! Organization memberships: links between users and organizations.

use serde_json::Value;

use crate::config::ZendeskConfig;
use crate::rest::errors::CheckedResponse;
use crate::rest::resource::{ResourceClient, ResourceDefinition, ResourceError};
use crate::rest::side_load::SideLoadDirective;
use crate::rest::url::UriSpec;

/// Organization memberships.
#[derive(Debug)]
pub struct OrganizationMemberships {
    client: ResourceClient,
}

impl OrganizationMemberships {
    /// Root keys and side-loads of membership payloads.
    pub const DEFINITION: ResourceDefinition = ResourceDefinition::new(
        &["organization_memberships", "organization_membership"],
        &[
            SideLoadDirective::one_to_one("user_id", "user", "users"),
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

    /// Lists all memberships.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn list(&self) -> Result<CheckedResponse, ResourceError> {
        self.client.get(UriSpec::path(["organization_memberships"])).await
    }

    /// Lists the memberships of a user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn list_by_user(&self, user_id: u64) -> Result<CheckedResponse, ResourceError> {
        self.client
            .get(
                UriSpec::path(["users"])
                    .segment(user_id)
                    .segment("organization_memberships"),
            )
            .await
    }

    /// Lists the memberships of an organization.
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
                    .segment("organization_memberships"),
            )
            .await
    }

    /// Fetches one membership.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn show(&self, membership_id: u64) -> Result<CheckedResponse, ResourceError> {
        self.client
            .get(UriSpec::path(["organization_memberships"]).segment(membership_id))
            .await
    }

    /// Creates a membership from `{"organization_membership": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn create(&self, membership: Value) -> Result<CheckedResponse, ResourceError> {
        self.client
            .post(UriSpec::path(["organization_memberships"]), membership)
            .await
    }

    /// Makes a membership the user's default organization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails.
    pub async fn set_default(
        &self,
        user_id: u64,
        membership_id: u64,
    ) -> Result<CheckedResponse, ResourceError> {
        self.client
            .put(
                UriSpec::path(["users"])
                    .segment(user_id)
                    .segment("organization_memberships")
                    .segment(membership_id)
                    .segment("make_default"),
                Value::Object(serde_json::Map::new()),
            )
            .await
    }

    /// Deletes a membership.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the call fails; an empty `204` answer
    /// is reported as an empty result.
    pub async fn delete(&self, membership_id: u64) -> Result<CheckedResponse, ResourceError> {
        self.client
            .delete(UriSpec::path(["organization_memberships"]).segment(membership_id))
            .await
    }
}
