//! Zendesk Support API resources.
//!
//! Each resource wraps a [`ResourceClient`](crate::rest::ResourceClient)
//! configured with its [`ResourceDefinition`](crate::rest::ResourceDefinition)
//! and maps its endpoints to methods.
//!
//! ```rust,ignore
//! use zendesk_api::rest::resources::{OrganizationMemberships, Requests};
//!
//! let requests = Requests::new(&config).with_side_load(["users"]);
//! let mine = requests.list().await?;
//!
//! let memberships = OrganizationMemberships::new(&config);
//! let of_org = memberships.list_by_organization(17).await?;
//! ```

mod organization_memberships;
mod requests;

pub use organization_memberships::OrganizationMemberships;
pub use requests::Requests;
