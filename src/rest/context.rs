//! Per-call request context.
//!
//! A [`RequestContext`] is the read-only view of a resource client that the
//! URL assembler and the response body resolver consume: the endpoint, the
//! default query, the requested side-loads, the resource's JSON root names
//! and side-load map, and the cursor pagination checker.

use serde_json::Value;

use crate::rest::pagination::EndpointChecker;
use crate::rest::side_load::SideLoadDirective;

/// Borrowed settings used to build one request and normalize its response.
///
/// # Example
///
/// ```rust
/// use zendesk_api::rest::{CursorPaginationEndpoints, RequestContext};
/// use serde_json::json;
///
/// let checker = CursorPaginationEndpoints::default();
/// let query = json!({"locale": "de"});
/// let side_load = vec!["users".to_string()];
///
/// let context = RequestContext::new("https://acme.zendesk.com/api/v2", &checker)
///     .default_query(&query)
///     .side_load(&side_load);
///
/// assert_eq!(context.endpoint_uri(), "https://acme.zendesk.com/api/v2");
/// assert!(context.use_dot_json());
/// ```
#[derive(Clone, Copy)]
pub struct RequestContext<'a> {
    endpoint_uri: &'a str,
    default_query: Option<&'a Value>,
    side_load: &'a [String],
    json_api_names: Option<&'a [&'a str]>,
    side_load_map: Option<&'a [SideLoadDirective]>,
    endpoint_checker: &'a dyn EndpointChecker,
    use_dot_json: bool,
}

impl<'a> RequestContext<'a> {
    /// Creates a context with no default query, no side-loads, no JSON root
    /// names, no side-load map and `.json` paths enabled.
    #[must_use]
    pub fn new(endpoint_uri: &'a str, endpoint_checker: &'a dyn EndpointChecker) -> Self {
        Self {
            endpoint_uri,
            default_query: None,
            side_load: &[],
            json_api_names: None,
            side_load_map: None,
            endpoint_checker,
            use_dot_json: true,
        }
    }

    /// Sets the query object with the highest merge priority.
    #[must_use]
    pub const fn default_query(mut self, query: &'a Value) -> Self {
        self.default_query = Some(query);
        self
    }

    /// Sets the related resources requested through `include=`.
    #[must_use]
    pub const fn side_load(mut self, side_load: &'a [String]) -> Self {
        self.side_load = side_load;
        self
    }

    /// Sets the candidate top-level keys holding the response payload.
    #[must_use]
    pub const fn json_api_names(mut self, names: &'a [&'a str]) -> Self {
        self.json_api_names = Some(names);
        self
    }

    /// Sets the side-load directives applied to response payloads.
    #[must_use]
    pub const fn side_load_map(mut self, map: &'a [SideLoadDirective]) -> Self {
        self.side_load_map = Some(map);
        self
    }

    /// Controls whether `.json` is appended to request paths.
    #[must_use]
    pub const fn with_dot_json(mut self, enabled: bool) -> Self {
        self.use_dot_json = enabled;
        self
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint_uri(&self) -> &'a str {
        self.endpoint_uri
    }

    /// Returns the default query object, if any.
    #[must_use]
    pub const fn query(&self) -> Option<&'a Value> {
        self.default_query
    }

    /// Returns the requested side-load include names.
    #[must_use]
    pub const fn side_loads(&self) -> &'a [String] {
        self.side_load
    }

    /// Returns the candidate JSON root names, if any.
    #[must_use]
    pub const fn api_names(&self) -> Option<&'a [&'a str]> {
        self.json_api_names
    }

    /// Returns the side-load map, if any.
    #[must_use]
    pub const fn directives(&self) -> Option<&'a [SideLoadDirective]> {
        self.side_load_map
    }

    /// Returns the cursor pagination checker.
    #[must_use]
    pub const fn endpoint_checker(&self) -> &'a dyn EndpointChecker {
        self.endpoint_checker
    }

    /// Returns whether `.json` is appended to request paths.
    #[must_use]
    pub const fn use_dot_json(&self) -> bool {
        self.use_dot_json
    }
}

impl std::fmt::Debug for RequestContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("endpoint_uri", &self.endpoint_uri)
            .field("default_query", &self.default_query)
            .field("side_load", &self.side_load)
            .field("json_api_names", &self.json_api_names)
            .field("side_load_map", &self.side_load_map)
            .field("use_dot_json", &self.use_dot_json)
            .finish_non_exhaustive()
    }
}
