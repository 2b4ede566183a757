//! Cursor pagination support detection.
//!
//! Only some listing endpoints accept `page[size]`. The URL assembler asks
//! an [`EndpointChecker`] whether the joined request path is one of them
//! before adding the page size hint to a GET request.

/// Page size requested from cursor-paginated endpoints.
pub const CURSOR_PAGE_SIZE: u32 = 100;

/// Answers whether a request path supports cursor pagination.
///
/// `path` is the request's path segments joined with `/`, without the
/// endpoint prefix or the `.json` extension (e.g. `users/5/requests`).
pub trait EndpointChecker: Send + Sync {
    /// Returns `true` if `path` accepts `page[size]`.
    fn supports_cursor_pagination(&self, path: &str) -> bool;
}

/// Listing endpoints of the Zendesk Support API known to accept cursor
/// pagination. `*` matches exactly one path segment.
pub const DEFAULT_CURSOR_PAGINATION_PATTERNS: &[&str] = &[
    "tickets",
    "tickets/*/audits",
    "tickets/*/comments",
    "ticket_audits",
    "ticket_fields",
    "users",
    "users/*/requests",
    "users/*/organization_memberships",
    "users/*/group_memberships",
    "user_fields",
    "organizations",
    "organizations/*/requests",
    "organizations/*/organization_memberships",
    "organizations/*/users",
    "organization_fields",
    "organization_memberships",
    "requests",
    "requests/*/comments",
    "groups",
    "groups/*/memberships",
    "group_memberships",
    "views",
    "macros",
    "triggers",
    "automations",
    "satisfaction_ratings",
];

/// An [`EndpointChecker`] backed by a list of path patterns.
///
/// # Example
///
/// ```rust
/// use zendesk_api::rest::{CursorPaginationEndpoints, EndpointChecker};
///
/// let checker = CursorPaginationEndpoints::default();
/// assert!(checker.supports_cursor_pagination("users/42/requests"));
/// assert!(!checker.supports_cursor_pagination("users/42"));
///
/// let custom = CursorPaginationEndpoints::with_patterns(&["widgets/*/parts"]);
/// assert!(custom.supports_cursor_pagination("widgets/7/parts"));
/// ```
#[derive(Clone, Debug)]
pub struct CursorPaginationEndpoints {
    patterns: Vec<Vec<String>>,
}

impl CursorPaginationEndpoints {
    /// Creates a checker from custom patterns.
    #[must_use]
    pub fn with_patterns(patterns: &[&str]) -> Self {
        Self {
            patterns: patterns
                .iter()
                .map(|pattern| pattern.split('/').map(String::from).collect())
                .collect(),
        }
    }
}

impl Default for CursorPaginationEndpoints {
    fn default() -> Self {
        Self::with_patterns(DEFAULT_CURSOR_PAGINATION_PATTERNS)
    }
}

impl EndpointChecker for CursorPaginationEndpoints {
    fn supports_cursor_pagination(&self, path: &str) -> bool {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        self.patterns.iter().any(|pattern| {
            pattern.len() == segments.len()
                && pattern
                    .iter()
                    .zip(&segments)
                    .all(|(expected, actual)| expected == "*" || expected.as_str() == *actual)
        })
    }
}

/// A checker that never reports cursor pagination support.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCursorPagination;

impl EndpointChecker for NoCursorPagination {
    fn supports_cursor_pagination(&self, _path: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns_match_top_level_listings() {
        let checker = CursorPaginationEndpoints::default();
        assert!(checker.supports_cursor_pagination("tickets"));
        assert!(checker.supports_cursor_pagination("users"));
        assert!(checker.supports_cursor_pagination("organization_memberships"));
    }

    #[test]
    fn test_wildcard_matches_one_segment() {
        let checker = CursorPaginationEndpoints::default();
        assert!(checker.supports_cursor_pagination("organizations/17/requests"));
        assert!(!checker.supports_cursor_pagination("organizations/17/18/requests"));
    }

    #[test]
    fn test_show_and_action_paths_do_not_match() {
        let checker = CursorPaginationEndpoints::default();
        assert!(!checker.supports_cursor_pagination("users/5"));
        assert!(!checker.supports_cursor_pagination("requests/search"));
        assert!(!checker.supports_cursor_pagination(""));
    }

    #[test]
    fn test_ignores_surrounding_slashes() {
        let checker = CursorPaginationEndpoints::default();
        assert!(checker.supports_cursor_pagination("/tickets/"));
    }

    #[test]
    fn test_no_cursor_pagination_checker() {
        assert!(!NoCursorPagination.supports_cursor_pagination("tickets"));
    }
}
