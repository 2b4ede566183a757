//! Request URL assembly.
//!
//! [`assemble_url`] combines the endpoint, path segments, a trailing query,
//! the cursor pagination hint, side-load includes and the default query into
//! one request URL. Query sources are merged key by key in ascending
//! priority:
//!
//! 1. the trailing query of the [`UriSpec`]
//! 2. `page[size]=100` for cursor-paginated GET requests
//! 3. `include=<side-loads>`
//! 4. the context's default query
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::clients::HttpMethod;
//! use zendesk_api::rest::{assemble_url, NoCursorPagination, RequestContext, UriSpec};
//!
//! let checker = NoCursorPagination;
//! let side_load = vec!["users".to_string(), "organizations".to_string()];
//! let context = RequestContext::new("https://acme.zendesk.com/api/v2", &checker)
//!     .side_load(&side_load);
//!
//! let uri = UriSpec::path(["requests", "42"]);
//! assert_eq!(
//!     assemble_url(&context, HttpMethod::Get, &uri),
//!     "https://acme.zendesk.com/api/v2/requests/42.json?include=users,organizations"
//! );
//! ```

use std::borrow::Cow;
use std::fmt::Display;

use serde_json::{json, Value};

use crate::clients::HttpMethod;
use crate::rest::context::RequestContext;
use crate::rest::pagination::CURSOR_PAGE_SIZE;
use crate::rest::query::{merge_query_parameters, serialize};

/// The query element that may terminate a path.
#[derive(Clone, Debug, PartialEq)]
pub enum TrailingQuery {
    /// A query object, serialized with bracket notation.
    Object(Value),
    /// A raw query string, used verbatim (without its leading `?`).
    Raw(String),
}

/// One element of a request descriptor, see [`UriSpec::from_parts`].
#[derive(Clone, Debug, PartialEq)]
pub enum UriPart {
    /// A path segment. A final segment starting with `?` is a raw query.
    Segment(String),
    /// A query object; only meaningful as the final element.
    Query(Value),
}

impl From<&str> for UriPart {
    fn from(segment: &str) -> Self {
        Self::Segment(segment.to_string())
    }
}

impl From<String> for UriPart {
    fn from(segment: String) -> Self {
        Self::Segment(segment)
    }
}

impl From<u64> for UriPart {
    fn from(id: u64) -> Self {
        Self::Segment(id.to_string())
    }
}

impl From<Value> for UriPart {
    fn from(query: Value) -> Self {
        Self::Query(query)
    }
}

/// Describes the request target.
///
/// Either a plain string, returned unchanged by [`assemble_url`] when it
/// already contains the endpoint, or an ordered list of path segments with
/// at most one trailing query.
#[derive(Clone, Debug, PartialEq)]
pub enum UriSpec {
    /// A plain string: a full URL or a single path segment.
    Url(String),
    /// Path segments plus an optional trailing query.
    Segments {
        /// Path segments in order. Empty segments are dropped when joining.
        segments: Vec<String>,
        /// The trailing query, if any.
        query: Option<TrailingQuery>,
    },
}

impl UriSpec {
    /// Creates a descriptor from path segments.
    #[must_use]
    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Display,
    {
        Self::Segments {
            segments: segments.into_iter().map(|s| s.to_string()).collect(),
            query: None,
        }
    }

    /// Creates a descriptor from a plain string.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Creates a descriptor from a list of parts, interpreting the final one:
    ///
    /// - a [`UriPart::Query`] becomes the trailing query object;
    /// - a segment starting with `?` becomes a raw trailing query;
    /// - an empty final segment is dropped;
    /// - anything else stays a path segment.
    ///
    /// Query parts anywhere but the end are ignored.
    #[must_use]
    pub fn from_parts(mut parts: Vec<UriPart>) -> Self {
        let query = match parts.pop() {
            Some(UriPart::Query(query)) => Some(TrailingQuery::Object(query)),
            Some(UriPart::Segment(segment)) => match segment.strip_prefix('?') {
                Some(raw) => Some(TrailingQuery::Raw(raw.to_string())),
                None => {
                    if !segment.is_empty() {
                        parts.push(UriPart::Segment(segment));
                    }
                    None
                }
            },
            None => None,
        };

        let segments = parts
            .into_iter()
            .filter_map(|part| match part {
                UriPart::Segment(segment) => Some(segment),
                UriPart::Query(_) => None,
            })
            .collect();

        Self::Segments { segments, query }
    }

    /// Appends a path segment. A plain-string descriptor becomes the first segment.
    #[must_use]
    pub fn segment(self, segment: impl Display) -> Self {
        let (mut segments, query) = self.into_segments();
        segments.push(segment.to_string());
        Self::Segments { segments, query }
    }

    /// Sets the trailing query object.
    #[must_use]
    pub fn with_query(self, query: Value) -> Self {
        let (segments, _) = self.into_segments();
        Self::Segments {
            segments,
            query: Some(TrailingQuery::Object(query)),
        }
    }

    /// Sets a raw trailing query string. A leading `?` is stripped.
    #[must_use]
    pub fn with_query_string(self, query: impl AsRef<str>) -> Self {
        let query = query.as_ref();
        let (segments, _) = self.into_segments();
        Self::Segments {
            segments,
            query: Some(TrailingQuery::Raw(
                query.strip_prefix('?').unwrap_or(query).to_string(),
            )),
        }
    }

    fn into_segments(self) -> (Vec<String>, Option<TrailingQuery>) {
        match self {
            Self::Url(url) => (vec![url], None),
            Self::Segments { segments, query } => (segments, query),
        }
    }
}

impl From<&str> for UriSpec {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for UriSpec {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<Vec<UriPart>> for UriSpec {
    fn from(parts: Vec<UriPart>) -> Self {
        Self::from_parts(parts)
    }
}

/// Builds the full request URL.
///
/// A [`UriSpec::Url`] that already contains the context's endpoint is
/// returned unchanged. Otherwise the non-empty segments are joined with `/`,
/// `.json` is appended unless disabled, the result is prefixed with the
/// endpoint and the merged query (see the module docs) is appended when it
/// is not empty.
#[must_use]
pub fn assemble_url(context: &RequestContext<'_>, method: HttpMethod, uri: &UriSpec) -> String {
    let endpoint_uri = context.endpoint_uri();

    let (segments, query_string): (Vec<&str>, Cow<'_, str>) = match uri {
        UriSpec::Url(url) => {
            if url.contains(endpoint_uri) {
                return url.clone();
            }
            (vec![url.as_str()], Cow::Borrowed(""))
        }
        UriSpec::Segments { segments, query } => {
            let query_string = match query {
                Some(TrailingQuery::Object(object)) => Cow::Owned(serialize(object, "")),
                Some(TrailingQuery::Raw(raw)) => Cow::Borrowed(raw.as_str()),
                None => Cow::Borrowed(""),
            };
            (segments.iter().map(String::as_str).collect(), query_string)
        }
    };

    let pagination = if method == HttpMethod::Get
        && context
            .endpoint_checker()
            .supports_cursor_pagination(&segments.join("/"))
    {
        serialize(&json!({ "page": { "size": CURSOR_PAGE_SIZE } }), "")
    } else {
        String::new()
    };

    let side_load = if context.side_loads().is_empty() {
        String::new()
    } else {
        format!("include={}", context.side_loads().join(","))
    };

    let default_query = context
        .query()
        .map(|query| serialize(query, ""))
        .unwrap_or_default();

    let merged = merge_query_parameters(&[
        query_string.as_ref(),
        pagination.as_str(),
        side_load.as_str(),
        default_query.as_str(),
    ]);

    let path = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");
    let extension = if context.use_dot_json() { ".json" } else { "" };
    let base_path = format!("{endpoint_uri}/{path}{extension}");

    let url = if merged.is_empty() {
        base_path
    } else {
        format!("{base_path}?{merged}")
    };

    tracing::debug!(method = method.as_str(), url = %url, "assembled request url");
    url
}
