//! Response body resolution.
//!
//! Zendesk wraps payloads in a root key named after the resource
//! (`{"request": {...}}`, `{"requests": [...]}`) and puts side-loaded
//! datasets next to it. [`process_response_body`] unwraps the payload and
//! fills in the side-loaded associations.
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::rest::{
//!     process_response_body, NoCursorPagination, RequestContext, SideLoadDirective,
//! };
//! use serde_json::json;
//!
//! const MAP: &[SideLoadDirective] =
//!     &[SideLoadDirective::one_to_one("requester_id", "requester", "users")];
//!
//! let raw = json!({
//!     "request": {"id": 1, "requester_id": 7},
//!     "users": [{"id": 7, "name": "Ann"}]
//! });
//!
//! let checker = NoCursorPagination;
//! let context = RequestContext::new("https://acme.zendesk.com/api/v2", &checker)
//!     .json_api_names(&["requests", "request"])
//!     .side_load_map(MAP);
//!
//! let body = process_response_body(&raw, &context);
//! assert_eq!(body["requester"]["name"], json!("Ann"));
//! ```

use serde_json::Value;

use crate::rest::context::RequestContext;
use crate::rest::side_load::populate_fields;

/// Returns `true` for `null`, `false`, `0`, `""`.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Extracts the meaningful payload from a raw response.
///
/// A falsy `raw` yields an empty string. Otherwise the value under the first
/// of the context's JSON root names present in `raw` is returned, or `raw`
/// itself when none is present or no names are configured.
#[must_use]
pub fn find_body(raw: &Value, context: &RequestContext<'_>) -> Value {
    if is_falsy(raw) {
        return Value::String(String::new());
    }

    context
        .api_names()
        .and_then(|names| names.iter().find_map(|name| raw.get(*name)))
        .unwrap_or(raw)
        .clone()
}

/// Extracts the payload with [`find_body`] and, when the context has a
/// side-load map, populates its associations from the datasets in `raw`.
#[must_use]
pub fn process_response_body(raw: &Value, context: &RequestContext<'_>) -> Value {
    let body = find_body(raw, context);

    match context.directives() {
        Some(map) => populate_fields(body, raw, map),
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::pagination::NoCursorPagination;
    use crate::rest::side_load::SideLoadDirective;
    use serde_json::json;

    const ENDPOINT: &str = "https://acme.zendesk.com/api/v2";
    const NAMES: &[&str] = &["requests", "request"];

    #[test]
    fn test_is_falsy() {
        for value in [Value::Null, json!(false), json!(0), json!(0.0), json!("")] {
            assert!(is_falsy(&value), "{value} should be falsy");
        }
        for value in [json!(true), json!(1), json!("0"), json!([]), json!({})] {
            assert!(!is_falsy(&value), "{value} should be truthy");
        }
    }

    #[test]
    fn test_find_body_falsy_is_empty_string() {
        let context = RequestContext::new(ENDPOINT, &NoCursorPagination).json_api_names(NAMES);
        assert_eq!(find_body(&Value::Null, &context), json!(""));
        assert_eq!(find_body(&json!(false), &context), json!(""));
    }

    #[test]
    fn test_find_body_uses_first_present_name() {
        let context = RequestContext::new(ENDPOINT, &NoCursorPagination).json_api_names(NAMES);
        let raw = json!({"request": {"id": 2}, "requests": [{"id": 1}]});
        assert_eq!(find_body(&raw, &context), json!([{"id": 1}]));

        let raw = json!({"request": {"id": 2}});
        assert_eq!(find_body(&raw, &context), json!({"id": 2}));
    }

    #[test]
    fn test_find_body_present_null_key_still_wins() {
        let context = RequestContext::new(ENDPOINT, &NoCursorPagination).json_api_names(NAMES);
        let raw = json!({"requests": null, "request": {"id": 2}});
        assert_eq!(find_body(&raw, &context), Value::Null);
    }

    #[test]
    fn test_find_body_falls_back_to_raw() {
        let context = RequestContext::new(ENDPOINT, &NoCursorPagination).json_api_names(NAMES);
        let raw = json!({"count": 3});
        assert_eq!(find_body(&raw, &context), raw);

        let no_names = RequestContext::new(ENDPOINT, &NoCursorPagination);
        assert_eq!(find_body(&raw, &no_names), raw);
    }

    #[test]
    fn test_process_without_side_load_map_returns_body() {
        let context = RequestContext::new(ENDPOINT, &NoCursorPagination).json_api_names(NAMES);
        let raw = json!({"requests": [{"id": 1, "requester_id": 7}], "users": [{"id": 7}]});
        assert_eq!(
            process_response_body(&raw, &context),
            json!([{"id": 1, "requester_id": 7}])
        );
    }

    #[test]
    fn test_process_populates_from_raw_envelope() {
        let map = [
            SideLoadDirective::one_to_one("requester_id", "requester", "users"),
            SideLoadDirective::one_to_one("organization_id", "organization", "organizations"),
        ];
        let context = RequestContext::new(ENDPOINT, &NoCursorPagination)
            .json_api_names(NAMES)
            .side_load_map(&map);
        let raw = json!({
            "requests": [
                {"id": 1, "requester_id": 7, "organization_id": 3},
                {"id": 2, "requester_id": 8}
            ],
            "users": [{"id": 7, "name": "Ann"}],
            "organizations": [{"id": 3, "name": "Acme"}]
        });

        assert_eq!(
            process_response_body(&raw, &context),
            json!([
                {
                    "id": 1,
                    "requester_id": 7,
                    "organization_id": 3,
                    "requester": {"id": 7, "name": "Ann"},
                    "organization": {"id": 3, "name": "Acme"}
                },
                {"id": 2, "requester_id": 8, "requester": null}
            ])
        );
    }

    #[test]
    fn test_process_falsy_raw_with_side_load_map() {
        let map = [SideLoadDirective::one_to_one("user_id", "user", "users")];
        let context = RequestContext::new(ENDPOINT, &NoCursorPagination).side_load_map(&map);
        assert_eq!(process_response_body(&Value::Null, &context), json!(""));
    }
}
