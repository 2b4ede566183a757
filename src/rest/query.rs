//! Query string serialization.
//!
//! Nested objects use bracket notation (`page[size]=100`) and arrays are
//! comma-joined without index keys (`ids=1,2,3`). Key names and values are
//! percent-encoded component by component, so the structural `[`, `]` and
//! `,` stay readable while the same characters inside user data are escaped.
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::rest::serialize;
//! use serde_json::json;
//!
//! assert_eq!(serialize(&json!({"a": {"b": 2}}), ""), "a[b]=2");
//! assert_eq!(serialize(&json!({"ids": [1, 2, 3, 4]}), ""), "ids=1,2,3,4");
//! assert_eq!(serialize(&json!("test"), "key"), "key=test");
//! ```

use std::borrow::Cow;

use serde_json::Value;

/// Serializes a query value into a query string.
///
/// - Scalars (including `null`) produce `prefix=value`.
/// - Arrays produce `prefix=v1,v2,...`.
/// - Objects recurse over their entries in insertion order, nesting keys as
///   `prefix[key]`, and join the parts with `&`.
#[must_use]
pub fn serialize(value: &Value, prefix: &str) -> String {
    serialize_with_encoded_prefix(value, &encode(prefix))
}

fn serialize_with_encoded_prefix(value: &Value, prefix: &str) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, nested)| {
                let nested_key = if prefix.is_empty() {
                    encode(key).into_owned()
                } else {
                    format!("{prefix}[{}]", encode(key))
                };
                serialize_with_encoded_prefix(nested, &nested_key)
            })
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("&"),
        Value::Array(items) => format!("{prefix}={}", join_list(items)),
        scalar => format!("{prefix}={}", encode(&scalar_text(scalar))),
    }
}

fn join_list(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::Array(nested) => join_list(nested),
            other => encode(&scalar_text(other)).into_owned(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed("null"),
        other => Cow::Owned(other.to_string()),
    }
}

fn encode(component: &str) -> Cow<'_, str> {
    urlencoding::encode(component)
}

/// Merges query fragments key by key.
///
/// The first fragment is taken as-is (duplicate keys included). Every pair
/// of each later fragment overwrites the first same-named pair already
/// present and removes any further duplicates, or is appended when the key
/// is new. Keys are compared after percent-decoding, so `page%5Bsize%5D`
/// and `page[size]` collide. A leading `?` on a fragment is ignored and
/// empty fragments contribute nothing.
///
/// # Example
///
/// ```rust
/// use zendesk_api::rest::merge_query_parameters;
///
/// let merged = merge_query_parameters(&["a=1&b=2", "b=3&c=4"]);
/// assert_eq!(merged, "a=1&b=3&c=4");
/// ```
#[must_use]
pub fn merge_query_parameters(fragments: &[&str]) -> String {
    let mut fragments = fragments.iter();
    let mut merged: Vec<QueryPair<'_>> = fragments
        .next()
        .map(|base| parse_pairs(base).collect())
        .unwrap_or_default();

    for fragment in fragments {
        for pair in parse_pairs(fragment) {
            set_pair(&mut merged, pair);
        }
    }

    merged
        .iter()
        .map(|pair| format!("{}={}", pair.raw_key, pair.raw_value))
        .collect::<Vec<_>>()
        .join("&")
}

struct QueryPair<'a> {
    raw_key: &'a str,
    raw_value: &'a str,
    key: Cow<'a, str>,
}

fn parse_pairs(fragment: &str) -> impl Iterator<Item = QueryPair<'_>> {
    fragment
        .strip_prefix('?')
        .unwrap_or(fragment)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            QueryPair {
                raw_key,
                raw_value,
                key: decode_key(raw_key),
            }
        })
}

fn decode_key(raw_key: &str) -> Cow<'_, str> {
    if !raw_key.contains(['%', '+']) {
        return Cow::Borrowed(raw_key);
    }
    let spaced = raw_key.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(_) => Cow::Borrowed(raw_key),
    }
}

fn set_pair<'a>(merged: &mut Vec<QueryPair<'a>>, pair: QueryPair<'a>) {
    let Some(first) = merged.iter().position(|existing| existing.key == pair.key) else {
        merged.push(pair);
        return;
    };

    merged[first].raw_value = pair.raw_value;
    let mut index = 0;
    merged.retain(|existing| {
        let keep = index <= first || existing.key != pair.key;
        index += 1;
        keep
    });
}
