//! HTTP response types for the Zendesk API SDK.
//!
//! This module provides the [`HttpResponse`] type handed from the transport
//! to the response checker.

use std::collections::HashMap;

use crate::rest::{ResponseStatus, StatusReadError};

/// Rate limit information parsed from the `X-Rate-Limit` and
/// `X-Rate-Limit-Remaining` headers.
///
/// # Example
///
/// ```rust
/// use zendesk_api::clients::RateLimitInfo;
///
/// let info = RateLimitInfo::parse("700", "699").unwrap();
/// assert_eq!(info.limit, 700);
/// assert_eq!(info.remaining, 699);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests allowed per minute for the account.
    pub limit: u32,
    /// Requests remaining in the current minute.
    pub remaining: u32,
}

impl RateLimitInfo {
    /// Parses the two rate limit header values.
    ///
    /// Returns `None` if either value is not an unsigned integer.
    #[must_use]
    pub fn parse(limit: &str, remaining: &str) -> Option<Self> {
        Some(Self {
            limit: limit.trim().parse().ok()?,
            remaining: remaining.trim().parse().ok()?,
        })
    }
}

/// An HTTP response from the Zendesk API.
///
/// Header names are stored lower-cased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The reason phrase, e.g. `No Content`.
    pub status_text: Option<String>,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body, `None` when the body was empty.
    pub body: Option<serde_json::Value>,
    /// Rate limit information, when both rate limit headers are present.
    pub rate_limit: Option<RateLimitInfo>,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit and
    /// `Retry-After` headers.
    #[must_use]
    pub fn new(
        code: u16,
        status_text: Option<String>,
        headers: HashMap<String, Vec<String>>,
        body: Option<serde_json::Value>,
    ) -> Self {
        let rate_limit = first_header(&headers, "x-rate-limit")
            .zip(first_header(&headers, "x-rate-limit-remaining"))
            .and_then(|(limit, remaining)| RateLimitInfo::parse(limit, remaining));

        let retry_request_after =
            first_header(&headers, "retry-after").and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            status_text,
            headers,
            body,
            rate_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, &name.to_ascii_lowercase())
    }

    /// Returns the `X-Zendesk-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in support tickets.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-zendesk-request-id")
    }
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}

impl ResponseStatus for HttpResponse {
    fn status(&self) -> Result<u16, StatusReadError> {
        Ok(self.code)
    }

    fn status_text(&self) -> Option<&str> {
        self.status_text.as_deref()
    }

    fn header(&self, name: &str) -> Option<&str> {
        Self::header(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, None, HashMap::new(), None);
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 429, 500, 503] {
            let response = HttpResponse::new(code, None, HashMap::new(), None);
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_rate_limit_parsing() {
        let response = HttpResponse::new(
            200,
            Some("OK".to_string()),
            headers(&[("x-rate-limit", "700"), ("x-rate-limit-remaining", "12")]),
            Some(json!({})),
        );
        assert_eq!(
            response.rate_limit,
            Some(RateLimitInfo {
                limit: 700,
                remaining: 12
            })
        );

        assert!(RateLimitInfo::parse("abc", "1").is_none());
        assert!(RateLimitInfo::parse("700", "").is_none());
    }

    #[test]
    fn test_rate_limit_requires_both_headers() {
        let response = HttpResponse::new(200, None, headers(&[("x-rate-limit", "700")]), None);
        assert!(response.rate_limit.is_none());
    }

    #[test]
    fn test_retry_after_parsing() {
        let response = HttpResponse::new(429, None, headers(&[("retry-after", "2.5")]), None);
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            None,
            headers(&[("x-zendesk-request-id", "req-123")]),
            None,
        );
        assert_eq!(response.header("X-Zendesk-Request-Id"), Some("req-123"));
        assert_eq!(response.request_id(), Some("req-123"));
        assert!(response.header("retry-after").is_none());
    }

    #[test]
    fn test_response_status_trait_reports_code_and_text() {
        let response = HttpResponse::new(204, Some("No Content".to_string()), HashMap::new(), None);
        assert_eq!(ResponseStatus::status(&response).unwrap(), 204);
        assert_eq!(ResponseStatus::status_text(&response), Some("No Content"));
    }
}
