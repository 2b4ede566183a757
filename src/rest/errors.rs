//! Response classification.
//!
//! [`check_request_response`] inspects the status, status text and headers
//! of a response together with its parsed body, and either hands the body
//! back or reports a [`ResponseError`].
//!
//! # Outcomes
//!
//! | Condition                                   | Outcome                                   |
//! |---------------------------------------------|-------------------------------------------|
//! | no body, or a falsy body                    | `Err(ResponseError::EmptyResult)` (204)   |
//! | status 204 with `No Content` or no text     | `Err(ResponseError::NoContent)`           |
//! | the status cannot be read                   | `Ok(CheckedResponse::StatusUnreadable)`   |
//! | a `Retry-After` header, any status          | `Err(ResponseError::RateLimited)` (429)   |
//! | status listed in [`STATUS_MESSAGES`]        | `Err(ResponseError::Http)`                |
//! | anything else                               | `Ok(CheckedResponse::Body)`               |
//!
//! An unreadable status is reported inside `Ok`, not through `Err`. Callers
//! must match on [`CheckedResponse`] to tell it apart from a usable body.

use serde_json::Value;
use thiserror::Error;

use crate::rest::response::is_falsy;

/// Name of the remote service, as it appears in error messages.
pub const SERVICE_NAME: &str = "Zendesk";

/// Status codes reported as [`ResponseError::Http`], with their messages.
pub const STATUS_MESSAGES: &[(u16, &str)] = &[
    (400, "Bad Request"),
    (401, "Not Authorized"),
    (403, "Forbidden"),
    (404, "Item not found"),
    (405, "Method not Allowed"),
    (409, "Conflict"),
    (422, "Unprocessable Entity"),
    (429, "Too Many Requests"),
    (500, "Internal Server Error"),
    (503, "Service Unavailable"),
];

/// Returns the fixed message for a status code, if it is classified.
///
/// # Example
///
/// ```rust
/// use zendesk_api::rest::status_message;
///
/// assert_eq!(status_message(404), Some("Item not found"));
/// assert_eq!(status_message(418), None);
/// ```
#[must_use]
pub fn status_message(code: u16) -> Option<&'static str> {
    STATUS_MESSAGES
        .iter()
        .find(|(status, _)| *status == code)
        .map(|(_, message)| *message)
}

/// Failure to read a response's status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Could not read response status: {reason}")]
pub struct StatusReadError {
    /// Why the status could not be read.
    pub reason: String,
}

/// The parts of an HTTP response the checker needs.
///
/// [`HttpResponse`](crate::clients::HttpResponse) implements this; other
/// transports can too.
pub trait ResponseStatus {
    /// Returns the status code.
    ///
    /// # Errors
    ///
    /// Returns [`StatusReadError`] when the status is unavailable.
    fn status(&self) -> Result<u16, StatusReadError>;

    /// Returns the status text (reason phrase), if any.
    fn status_text(&self) -> Option<&str>;

    /// Returns the first value of a header, matched case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;
}

/// A classified failing response.
///
/// Every variant carries a status code, and the message produced by
/// `Display` is the stable, user-facing text.
///
/// # Example
///
/// ```rust
/// use zendesk_api::rest::ResponseError;
/// use serde_json::json;
///
/// let error = ResponseError::Http {
///     status_code: 404,
///     message: "Item not found",
///     result: json!({"error": "RecordNotFound"}),
/// };
/// assert_eq!(error.to_string(), "Zendesk Error (404): Item not found");
/// assert_eq!(error.status_code(), 404);
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResponseError {
    /// The response had no body at all.
    #[error("Zendesk returned an empty result")]
    EmptyResult,

    /// An explicit `204 No Content`, typically answering a delete.
    #[error("No Content")]
    NoContent {
        /// The status code of the response.
        status_code: u16,
    },

    /// A `Retry-After` header was present.
    #[error("Zendesk rate limits 200 requests per minute")]
    RateLimited {
        /// The response body.
        result: Value,
    },

    /// The status code is listed in [`STATUS_MESSAGES`].
    #[error("Zendesk Error ({status_code}): {message}")]
    Http {
        /// The status code of the response.
        status_code: u16,
        /// The fixed message for the status code.
        message: &'static str,
        /// The response body.
        result: Value,
    },
}

impl ResponseError {
    /// Returns the status code associated with the error.
    ///
    /// `EmptyResult` reports 204 and `RateLimited` reports 429 regardless
    /// of the status actually received.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::EmptyResult => 204,
            Self::NoContent { status_code } | Self::Http { status_code, .. } => *status_code,
            Self::RateLimited { .. } => 429,
        }
    }

    /// Returns the response body carried by the error, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&Value> {
        match self {
            Self::EmptyResult | Self::NoContent { .. } => None,
            Self::RateLimited { result } | Self::Http { result, .. } => Some(result),
        }
    }

    /// Returns `true` for [`ResponseError::RateLimited`].
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// The response status could not be read. Returned, never raised.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReadFailure {
    /// The error raised while reading the status.
    pub exception: StatusReadError,
    /// The status code; always `None` since it could not be read.
    pub code: Option<u16>,
    /// The response body.
    pub result: Value,
}

/// A response that was not classified as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckedResponse {
    /// A usable response body.
    Body(Value),
    /// The status could not be read; the body is attached unexamined.
    StatusUnreadable(StatusReadFailure),
}

impl CheckedResponse {
    /// Returns the usable body, or `None` for an unreadable status.
    #[must_use]
    pub fn into_body(self) -> Option<Value> {
        match self {
            Self::Body(body) => Some(body),
            Self::StatusUnreadable(_) => None,
        }
    }

    /// Returns the status read failure, if that is what this is.
    #[must_use]
    pub const fn status_read_failure(&self) -> Option<&StatusReadFailure> {
        match self {
            Self::Body(_) => None,
            Self::StatusUnreadable(failure) => Some(failure),
        }
    }
}

/// Classifies a response.
///
/// See the module documentation for the order of the checks.
///
/// # Errors
///
/// Returns [`ResponseError`] for an empty result, an explicit no-content
/// response, a rate-limited response, or a status listed in
/// [`STATUS_MESSAGES`].
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use zendesk_api::clients::HttpResponse;
/// use zendesk_api::rest::{check_request_response, CheckedResponse, ResponseError};
/// use serde_json::json;
///
/// let ok = HttpResponse::new(200, Some("OK".into()), HashMap::new(), None);
/// let checked = check_request_response(&ok, Some(json!({"user": {"id": 1}}))).unwrap();
/// assert_eq!(checked, CheckedResponse::Body(json!({"user": {"id": 1}})));
///
/// let missing = HttpResponse::new(404, None, HashMap::new(), None);
/// let error = check_request_response(&missing, Some(json!({"error": "RecordNotFound"}))).unwrap_err();
/// assert_eq!(error.to_string(), "Zendesk Error (404): Item not found");
/// ```
pub fn check_request_response<R>(
    response: &R,
    result: Option<Value>,
) -> Result<CheckedResponse, ResponseError>
where
    R: ResponseStatus + ?Sized,
{
    let result = match result {
        Some(result) if !is_falsy(&result) => result,
        _ => return Err(ResponseError::EmptyResult),
    };

    if let Ok(204) = response.status() {
        if response.status_text().unwrap_or("No Content") == "No Content" {
            return Err(ResponseError::NoContent { status_code: 204 });
        }
    }

    let status_code = match response.status() {
        Ok(status_code) => status_code,
        Err(exception) => {
            return Ok(CheckedResponse::StatusUnreadable(StatusReadFailure {
                exception,
                code: None,
                result,
            }))
        }
    };

    if let Some(retry_after) = response.header("retry-after").filter(|v| !v.is_empty()) {
        tracing::warn!(status = status_code, retry_after, "rate limited by Zendesk");
        return Err(ResponseError::RateLimited { result });
    }

    if let Some(message) = status_message(status_code) {
        return Err(ResponseError::Http {
            status_code,
            message,
            result,
        });
    }

    Ok(CheckedResponse::Body(result))
}
