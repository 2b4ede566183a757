//! Integration tests for response checking and body resolution.
//!
//! These tests run transport responses through `check_request_response` and
//! `process_response_body` the way a resource client does.

use std::collections::HashMap;

use serde_json::{json, Value};
use zendesk_api::clients::HttpResponse;
use zendesk_api::rest::{
    check_request_response, populate_fields, process_response_body, CheckedResponse,
    NoCursorPagination, RequestContext, ResponseError, SideLoadDirective,
};

const ENDPOINT: &str = "https://acme.zendesk.com/api/v2";

const MEMBERSHIP_MAP: &[SideLoadDirective] = &[
    SideLoadDirective::one_to_one("user_id", "user", "users"),
    SideLoadDirective::one_to_one("organization_id", "organization", "organizations"),
];

fn response(code: u16, status_text: Option<&str>, headers: &[(&str, &str)]) -> HttpResponse {
    let headers = headers
        .iter()
        .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
        .collect::<HashMap<_, _>>();
    HttpResponse::new(code, status_text.map(String::from), headers, None)
}

// ============================================================================
// Response Checking
// ============================================================================

#[test]
fn test_missing_result_is_empty_result_for_any_response() {
    for response in [
        response(200, Some("OK"), &[]),
        response(204, Some("No Content"), &[]),
        response(429, None, &[("retry-after", "5")]),
        response(500, Some("Internal Server Error"), &[]),
    ] {
        let error = check_request_response(&response, None).unwrap_err();
        assert_eq!(error, ResponseError::EmptyResult);
        assert_eq!(error.to_string(), "Zendesk returned an empty result");
    }
}

#[test]
fn test_retry_after_on_200_is_rate_limited() {
    let response = response(200, Some("OK"), &[("retry-after", "60")]);
    let error = check_request_response(&response, Some(json!({"tickets": []}))).unwrap_err();
    assert_eq!(error.status_code(), 429);
    assert_eq!(error.result(), Some(&json!({"tickets": []})));
    assert_eq!(response.retry_request_after, Some(60.0));
}

#[test]
fn test_every_table_status_maps_to_http_error() {
    let expected = [
        (400, "Zendesk Error (400): Bad Request"),
        (401, "Zendesk Error (401): Not Authorized"),
        (403, "Zendesk Error (403): Forbidden"),
        (404, "Zendesk Error (404): Item not found"),
        (405, "Zendesk Error (405): Method not Allowed"),
        (409, "Zendesk Error (409): Conflict"),
        (422, "Zendesk Error (422): Unprocessable Entity"),
        (429, "Zendesk Error (429): Too Many Requests"),
        (500, "Zendesk Error (500): Internal Server Error"),
        (503, "Zendesk Error (503): Service Unavailable"),
    ];
    for (code, message) in expected {
        let error = check_request_response(&response(code, None, &[]), Some(json!({"error": "x"})))
            .unwrap_err();
        assert_eq!(error.status_code(), code);
        assert_eq!(error.to_string(), message);
    }
}

#[test]
fn test_no_content_carries_response_status() {
    let error = check_request_response(&response(204, None, &[]), Some(json!({"ok": 1}))).unwrap_err();
    assert_eq!(error, ResponseError::NoContent { status_code: 204 });
}

// ============================================================================
// Body Resolution
// ============================================================================

#[test]
fn test_checked_body_is_unwrapped_and_side_loaded() {
    let raw = json!({
        "organization_memberships": [
            {"id": 1, "user_id": 9, "organization_id": 3},
            {"id": 2, "user_id": 10, "organization_id": 3}
        ],
        "users": [{"id": 9, "name": "Ann"}, {"id": 10, "name": "Bo"}],
        "organizations": [{"id": 3, "name": "Acme"}]
    });

    let checked = check_request_response(&response(200, Some("OK"), &[]), Some(raw)).unwrap();
    let CheckedResponse::Body(raw) = checked else {
        panic!("expected a body");
    };

    let checker = NoCursorPagination;
    let context = RequestContext::new(ENDPOINT, &checker)
        .json_api_names(&["organization_memberships", "organization_membership"])
        .side_load_map(MEMBERSHIP_MAP);
    let body = process_response_body(&raw, &context);

    assert_eq!(body[0]["user"]["name"], json!("Ann"));
    assert_eq!(body[1]["user"]["name"], json!("Bo"));
    assert_eq!(body[0]["organization"], json!({"id": 3, "name": "Acme"}));
    assert_eq!(body[1]["organization"], json!({"id": 3, "name": "Acme"}));
}

#[test]
fn test_record_without_source_fields_is_untouched() {
    let raw = json!({
        "organization_membership": {"id": 1, "default": true},
        "users": [{"id": 9}]
    });
    let checker = NoCursorPagination;
    let context = RequestContext::new(ENDPOINT, &checker)
        .json_api_names(&["organization_memberships", "organization_membership"])
        .side_load_map(MEMBERSHIP_MAP);

    assert_eq!(
        process_response_body(&raw, &context),
        json!({"id": 1, "default": true})
    );
}

#[test]
fn test_one_to_many_preserves_dataset_order() {
    let map = [SideLoadDirective::one_to_many("id", "comments", "comments").with_data_key("request_id")];
    let response = json!({
        "comments": [
            {"id": 30, "request_id": 1},
            {"id": 10, "request_id": 2},
            {"id": 20, "request_id": 1}
        ]
    });
    let record = populate_fields(json!({"id": 1}), &response, &map);
    let ids: Vec<Value> = record["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|comment| comment["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!(30), json!(20)]);
}
