/// Router tests that need no database
///
/// These exercise everything that is decided before a handler queries
/// PostgreSQL: health, the admin gate and request validation. The router runs
/// over a lazy pool that never connects.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{json_request, offline_app, send, TEST_ADMIN_KEY};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = offline_app(TEST_ADMIN_KEY);

    let (status, body) = send(&app, json_request("GET", "/api/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["message"].as_str().unwrap().contains("healthy"));
}

#[tokio::test]
async fn test_admin_routes_reject_missing_key() {
    let app = offline_app(TEST_ADMIN_KEY);

    let requests = vec![
        json_request("POST", "/api/admin/tasks", Some(json!({ "name": "X" })), None),
        json_request("PATCH", "/api/admin/tasks/1", Some(json!({ "points": 5 })), None),
        json_request("DELETE", "/api/admin/tasks/1", None, None),
        json_request("GET", "/api/admin/users", None, None),
        json_request(
            "PATCH",
            "/api/admin/users/softalpha/role",
            Some(json!({ "role": "admin" })),
            None,
        ),
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} should be rejected", uri);
        assert_eq!(body["error"], "unauthorized");
    }
}

#[tokio::test]
async fn test_admin_routes_reject_wrong_key() {
    let app = offline_app(TEST_ADMIN_KEY);

    let (status, body) = send(
        &app,
        json_request("GET", "/api/admin/users", None, Some("not-the-key")),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid admin key");
}

#[tokio::test]
async fn test_admin_gate_runs_before_body_parsing() {
    let app = offline_app(TEST_ADMIN_KEY);

    // Invalid role would be a 400 if the handler ran.
    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            "/api/admin/users/softalpha/role",
            Some(json!({ "role": "overlord" })),
            Some("wrong"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unconfigured_admin_key_rejects_everything() {
    let app = offline_app("");

    for key in [None, Some(""), Some("anything")] {
        let (status, body) =
            send(&app, json_request("GET", "/api/admin/users", None, key)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "admin access is not configured");
    }
}

#[tokio::test]
async fn test_correct_key_reaches_handler_validation() {
    let app = offline_app(TEST_ADMIN_KEY);

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            "/api/admin/users/softalpha/role",
            Some(json!({ "role": "superuser" })),
            Some(TEST_ADMIN_KEY),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "role must be admin|user");

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/admin/tasks",
            Some(json!({ "type": "social" })),
            Some(TEST_ADMIN_KEY),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name is required");

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/admin/tasks",
            Some(json!({ "name": "Negative", "points": -10 })),
            Some(TEST_ADMIN_KEY),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "points");
}

#[tokio::test]
async fn test_claim_requires_user_and_task() {
    let app = offline_app(TEST_ADMIN_KEY);

    let bodies = vec![
        Some(json!({})),
        Some(json!({ "userId": "0xabc" })),
        Some(json!({ "taskId": 1 })),
        Some(json!({ "userId": "", "taskId": 1 })),
        Some(json!({ "userId": "0xabc", "taskId": null })),
        None,
    ];

    for body in bodies {
        let (status, response) =
            send(&app, json_request("POST", "/api/claim", body.clone(), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
        assert_eq!(response["message"], "userId and taskId required");
    }
}

#[tokio::test]
async fn test_claim_rejects_non_integer_task_id() {
    let app = offline_app(TEST_ADMIN_KEY);

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/claim",
            Some(json!({ "userId": "0xabc", "taskId": "follow-x" })),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "taskId must be an integer");
}

#[tokio::test]
async fn test_admin_task_body_with_wrong_field_type_is_bad_request() {
    let app = offline_app(TEST_ADMIN_KEY);

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            "/api/admin/tasks/1",
            Some(json!({ "name": "Renamed", "points": "oops" })),
            Some(TEST_ADMIN_KEY),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"].as_str().unwrap().contains("points"));

    // The name is present; the failure is about the points field.
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/admin/tasks",
            Some(json!({ "name": "Present", "points": "100" })),
            Some(TEST_ADMIN_KEY),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_ne!(body["message"], "name is required");
    assert!(body["message"].as_str().unwrap().contains("points"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = offline_app(TEST_ADMIN_KEY);

    let request = Request::builder()
        .method("POST")
        .uri("/api/claim")
        .header("content-type", "application/json")
        .body(Body::from(r#"{ "userId": "0xabc", "taskId": "#))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert_ne!(body["message"], "userId and taskId required");
}

#[tokio::test]
async fn test_claim_body_without_json_content_type_reads_as_empty() {
    let app = offline_app(TEST_ADMIN_KEY);

    let request = Request::builder()
        .method("POST")
        .uri("/api/claim")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{ "userId": "0xabc", "taskId": 1 }"#))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "userId and taskId required");
}

#[tokio::test]
async fn test_admin_task_id_must_be_an_integer() {
    let app = offline_app(TEST_ADMIN_KEY);

    let requests = vec![
        json_request(
            "PATCH",
            "/api/admin/tasks/follow-x",
            Some(json!({ "points": 5 })),
            Some(TEST_ADMIN_KEY),
        ),
        json_request("DELETE", "/api/admin/tasks/abc", None, Some(TEST_ADMIN_KEY)),
        json_request(
            "DELETE",
            "/api/admin/tasks/99999999999",
            None,
            Some(TEST_ADMIN_KEY),
        ),
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} should be rejected", uri);
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].is_string());
    }
}
