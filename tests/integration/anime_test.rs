//! Anime CRUD endpoint tests.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::{TestApp, assert_error_body};

const TITLE: &str = "Tensei Shitara Slime Datta Ken";

#[tokio::test]
async fn test_list_empty() {
    let app = TestApp::new();

    let (status, body) = app.request("GET", "/animes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_is_ordered_by_name() {
    let app = TestApp::new();
    app.seed("Overlord").await;
    app.seed("Made in Abyss").await;

    let (status, body) = app.request("GET", "/animes", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|a| a["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Made in Abyss", "Overlord"]);
}

#[tokio::test]
async fn test_get_by_id() {
    let app = TestApp::new();
    let seeded = app.seed(TITLE).await;
    let id = seeded.id.expect("seeded id");

    let (status, body) = app.request("GET", &format!("/animes/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": id, "name": TITLE }));
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let app = TestApp::new();
    let id = Uuid::new_v4();
    let path = format!("/animes/{id}");

    let (status, body) = app.request("GET", &path, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(
        &body,
        404,
        "Resource Not Found",
        &format!("could not find anime with id {id}"),
        &path,
    );
}

#[tokio::test]
async fn test_get_malformed_id_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app.request("GET", "/animes/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(
        &body,
        400,
        "Service Validation Exception",
        "Invalid UUID: not-a-uuid",
        "/animes/not-a-uuid",
    );
}

#[tokio::test]
async fn test_create_assigns_id() {
    let app = TestApp::new();

    let (status, body) = app
        .request("POST", "/animes", Some(json!({ "name": TITLE })))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], TITLE);
    let id: Uuid = body["id"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("generated id");

    let (status, _) = app.request("GET", &format!("/animes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_with_empty_name_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .request("POST", "/animes", Some(json!({ "name": "" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(
        &body,
        400,
        "Service Validation Exception",
        "name cannot be empty",
        "/animes",
    );
    assert_eq!(app.repo.saves(), 0);
}

#[tokio::test]
async fn test_create_without_name_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app.request("POST", "/animes", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name cannot be empty");
    assert_eq!(app.repo.saves(), 0);
}

#[tokio::test]
async fn test_create_with_malformed_json_is_rejected() {
    let app = TestApp::new();
    let request = http::Request::builder()
        .method("POST")
        .uri("/animes")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"name\":"))
        .expect("request");

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Service Validation Exception");
    assert_eq!(body["path"], "/animes");
    assert_eq!(app.repo.saves(), 0);
}

#[tokio::test]
async fn test_create_batch() {
    let app = TestApp::new();

    let (status, body) = app
        .request(
            "POST",
            "/animes/batch",
            Some(json!([{ "name": "Overlord" }, { "name": "Made in Abyss" }])),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let saved = body.as_array().expect("array");
    assert_eq!(saved.len(), 2);
    assert!(saved.iter().all(|a| a["id"].is_string()));
    assert_eq!(saved[0]["name"], "Overlord");
    assert_eq!(saved[1]["name"], "Made in Abyss");

    let (_, listed) = app.request("GET", "/animes", None).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_create_batch_with_one_empty_name_saves_nothing() {
    let app = TestApp::new();

    let (status, body) = app
        .request(
            "POST",
            "/animes/batch",
            Some(json!([{ "name": "Overlord" }, { "name": "" }])),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name cannot be empty");
    assert_eq!(app.repo.saves(), 0);

    let (_, listed) = app.request("GET", "/animes", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_update_replaces_name() {
    let app = TestApp::new();
    let id = app.seed(TITLE).await.id.expect("seeded id");
    let path = format!("/animes/{id}");

    let (status, body) = app
        .request("PUT", &path, Some(json!({ "name": format!("{TITLE} 2") })))
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (_, found) = app.request("GET", &path, None).await;
    assert_eq!(found["name"], format!("{TITLE} 2"));
}

#[tokio::test]
async fn test_update_path_id_wins_over_body_id() {
    let app = TestApp::new();
    let id = app.seed(TITLE).await.id.expect("seeded id");
    let other = Uuid::new_v4();

    let (status, _) = app
        .request(
            "PUT",
            &format!("/animes/{id}"),
            Some(json!({ "id": other, "name": "Renamed" })),
        )
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.request("GET", &format!("/animes/{other}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, found) = app.request("GET", &format!("/animes/{id}"), None).await;
    assert_eq!(found["name"], "Renamed");
}

#[tokio::test]
async fn test_update_unknown_is_not_found_and_never_saves() {
    let app = TestApp::new();
    let id = Uuid::new_v4();
    let path = format!("/animes/{id}");

    let (status, body) = app
        .request("PUT", &path, Some(json!({ "name": TITLE })))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(
        &body,
        404,
        "Resource Not Found",
        &format!("could not find anime with id {id}"),
        &path,
    );
    assert_eq!(app.repo.saves(), 0);
}

#[tokio::test]
async fn test_update_with_empty_name_is_rejected() {
    let app = TestApp::new();
    let id = app.seed(TITLE).await.id.expect("seeded id");

    let (status, body) = app
        .request("PUT", &format!("/animes/{id}"), Some(json!({ "name": "" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name cannot be empty");
    assert_eq!(app.repo.saves(), 0);
}

#[tokio::test]
async fn test_delete() {
    let app = TestApp::new();
    let id = app.seed(TITLE).await.id.expect("seeded id");
    let path = format!("/animes/{id}");

    let (status, _) = app.request("DELETE", &path, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.repo.deletes(), 1);

    let (status, _) = app.request("GET", &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_is_not_found_and_never_deletes() {
    let app = TestApp::new();
    let id = Uuid::new_v4();
    let path = format!("/animes/{id}");

    let (status, body) = app.request("DELETE", &path, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(
        &body,
        404,
        "Resource Not Found",
        &format!("could not find anime with id {id}"),
        &path,
    );
    assert_eq!(app.repo.deletes(), 0);
}

#[tokio::test]
async fn test_unsupported_method_uses_error_body() {
    let app = TestApp::new();

    let (status, body) = app
        .request("PATCH", "/animes", Some(json!({ "name": "x" })))
        .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_error_body(
        &body,
        405,
        "Method Not Allowed",
        "method PATCH not allowed on /animes",
        "/animes",
    );
    assert_eq!(app.repo.saves(), 0);
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let app = TestApp::new();
    let name = "a".repeat(3 * 1024 * 1024);

    let (status, body) = app
        .request("POST", "/animes", Some(json!({ "name": name })))
        .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["status"], 413);
    assert_eq!(body["error"], "Payload Too Large");
    assert_eq!(body["path"], "/animes");
    assert_eq!(app.repo.saves(), 0);
}

#[tokio::test]
async fn test_missing_content_type_is_validation_error() {
    let app = TestApp::new();
    let request = http::Request::builder()
        .method("POST")
        .uri("/animes")
        .body(axum::body::Body::from("{\"name\":\"Overlord\"}"))
        .expect("request");

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Service Validation Exception");
    assert_eq!(app.repo.saves(), 0);
}
