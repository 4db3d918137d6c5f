use std::sync::Arc;

use axum::body::Body;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use blogmod::api::handlers::AppState;
use blogmod::api::routes;
use blogmod::config::PaginationConfig;
use blogmod::models::*;
use blogmod::store::MemoryStore;
use blogmod::EntryService;
use serde_json::json;
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> (MemoryStore, Router) {
    let store = MemoryStore::new();
    store.insert_blog(Blog {
        id: 1,
        name: "Sunshine".to_string(),
        handle: "sunshine".to_string(),
        polarity: Polarity::Positive,
    });
    store.insert_blog(Blog {
        id: 2,
        name: "Rain".to_string(),
        handle: "rain".to_string(),
        polarity: Polarity::Negative,
    });
    let state = AppState {
        service: EntryService::new(Arc::new(store.clone())),
        pagination: PaginationConfig {
            default_page_size: 2,
            max_page_size: 3,
        },
    };
    (store, routes::app(state))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn entry_body(blog_id: i64, emoji: &str, title: &str, content: &str) -> Value {
    json!({
        "blog_id": blog_id,
        "emoji": emoji,
        "title": title,
        "content": content,
    })
}

#[tokio::test]
async fn test_health() {
    let (_store, app) = test_app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_create_entry() {
    let (store, app) = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/entries",
        Some(entry_body(1, "WOW", "sunny", "what a day")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["emoji"], "WOW");
    assert_eq!(store.entry_count(), 1);
}

#[tokio::test]
async fn test_rejections_have_distinct_keys() {
    let (store, app) = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/entries",
        Some(entry_body(1, "LIKE", "great day", "so happy")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_key"], "invalidEmoji");
    assert_eq!(body["error"], "Invalid Emoji");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/entries",
        Some(entry_body(2, "SAD", "a trust fall", "ok")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_key"], "invalidContent");

    assert_eq!(store.entry_count(), 0);
}

#[tokio::test]
async fn test_create_with_id_and_update_without_id_rejected() {
    let (_store, app) = test_app();

    let mut with_id = entry_body(1, "WOW", "a", "b");
    with_id["id"] = json!(5);
    let (status, body) = send(&app, Method::POST, "/api/entries", Some(with_id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_key"], "idexists");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/entries",
        Some(entry_body(1, "WOW", "a", "b")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_key"], "idnull");
}

#[tokio::test]
async fn test_update_entry() {
    let (_store, app) = test_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/entries",
        Some(entry_body(2, "SAD", "grey", "drizzle")),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let mut update = entry_body(2, "ANGRY", "grey again", "storm");
    update["id"] = json!(id);
    let (status, body) = send(&app, Method::PUT, "/api/entries", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "grey again");

    let mut missing = entry_body(2, "ANGRY", "x", "y");
    missing["id"] = json!(999);
    let (status, _) = send(&app, Method::PUT, "/api/entries", Some(missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_and_delete_entry() {
    let (_store, app) = test_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/entries",
        Some(entry_body(1, "SAD", "t", "c")),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/entries/{id}");

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_list_entries_uses_configured_page_sizes() {
    let (_store, app) = test_app();
    for i in 0..4 {
        send(
            &app,
            Method::POST,
            "/api/entries",
            Some(entry_body(1, "WOW", &format!("t{i}"), "c")),
        )
        .await;
    }

    let (status, body) = send(&app, Method::GET, "/api/entries", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["size"], 2);
    assert_eq!(body["data"]["total_elements"], 4);
    assert_eq!(body["data"]["content"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::GET, "/api/entries?page=0&size=50", None).await;
    assert_eq!(body["data"]["size"], 3);
    assert_eq!(body["data"]["content"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_keyword_bulk_delete() {
    let (store, app) = test_app();
    for (title, content) in [("Tea time", "green"), ("Coffee", "black TEA"), ("Water", "cold")] {
        send(
            &app,
            Method::POST,
            "/api/entries",
            Some(entry_body(1, "WOW", title, content)),
        )
        .await;
    }

    let (status, body) = send(&app, Method::DELETE, "/api/entries?keywords=tea", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted"], 2);
    assert_eq!(store.entry_count(), 1);

    let (status, body) = send(&app, Method::DELETE, "/api/entries?keywords=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_key"], "keywordsrequired");
    assert_eq!(store.entry_count(), 1);
}

#[tokio::test]
async fn test_scoped_keyword_delete() {
    let (store, app) = test_app();
    let mut ids = Vec::new();
    for (title, content) in [("Tea time", "green"), ("Water", "cold")] {
        let (_, body) = send(
            &app,
            Method::POST,
            "/api/entries",
            Some(entry_body(1, "WOW", title, content)),
        )
        .await;
        ids.push(body["data"]["id"].as_i64().unwrap());
    }

    let uri = format!("/api/entries/{}?keywords=tea", ids[1]);
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted"], false);
    assert_eq!(store.entry_count(), 2);

    let uri = format!("/api/entries/{}?keywords=tea", ids[0]);
    let (_, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(body["data"]["deleted"], true);
    assert_eq!(store.entry_count(), 1);
}

#[tokio::test]
async fn test_blog_endpoints() {
    let (_store, app) = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/blogs",
        Some(json!({"name": "Plain", "handle": "plain"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["polarity"], "unset");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/blogs/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["handle"], "plain");

    let (_, body) = send(&app, Method::GET, "/api/blogs", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (status, _) = send(&app, Method::GET, "/api/blogs/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/blogs",
        Some(json!({"name": "", "handle": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_key"], "invalidinput");
}
