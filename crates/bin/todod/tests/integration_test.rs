//! End-to-end tests for the full todod stack.
//!
//! Each test spins up the complete application (`SQLite`, real repo, real
//! service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound. Most tests use an
//! in-memory database; concurrency tests use a temporary file database.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use todo_adapter_http_axum::router;
use todo_adapter_http_axum::state::AppState;
use todo_adapter_storage_sqlite_sqlx::{Config, SqliteTodoRepository};
use todo_app::services::todo_service::TodoService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config::in_memory()
        .build()
        .await
        .expect("in-memory database should initialise");

    let repo = SqliteTodoRepository::new(db.pool().clone());
    router::build(AppState::new(TodoService::new(repo)))
}

/// Same stack on a file database with a multi-connection pool, as `todod`
/// runs by default.
async fn file_backed_app(dir: &tempfile::TempDir) -> axum::Router {
    let db = Config {
        database_url: format!("sqlite:{}?mode=rwc", dir.path().join("todod.db").display()),
        max_connections: 5,
    }
    .build()
    .await
    .expect("file database should initialise");

    let repo = SqliteTodoRepository::new(db.pool().clone());
    router::build(AppState::new(TodoService::new(repo)))
}

async fn send(app: &axum::Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let resp = send(&app, get("/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Todo API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_walk_through_full_todo_lifecycle() {
    let app = app().await;

    let resp = send(
        &app,
        with_json("POST", "/api", &json!({"title": "buy milk", "completed": false})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "title": "buy milk", "completed": false})
    );

    let resp = send(&app, get("/api")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([{"id": 1, "title": "buy milk", "completed": false}])
    );

    let resp = send(
        &app,
        with_json("PATCH", "/api/1", &json!({"title": "buy milk", "completed": true})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "title": "buy milk", "completed": true})
    );

    let resp = send(&app, delete("/api/1")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let resp = send(&app, get("/api")).await;
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn should_return_empty_array_when_no_todos() {
    let app = app().await;
    let resp = send(&app, get("/api")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn should_assign_distinct_ids_to_new_todos() {
    let app = app().await;

    let first = body_json(send(&app, with_json("POST", "/api", &json!({"title": "a"}))).await).await;
    let second = body_json(send(&app, with_json("POST", "/api", &json!({"title": "b"}))).await).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["completed"], Value::Null);

    let all = body_json(send(&app, get("/api")).await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_fetch_single_todo_by_id() {
    let app = app().await;
    let created = body_json(
        send(
            &app,
            with_json("POST", "/api", &json!({"title": "read book", "completed": true})),
        )
        .await,
    )
    .await;

    let resp = send(&app, get(&format!("/api/{}", created["id"]))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn should_ignore_id_supplied_in_body() {
    let app = app().await;
    let created = body_json(
        send(&app, with_json("POST", "/api", &json!({"id": 42, "title": "x"}))).await,
    )
    .await;
    assert_eq!(created["id"], 1);

    let patched = body_json(
        send(
            &app,
            with_json("PATCH", "/api/1", &json!({"id": 42, "title": "y", "completed": true})),
        )
        .await,
    )
    .await;
    assert_eq!(patched["id"], 1);
}

#[tokio::test]
async fn should_keep_state_when_same_patch_sent_twice() {
    let app = app().await;
    send(&app, with_json("POST", "/api", &json!({"title": "a"}))).await;
    let body = json!({"title": "b", "completed": true});

    let first = body_json(send(&app, with_json("PATCH", "/api/1", &body)).await).await;
    let second = body_json(send(&app, with_json("PATCH", "/api/1", &body)).await).await;

    assert_eq!(first, second);
    let all = body_json(send(&app, get("/api")).await).await;
    assert_eq!(all, json!([{"id": 1, "title": "b", "completed": true}]));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_id() {
    let app = app().await;
    let resp = send(&app, delete("/api/999999")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Todo 999999 not found"})
    );
}

#[tokio::test]
async fn should_return_not_found_when_patching_unknown_id() {
    let app = app().await;
    let resp = send(
        &app,
        with_json("PATCH", "/api/999999", &json!({"title": "x", "completed": true})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let all = body_json(send(&app, get("/api")).await).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_twice() {
    let app = app().await;
    send(&app, with_json("POST", "/api", &json!({"title": "a"}))).await;

    assert_eq!(send(&app, delete("/api/1")).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(send(&app, delete("/api/1")).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_bad_request_when_id_is_not_a_number() {
    let app = app().await;
    let resp = send(&app, get("/api/not-a-number")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_create_without_title() {
    let app = app().await;
    let resp = send(&app, with_json("POST", "/api", &json!({"completed": true}))).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_serve_concurrent_patches_and_deletes_on_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_backed_app(&dir).await;

    for i in 0..16 {
        let resp = send(&app, with_json("POST", "/api", &json!({"title": format!("todo {i}")}))).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let patches: Vec<_> = (1..=8)
        .map(|id| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = json!({"title": "done", "completed": true});
                send(&app, with_json("PATCH", &format!("/api/{id}"), &body)).await.status()
            })
        })
        .collect();
    let deletes: Vec<_> = (9..=16)
        .map(|id| {
            let app = app.clone();
            tokio::spawn(async move { send(&app, delete(&format!("/api/{id}"))).await.status() })
        })
        .collect();

    for handle in patches {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
    for handle in deletes {
        assert_eq!(handle.await.unwrap(), StatusCode::NO_CONTENT);
    }

    let all = body_json(send(&app, get("/api")).await).await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 8);
    assert!(all.iter().all(|todo| todo["completed"] == true));
}
