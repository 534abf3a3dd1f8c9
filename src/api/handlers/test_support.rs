//! Shared fixtures for handler tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{CategoryRepository, Database, NewQuestion, QuestionRepository, SqliteDatabase};
use crate::selection::{PickPolicy, QuizPicker};

/// Migrated in-memory database with no rows.
pub async fn empty_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    db
}

/// Categories `{1: Science, 2: Art}` and `count` questions in category 1,
/// inserted in id order.
pub async fn science_db(count: i64) -> SqliteDatabase {
    let db = empty_db().await;
    db.categories().create("Science").await.unwrap();
    db.categories().create("Art").await.unwrap();
    for i in 1..=count {
        insert(&db, &format!("Science question {}", i), 1).await;
    }
    db
}

pub async fn insert(db: &SqliteDatabase, text: &str, category: i64) -> i64 {
    db.questions()
        .create(&NewQuestion {
            question: text.to_string(),
            answer: format!("Answer to {}", text),
            category,
            difficulty: 1,
        })
        .await
        .unwrap()
        .id
}

/// Router over `db` with the deterministic pick policy.
pub fn app(db: SqliteDatabase) -> Router {
    app_with_policy(db, PickPolicy::First)
}

pub fn app_with_policy(db: SqliteDatabase, policy: PickPolicy) -> Router {
    routes::create_router(AppState::new(db, QuizPicker::new(policy)))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
    )
    .await
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("Expected questions array")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert_eq!(body["message"], message);
}
