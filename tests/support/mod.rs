#![allow(dead_code)]

//! In-process stand-in for the remote users endpoint.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

/// Canned responses per operation plus a log of every request received.
#[derive(Debug)]
pub struct MockUsersApi {
    pub list_status: StatusCode,
    pub list_body: Value,
    pub delete_status: StatusCode,
    pub update_status: StatusCode,
    /// Body returned by PUT; `None` echoes the request body back.
    pub update_body: Option<Value>,
    pub requests: Mutex<Vec<RecordedRequest>>,
}

impl Default for MockUsersApi {
    fn default() -> Self {
        Self {
            list_status: StatusCode::OK,
            list_body: json!([]),
            delete_status: StatusCode::OK,
            update_status: StatusCode::OK,
            update_body: None,
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockUsersApi {
    pub fn with_users(users: Value) -> Self {
        Self {
            list_body: users,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: RecordedRequest) {
        self.requests.lock().unwrap().push(request);
    }
}

async fn list_users(State(mock): State<Arc<MockUsersApi>>) -> (StatusCode, Json<Value>) {
    mock.record(RecordedRequest {
        method: "GET",
        path: "/users".to_string(),
        content_type: None,
        body: None,
    });
    (mock.list_status, Json(mock.list_body.clone()))
}

async fn delete_user(State(mock): State<Arc<MockUsersApi>>, Path(id): Path<String>) -> StatusCode {
    mock.record(RecordedRequest {
        method: "DELETE",
        path: format!("/users/{id}"),
        content_type: None,
        body: None,
    });
    mock.delete_status
}

async fn update_user(
    State(mock): State<Arc<MockUsersApi>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let received: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    mock.record(RecordedRequest {
        method: "PUT",
        path: format!("/users/{id}"),
        content_type,
        body: Some(received.clone()),
    });
    let response = mock.update_body.clone().unwrap_or(received);
    (mock.update_status, Json(response))
}

/// Bind to port 0 and return the base URL of the running mock.
pub async fn start_server(mock: Arc<MockUsersApi>) -> Url {
    let app = Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", axum::routing::delete(delete_user).put(update_user))
        .with_state(mock);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}

/// Base URL nobody listens on.
pub async fn unreachable_base_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}
