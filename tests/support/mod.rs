//! In-process stand-in for the Assembly64 service.
//!
//! Serves a handful of fixed responses under `/leet` on a random local port.
//! The server runs on its own thread with a current-thread tokio runtime so
//! tests can drive the blocking client from the test thread.

#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

pub const GIANA_QUERY: &str = r#"(name:"Giana Sisters") & (type:d64) & (category:games)"#;

/// Bytes served for content item `id`; deliberately not valid UTF-8.
pub fn disk_image(id: u32) -> Vec<u8> {
    let mut data = vec![0x00, 0xff, 0xfe, 0x80];
    data.extend_from_slice(&id.to_le_bytes());
    data
}

fn app() -> Router {
    Router::new()
        .route("/leet/search/aql/presets", get(presets))
        .route("/leet/search/aql", get(search))
        .route("/leet/search/entries/{id}/{category}", get(entries))
        .route("/leet/search/bin/{id}/{category}/{item}", get(bin))
        .route("/leet/missing", get(missing))
        .route("/leet/empty", get(empty))
        .route("/leet/readme", get(readme))
        .route("/leet/headers", get(echo_headers))
        .route("/leet/echo", post(echo_body).put(echo_body))
        .route("/leet/slow", get(slow))
}

async fn presets() -> Json<Value> {
    Json(json!([
        {
            "type": "category",
            "description": "Category",
            "values": [{"aqlKey": "games", "name": "Games"}, {"aqlKey": "demos", "name": "Demos"}]
        },
        {"type": "type", "values": [{"aqlKey": "d64"}]}
    ]))
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("query").map(String::as_str) {
        Some(GIANA_QUERY) => Json(json!([
            {"id": "giana1", "category": 1, "name": "Great Giana Sisters", "group": "Rainbow Arts", "updated": "2021-01-01"},
            {"id": "giana2", "category": 1, "name": "Giana Sisters +3"}
        ])),
        _ => Json(json!([])),
    }
}

async fn entries(Path((id, category)): Path<(String, u32)>) -> Json<Value> {
    if id == "giana1" && category == 1 {
        Json(json!({
            "contentEntry": [
                {"id": 0, "path": "giana.d64", "size": 8},
                {"id": 1, "path": "extras/giana-side-b.d64"}
            ]
        }))
    } else if id == "absolute" {
        Json(json!({"contentEntry": [{"id": 0, "path": "/tmp/assembly64-absolute.d64"}]}))
    } else {
        Json(json!({"id": id}))
    }
}

async fn bin(Path((_id, _category, item)): Path<(String, u32, u32)>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/octet-stream")],
        disk_image(item),
    )
}

async fn missing() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "not found")
}

async fn empty() -> StatusCode {
    StatusCode::OK
}

async fn readme() -> &'static str {
    "Great Giana Sisters (c) 1987"
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let get = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "cookie": get("cookie"),
        "origin": get("origin"),
        "accept": get("accept"),
        "cacheControl": get("cache-control"),
        "userAgent": get("user-agent"),
    }))
}

async fn echo_body(headers: HeaderMap, body: String) -> Json<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(json!({"contentType": content_type, "body": body}))
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "too late"
}

/// Start the server and return its base URL (ending in `/leet`).
pub fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app()).await
        })
        .unwrap();
    });

    format!("http://{addr}/leet")
}
