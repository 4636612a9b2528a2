#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use cooksoo_admin_rs::{
    app::App,
    types::{AppConfig, AppEnvironment, Config, DatabaseConfig, ToContext},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// A fresh app backed by its own migrated and seeded in-memory database.
pub async fn app() -> Router {
    let config = Config {
        database: DatabaseConfig {
            url: String::from("sqlite::memory:"),
            max_connections: 1,
        },
        app: AppConfig {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 5000,
            url: String::from("http://127.0.0.1:5000"),
        },
    };

    let ctx = config.to_context().await.unwrap();
    App::new(Arc::new(ctx)).router()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

pub async fn post(app: &Router, uri: &str, form: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

pub fn decode_qr(png: &[u8]) -> String {
    let image = image::load_from_memory(png).unwrap().to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| image.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1);
    grids[0].decode().unwrap().1
}
