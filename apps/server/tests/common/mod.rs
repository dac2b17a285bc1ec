#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use hormiga_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const API_TOKEN: &str = "reporting-secret";

pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

fn test_config(dir: &TempDir, api_token: Option<&str>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        jwt_secret: None,
        access_token_ttl: Duration::from_secs(600),
        api_token: api_token.map(str::to_string),
        alert_webhook_url: None,
        alert_webhook_token: None,
    }
}

pub async fn test_app_with_token(api_token: Option<&str>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, api_token);
    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config),
        _dir: dir,
    }
}

pub async fn test_app() -> TestApp {
    test_app_with_token(Some(API_TOKEN)).await
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, _, json) = self.send_raw(method, uri, token, body).await;
        (status, json)
    }

    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, axum::http::HeaderMap, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, headers, json)
    }

    /// Registers a user and returns `(user id, access token)`.
    pub async fn sign_up(&self, username: &str, email: Option<&str>) -> (String, String) {
        let (status, user) = self
            .send(
                Method::POST,
                "/api/v1/auth/register",
                None,
                Some(serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": "correct-horse",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {user}");

        let (status, login) = self
            .send(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(serde_json::json!({
                    "username": username,
                    "password": "correct-horse",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {login}");
        (
            user["id"].as_str().unwrap().to_string(),
            login["accessToken"].as_str().unwrap().to_string(),
        )
    }
}

pub fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}
