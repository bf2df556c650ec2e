#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use chrono::NaiveDate;
use favorites_api::{
    app::create_app,
    db::{create_orm_conn, run_migrations},
    dto::admin::{CreateCharacterRequest, CreatePlanetRequest, CreateUserRequest},
    services::admin_service,
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Fresh in-memory database per test. One connection, so every query sees the
/// same memory store.
pub async fn spawn_app() -> TestApp {
    let orm = create_orm_conn("sqlite::memory:", 1)
        .await
        .expect("connect sqlite");
    run_migrations(&orm).await.expect("migrate");
    let state = AppState { orm };
    TestApp {
        router: create_app(state.clone()),
        state,
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).expect("encode body"))
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("build request"))
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn create_user(&self, email: &str) -> i32 {
        let resp = admin_service::create_user(
            &self.state,
            CreateUserRequest {
                email: email.to_string(),
                password: "secret".to_string(),
                is_active: None,
            },
        )
        .await
        .expect("create user");
        resp.data.expect("user").id
    }

    pub async fn create_character(&self, description: &str) -> i32 {
        let resp = admin_service::create_character(
            &self.state,
            CreateCharacterRequest {
                image_url: "https://img.example/character.png".to_string(),
                description: Some(description.to_string()),
                birthdate: NaiveDate::from_ymd_opt(1977, 5, 25).expect("date"),
            },
        )
        .await
        .expect("create character");
        resp.data.expect("character").id
    }

    pub async fn create_planet(&self, description: &str, gravity: i32) -> i32 {
        let resp = admin_service::create_planet(
            &self.state,
            CreatePlanetRequest {
                image_url: "https://img.example/planet.png".to_string(),
                description: Some(description.to_string()),
                gravity,
            },
        )
        .await
        .expect("create planet");
        resp.data.expect("planet").id
    }
}
