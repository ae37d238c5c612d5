#![allow(dead_code)]

use std::sync::Arc;

use alliswell_api::auth::jwt::JwtConfig;
use alliswell_api::config::ServerConfig;
use alliswell_api::router::build_app_router;
use alliswell_api::state::AppState;
use alliswell_core::access::{Caller, Principal};
use alliswell_core::roles::Role;
use alliswell_core::types::DbId;
use alliswell_db::models::project::CreateProject;
use alliswell_db::models::user::{CreateUser, User};
use alliswell_db::repositories::{ProjectRepo, UserRepo};
use alliswell_db::DbPool;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Test `ServerConfig` with the acting-director header enabled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        allow_user_id_header: true,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = alliswell_db::create_memory_pool().await.unwrap();
    alliswell_db::run_migrations(&pool).await.unwrap();
    pool
}

/// The full application router over `pool`, using the production
/// middleware stack.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: DbPool, config: ServerConfig) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(config),
    })
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// One user per role plus a second director and a deactivated director.
pub struct Seed {
    pub admin: User,
    pub head: User,
    pub d1: User,
    pub d2: User,
    pub inactive: User,
}

pub async fn seed_users(pool: &DbPool) -> Seed {
    let admin = new_user(pool, "Ada Admin", Role::Admin).await;
    let head = new_user(pool, "Hal Head", Role::PracticeHead).await;
    let d1 = new_user(pool, "Dana One", Role::DeliveryDirector).await;
    let d2 = new_user(pool, "Dev Two", Role::DeliveryDirector).await;
    let inactive = new_user(pool, "Ina Gone", Role::DeliveryDirector).await;
    UserRepo::set_active(pool, inactive.id, false).await.unwrap();
    Seed {
        admin,
        head,
        d1,
        d2,
        inactive,
    }
}

pub async fn new_user(pool: &DbPool, name: &str, role: Role) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            role,
        },
    )
    .await
    .unwrap()
}

pub async fn new_project(pool: &DbPool, name: &str, director: Option<DbId>) -> DbId {
    ProjectRepo::create(
        pool,
        &CreateProject {
            name: name.to_string(),
            client: format!("{name} Client"),
            description: None,
            start_date: date("2024-06-03"),
            status: None,
            assigned_director_id: director,
            project_manager_email: None,
            business_unit_head_email: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub fn caller(user: &User) -> Caller {
    Caller::User(Principal {
        id: user.id,
        name: user.name.clone(),
        role: user.role,
    })
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

// ---------------------------------------------------------------------------
// HTTP helpers (acting as a user through the X-User-Id header)
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user: Option<DbId>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = user {
        builder = builder.header("x-user-id", id.to_string());
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_as(app: Router, uri: &str, user: DbId) -> Response<Body> {
    send(app, Method::GET, uri, Some(user), None).await
}

pub async fn post_json_as(
    app: Router,
    uri: &str,
    user: DbId,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(user), Some(body)).await
}

pub async fn put_json_as(
    app: Router,
    uri: &str,
    user: DbId,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(user), Some(body)).await
}

pub async fn delete_as(app: Router, uri: &str, user: DbId) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(user), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
