use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};

use crate::{
    dto::admin::{CreateCharacterRequest, CreatePlanetRequest, CreateUserRequest},
    error::AppResult,
    models::{Character, Planet, User},
    response::ApiResponse,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/people", post(create_character))
        .route("/planets", post(create_planet))
}

#[utoipa::path(
    post,
    path = "/admin/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<User>),
        (status = 400, description = "Invalid email or password"),
        (status = 409, description = "Email is already taken")
    ),
    tag = "Admin"
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let Json(payload) = payload?;
    let resp = admin_service::create_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/admin/people",
    request_body = CreateCharacterRequest,
    responses(
        (status = 201, description = "Character created", body = ApiResponse<Character>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Admin"
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Character>>)> {
    let Json(payload) = payload?;
    let resp = admin_service::create_character(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/admin/planets",
    request_body = CreatePlanetRequest,
    responses(
        (status = 201, description = "Planet created", body = ApiResponse<Planet>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Admin"
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Planet>>)> {
    let Json(payload) = payload?;
    let resp = admin_service::create_planet(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
