use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::favorites::{CreateFavoriteRequest, DeletedFavorite, FavoriteList},
    error::AppResult,
    models::Favorite,
    response::ApiResponse,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites", post(create_favorite))
        .route("/favorites/{favorite_id}", delete(delete_favorite))
        .route("/users/{user_id}/favorites", get(list_user_favorites))
}

#[utoipa::path(
    post,
    path = "/favorites",
    request_body = CreateFavoriteRequest,
    responses(
        (status = 201, description = "Favorite created", body = ApiResponse<Favorite>),
        (status = 400, description = "Missing user, or not exactly one of character_id / planets_id"),
        (status = 404, description = "User, character or planet not found"),
        (status = 409, description = "Already in favorites"),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Favorites"
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    payload: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Favorite>>)> {
    let Json(payload) = payload?;
    let resp = favorite_service::create_favorite(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites of a user", body = ApiResponse<FavoriteList>),
        (status = 404, description = "User not found")
    ),
    tag = "Favorites"
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<ApiResponse<FavoriteList>>> {
    let Path(user_id) = user_id?;
    let resp = favorite_service::list_user_favorites(&state, user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/favorites/{favorite_id}",
    params(
        ("favorite_id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = ApiResponse<DeletedFavorite>),
        (status = 404, description = "Favorite not found"),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Favorites"
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    favorite_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<ApiResponse<DeletedFavorite>>> {
    let Path(favorite_id) = favorite_id?;
    let resp = favorite_service::delete_favorite(&state, favorite_id).await?;
    Ok(Json(resp))
}
