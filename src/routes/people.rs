use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::{
    dto::catalog::CharacterList,
    error::AppResult,
    models::Character,
    response::ApiResponse,
    services::character_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/{id}", get(get_person))
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All characters", body = ApiResponse<CharacterList>)
    ),
    tag = "People"
)]
pub async fn list_people(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CharacterList>>> {
    let resp = character_service::list_characters(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Get character", body = ApiResponse<Character>),
        (status = 400, description = "Character not found")
    ),
    tag = "People"
)]
pub async fn get_person(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<ApiResponse<Character>>> {
    let Path(id) = id?;
    let resp = character_service::get_character(&state, id).await?;
    Ok(Json(resp))
}
