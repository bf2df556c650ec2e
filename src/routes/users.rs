use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::catalog::UserList,
    error::AppResult,
    response::ApiResponse,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/user", get(list_users))
}

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "All users with their favorites", body = ApiResponse<UserList>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<UserList>>> {
    let resp = user_service::list_users(&state).await?;
    Ok(Json(resp))
}
