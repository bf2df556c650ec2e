use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::catalog::UserList,
    entity::{Favorites, Users, favorites, users},
    error::AppResult,
    models::User,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Every user together with their favorites.
pub async fn list_users(state: &AppState) -> AppResult<ApiResponse<UserList>> {
    let items: Vec<User> = Users::find()
        .find_with_related(Favorites)
        .order_by_asc(users::Column::Id)
        .order_by_asc(favorites::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(user, favs)| User::from_entity(user, favs))
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("ok", UserList { items }, Some(meta)))
}
