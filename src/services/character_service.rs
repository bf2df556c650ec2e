use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::catalog::CharacterList,
    entity::{Characters, characters::Column},
    error::{AppError, AppResult},
    models::Character,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_characters(state: &AppState) -> AppResult<ApiResponse<CharacterList>> {
    let items: Vec<Character> = Characters::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Character::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("ok", CharacterList { items }, Some(meta)))
}

/// A missing character is a 400, unlike the 404 used elsewhere; clients
/// already depend on it.
pub async fn get_character(state: &AppState, id: i32) -> AppResult<ApiResponse<Character>> {
    let character = Characters::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Character::from)
        .ok_or_else(|| AppError::BadRequest("Character not found".into()))?;
    Ok(ApiResponse::success("ok", character, None))
}
