use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::catalog::PlanetList,
    entity::{Planets, planets::Column},
    error::{AppError, AppResult},
    models::Planet,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_planets(state: &AppState) -> AppResult<ApiResponse<PlanetList>> {
    let items: Vec<Planet> = Planets::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("ok", PlanetList { items }, Some(meta)))
}

pub async fn get_planet(state: &AppState, id: i32) -> AppResult<ApiResponse<Planet>> {
    let planet = Planets::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Planet::from)
        .ok_or_else(|| AppError::BadRequest("Planet not found".into()))?;
    Ok(ApiResponse::success("ok", planet, None))
}
