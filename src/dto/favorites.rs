use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Favorite;

/// Body of `POST /favorites`. Every field is optional at the wire level so
/// that missing values surface as validation errors, not decode failures.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateFavoriteRequest {
    pub user_id: Option<i32>,
    pub character_id: Option<i32>,
    #[serde(rename = "planets_id", alias = "planet_id")]
    pub planet_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavoriteList {
    #[schema(value_type = Vec<Favorite>)]
    pub items: Vec<Favorite>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedFavorite {
    pub id: i32,
}
