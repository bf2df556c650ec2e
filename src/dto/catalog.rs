use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Character, Planet, User};

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct UserList {
    #[schema(value_type = Vec<User>)]
    pub items: Vec<User>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CharacterList {
    #[schema(value_type = Vec<Character>)]
    pub items: Vec<Character>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PlanetList {
    #[schema(value_type = Vec<Planet>)]
    pub items: Vec<Planet>,
}
