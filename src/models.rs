use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{characters, favorites, planets, users};

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub favorites: Vec<Favorite>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Character {
    pub id: i32,
    pub image_url: String,
    pub description: Option<String>,
    pub birthdate: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub image_url: String,
    pub description: Option<String>,
    pub gravity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    #[serde(rename = "planets_id")]
    pub planet_id: Option<i32>,
}

impl User {
    pub fn from_entity(model: users::Model, favorites: Vec<favorites::Model>) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
            created_at: model.created_at,
            favorites: favorites.into_iter().map(Favorite::from).collect(),
        }
    }
}

impl From<characters::Model> for Character {
    fn from(model: characters::Model) -> Self {
        Self {
            id: model.id,
            image_url: model.image_url,
            description: model.description,
            birthdate: model.birthdate,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            image_url: model.image_url,
            description: model.description,
            gravity: model.gravity,
        }
    }
}

impl From<favorites::Model> for Favorite {
    fn from(model: favorites::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            character_id: model.character_id,
            planet_id: model.planet_id,
        }
    }
}
