use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCharacterRequest {
    pub image_url: String,
    pub description: Option<String>,
    pub birthdate: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlanetRequest {
    pub image_url: String,
    pub description: Option<String>,
    pub gravity: i32,
}
