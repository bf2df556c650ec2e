use argon2::{
    Argon2, PasswordHasher,
    password_hash::SaltString,
};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::admin::{CreateCharacterRequest, CreatePlanetRequest, CreateUserRequest},
    entity::{
        Users, characters::ActiveModel as CharacterActive, planets::ActiveModel as PlanetActive,
        users::{ActiveModel as UserActive, Column as UserCol},
    },
    error::{AppError, AppResult, is_unique_violation},
    models::{Character, Planet, User},
    response::{ApiResponse, Meta},
    state::AppState,
};

const MAX_EMAIL_LEN: usize = 120;
const MAX_IMAGE_URL_LEN: usize = 255;
const EMAIL_TAKEN: &str = "Email is already taken";

pub async fn create_user(
    state: &AppState,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let CreateUserRequest {
        email,
        password,
        is_active,
    } = payload;
    let email = validate_email(&email)?;
    if password.is_empty() {
        return Err(AppError::BadRequest("Password must not be empty".into()));
    }

    let exist = Users::find()
        .filter(UserCol::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if exist.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    let user = UserActive {
        id: NotSet,
        email: Set(email),
        password_hash: Set(password_hash),
        is_active: Set(is_active.unwrap_or(true)),
        created_at: Set(Utc::now()),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            AppError::Conflict(EMAIL_TAKEN.into())
        } else {
            AppError::OrmError(err)
        }
    })?;

    tracing::info!(user_id = user.id, "user created");

    Ok(ApiResponse::success(
        "User created",
        User::from_entity(user, Vec::new()),
        Some(Meta::empty()),
    ))
}

pub async fn create_character(
    state: &AppState,
    payload: CreateCharacterRequest,
) -> AppResult<ApiResponse<Character>> {
    let image_url = validate_image_url(&payload.image_url)?;

    let character = CharacterActive {
        id: NotSet,
        image_url: Set(image_url),
        description: Set(payload.description),
        birthdate: Set(payload.birthdate),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(character_id = character.id, "character created");

    Ok(ApiResponse::success(
        "Character created",
        Character::from(character),
        Some(Meta::empty()),
    ))
}

pub async fn create_planet(
    state: &AppState,
    payload: CreatePlanetRequest,
) -> AppResult<ApiResponse<Planet>> {
    let image_url = validate_image_url(&payload.image_url)?;

    let planet = PlanetActive {
        id: NotSet,
        image_url: Set(image_url),
        description: Set(payload.description),
        gravity: Set(payload.gravity),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(planet_id = planet.id, "planet created");

    Ok(ApiResponse::success(
        "Planet created",
        Planet::from(planet),
        Some(Meta::empty()),
    ))
}

/// Lengths are counted in characters, matching the VARCHAR bound.
fn validate_email(raw: &str) -> AppResult<String> {
    let email = raw.trim();
    if email.is_empty() || !email.contains('@') || email.chars().count() > MAX_EMAIL_LEN {
        return Err(AppError::BadRequest("A valid email is required".into()));
    }
    Ok(email.to_string())
}

fn validate_image_url(raw: &str) -> AppResult<String> {
    let image_url = raw.trim();
    if image_url.is_empty() {
        return Err(AppError::BadRequest("image_url must not be empty".into()));
    }
    if image_url.chars().count() > MAX_IMAGE_URL_LEN {
        return Err(AppError::BadRequest(format!(
            "image_url must be at most {MAX_IMAGE_URL_LEN} characters"
        )));
    }
    Ok(image_url.to_string())
}
