use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::favorites::{CreateFavoriteRequest, DeletedFavorite, FavoriteList},
    entity::{
        Characters, Favorites, Planets, Users,
        favorites::{ActiveModel as FavoriteActive, Column as FavoriteCol, Model as FavoriteModel},
    },
    error::{AppError, AppResult, is_unique_violation},
    models::Favorite,
    response::{ApiResponse, Meta},
    state::AppState,
};

const DUPLICATE_FAVORITE: &str = "This item is already in favorites for this user";

/// The single thing a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// Checks the request shape before anything touches the database.
/// A reference of `0` counts as absent.
pub fn validate_request(payload: &CreateFavoriteRequest) -> AppResult<NewFavorite> {
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::BadRequest("Missing user_id in request body".into()))?;

    let character_id = payload.character_id.filter(|id| *id != 0);
    let planet_id = payload.planet_id.filter(|id| *id != 0);

    let target = match (character_id, planet_id) {
        (None, None) => {
            return Err(AppError::BadRequest(
                "Either character_id or planets_id must be provided".into(),
            ));
        }
        (Some(_), Some(_)) => {
            return Err(AppError::BadRequest(
                "Cannot favorite both a character and a planet at once".into(),
            ));
        }
        (Some(id), None) => FavoriteTarget::Character(id),
        (None, Some(id)) => FavoriteTarget::Planet(id),
    };

    Ok(NewFavorite { user_id, target })
}

pub async fn create_favorite(
    state: &AppState,
    payload: CreateFavoriteRequest,
) -> AppResult<ApiResponse<Favorite>> {
    let new = validate_request(&payload).inspect_err(|err| {
        tracing::debug!(error = %err, "favorite request rejected");
    })?;

    let txn = state.orm.begin().await?;
    let inserted = insert_favorite(&txn, new).await;
    match inserted {
        Ok(favorite) => {
            txn.commit().await?;
            tracing::info!(
                favorite_id = favorite.id,
                user_id = favorite.user_id,
                "favorite created"
            );
            Ok(ApiResponse::success(
                "Favorite created",
                Favorite::from(favorite),
                Some(Meta::empty()),
            ))
        }
        Err(err) => {
            rollback(txn).await;
            Err(err)
        }
    }
}

async fn insert_favorite(
    txn: &DatabaseTransaction,
    new: NewFavorite,
) -> AppResult<FavoriteModel> {
    let user_exists = Users::find_by_id(new.user_id).one(txn).await?.is_some();
    if !user_exists {
        return Err(AppError::NotFound(format!(
            "User with id {} not found",
            new.user_id
        )));
    }

    let (character_id, planet_id, duplicate_filter) = match new.target {
        FavoriteTarget::Character(id) => {
            if Characters::find_by_id(id).one(txn).await?.is_none() {
                return Err(AppError::NotFound(format!(
                    "Character with id {id} not found"
                )));
            }
            (Some(id), None, FavoriteCol::CharacterId.eq(id))
        }
        FavoriteTarget::Planet(id) => {
            if Planets::find_by_id(id).one(txn).await?.is_none() {
                return Err(AppError::NotFound(format!("Planet with id {id} not found")));
            }
            (None, Some(id), FavoriteCol::PlanetId.eq(id))
        }
    };

    let existing = Favorites::find()
        .filter(FavoriteCol::UserId.eq(new.user_id))
        .filter(duplicate_filter)
        .one(txn)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(DUPLICATE_FAVORITE.into()));
    }

    let active = FavoriteActive {
        id: NotSet,
        user_id: Set(new.user_id),
        character_id: Set(character_id),
        planet_id: Set(planet_id),
    };

    active.insert(txn).await.map_err(|err| {
        if is_unique_violation(&err) {
            AppError::Conflict(DUPLICATE_FAVORITE.into())
        } else {
            AppError::Persistence(format!("An error occurred: {err}"))
        }
    })
}

pub async fn list_user_favorites(
    state: &AppState,
    user_id: i32,
) -> AppResult<ApiResponse<FavoriteList>> {
    let user = Users::find_by_id(user_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {user_id} not found")))?;

    let items: Vec<Favorite> = user
        .find_related(Favorites)
        .order_by_asc(FavoriteCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Favorite::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("ok", FavoriteList { items }, Some(meta)))
}

pub async fn delete_favorite(
    state: &AppState,
    favorite_id: i32,
) -> AppResult<ApiResponse<DeletedFavorite>> {
    let txn = state.orm.begin().await?;

    let favorite = match Favorites::find_by_id(favorite_id).one(&txn).await? {
        Some(f) => f,
        None => {
            rollback(txn).await;
            return Err(AppError::NotFound(format!(
                "Favorite with id {favorite_id} not found"
            )));
        }
    };

    let deleted = favorite.delete(&txn).await;
    if let Err(err) = deleted {
        rollback(txn).await;
        return Err(AppError::Persistence(format!(
            "An error occurred while deleting favorite: {err}"
        )));
    }
    txn.commit().await?;

    tracing::info!(favorite_id, "favorite deleted");

    Ok(ApiResponse::success(
        "Favorite deleted successfully",
        DeletedFavorite { id: favorite_id },
        Some(Meta::empty()),
    ))
}

/// Rolls back without masking the error that caused it.
async fn rollback(txn: DatabaseTransaction) {
    if let Err(err) = txn.rollback().await {
        tracing::warn!(error = %err, "transaction rollback failed");
    }
}
