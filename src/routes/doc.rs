use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{CreateCharacterRequest, CreatePlanetRequest, CreateUserRequest},
        catalog::{CharacterList, PlanetList, UserList},
        favorites::{CreateFavoriteRequest, DeletedFavorite, FavoriteList},
    },
    models::{Character, Favorite, Planet, User},
    response::{ApiResponse, Meta},
    routes::{admin, favorites, health, people, planets, sitemap, users},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Favorites API", description = "Users, characters, planets and their favorites"),
    paths(
        sitemap::sitemap,
        health::health_check,
        users::list_users,
        people::list_people,
        people::get_person,
        planets::list_planets,
        planets::get_planet,
        favorites::create_favorite,
        favorites::list_user_favorites,
        favorites::delete_favorite,
        admin::create_user,
        admin::create_character,
        admin::create_planet
    ),
    components(
        schemas(
            User,
            Character,
            Planet,
            Favorite,
            UserList,
            CharacterList,
            PlanetList,
            FavoriteList,
            DeletedFavorite,
            CreateFavoriteRequest,
            CreateUserRequest,
            CreateCharacterRequest,
            CreatePlanetRequest,
            health::HealthData,
            sitemap::Endpoint,
            sitemap::Sitemap,
            Meta,
            ApiResponse<Favorite>,
            ApiResponse<FavoriteList>,
            ApiResponse<Character>,
            ApiResponse<Planet>,
            ApiResponse<User>
        )
    ),
    tags(
        (name = "Health", description = "Health check and sitemap"),
        (name = "Users", description = "User endpoints"),
        (name = "People", description = "Character endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
        (name = "Admin", description = "Record creation endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
