mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use favorites_api::entity::favorites::ActiveModel as FavoriteActive;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, Set};
use serde_json::json;
use tower::ServiceExt;

use common::spawn_app;

#[tokio::test]
async fn creating_a_character_favorite_returns_the_row() {
    let app = spawn_app().await;
    let user_id = app.create_user("luke@example.com").await;
    let character_id = app.create_character("Jedi").await;

    let (status, body) = app
        .post(
            "/favorites",
            json!({ "user_id": user_id, "character_id": character_id }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let data = &body["data"];
    assert!(data["id"].as_i64().is_some());
    assert_eq!(data["user_id"], json!(user_id));
    assert_eq!(data["character_id"], json!(character_id));
    assert_eq!(data["planets_id"], json!(null));
}

#[tokio::test]
async fn creating_a_planet_favorite_uses_planets_id() {
    let app = spawn_app().await;
    let user_id = app.create_user("leia@example.com").await;
    let planet_id = app.create_planet("Alderaan", 1).await;

    let (status, body) = app
        .post("/favorites", json!({ "user_id": user_id, "planets_id": planet_id }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["planets_id"], json!(planet_id));
    assert_eq!(body["data"]["character_id"], json!(null));
}

#[tokio::test]
async fn both_targets_is_a_bad_request() {
    let app = spawn_app().await;
    let user_id = app.create_user("han@example.com").await;
    let character_id = app.create_character("Smuggler").await;
    let planet_id = app.create_planet("Corellia", 1).await;

    let (status, body) = app
        .post(
            "/favorites",
            json!({ "user_id": user_id, "character_id": character_id, "planets_id": planet_id }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Cannot favorite both a character and a planet at once"
    );
}

#[tokio::test]
async fn no_target_is_a_bad_request() {
    let app = spawn_app().await;
    let user_id = app.create_user("chewie@example.com").await;

    let (status, body) = app.post("/favorites", json!({ "user_id": user_id })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Either character_id or planets_id must be provided"
    );

    let (status, _) = app
        .post(
            "/favorites",
            json!({ "user_id": user_id, "character_id": null, "planets_id": null }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_user_id_or_body_is_a_bad_request() {
    let app = spawn_app().await;
    let character_id = app.create_character("Droid").await;

    let (status, body) = app
        .post("/favorites", json!({ "character_id": character_id }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing user_id in request body");
    assert_eq!(body["data"]["error"], "Missing user_id in request body");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/favorites")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/favorites")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = spawn_app().await;
    let character_id = app.create_character("Bounty hunter").await;

    let (status, body) = app
        .post("/favorites", json!({ "user_id": 999, "character_id": character_id }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User with id 999 not found");
}

#[tokio::test]
async fn unknown_character_or_planet_is_not_found() {
    let app = spawn_app().await;
    let user_id = app.create_user("lando@example.com").await;

    let (status, body) = app
        .post("/favorites", json!({ "user_id": user_id, "character_id": 41 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Character with id 41 not found");

    let (status, body) = app
        .post("/favorites", json!({ "user_id": user_id, "planets_id": 42 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Planet with id 42 not found");
}

#[tokio::test]
async fn duplicate_favorite_is_a_conflict() {
    let app = spawn_app().await;
    let user_id = app.create_user("rey@example.com").await;
    let other_user = app.create_user("finn@example.com").await;
    let planet_id = app.create_planet("Jakku", 1).await;
    let body = json!({ "user_id": user_id, "planets_id": planet_id });

    let (status, _) = app.post("/favorites", body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, resp) = app.post("/favorites", body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        resp["message"],
        "This item is already in favorites for this user"
    );

    // Same planet for another user is fine.
    let (status, _) = app
        .post("/favorites", json!({ "user_id": other_user, "planets_id": planet_id }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn a_user_can_hold_several_planet_and_character_favorites() {
    let app = spawn_app().await;
    let user_id = app.create_user("poe@example.com").await;
    let c1 = app.create_character("Pilot").await;
    let c2 = app.create_character("Droid").await;
    let p1 = app.create_planet("Yavin", 1).await;
    let p2 = app.create_planet("Hoth", 1).await;

    for body in [
        json!({ "user_id": user_id, "character_id": c1 }),
        json!({ "user_id": user_id, "character_id": c2 }),
        json!({ "user_id": user_id, "planets_id": p1 }),
        json!({ "user_id": user_id, "planet_id": p2 }),
    ] {
        let (status, _) = app.post("/favorites", body).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.get(&format!("/users/{user_id}/favorites")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().expect("favorites array");
    assert_eq!(items.len(), 4);
    assert_eq!(body["meta"]["total"], json!(4));
    assert_eq!(items[0]["character_id"], json!(c1));
    assert_eq!(items[3]["planets_id"], json!(p2));
}

#[tokio::test]
async fn listing_favorites_of_unknown_user_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = app.get("/users/12/favorites").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User with id 12 not found");
}

#[tokio::test]
async fn deleting_twice_is_not_found() {
    let app = spawn_app().await;
    let user_id = app.create_user("obiwan@example.com").await;
    let character_id = app.create_character("Master").await;

    let (_, created) = app
        .post(
            "/favorites",
            json!({ "user_id": user_id, "character_id": character_id }),
        )
        .await;
    let favorite_id = created["data"]["id"].as_i64().expect("favorite id");

    let (status, body) = app.delete(&format!("/favorites/{favorite_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite deleted successfully");
    assert_eq!(body["data"]["id"], json!(favorite_id));

    let (status, body) = app.delete(&format!("/favorites/{favorite_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        format!("Favorite with id {favorite_id} not found")
    );

    let (_, body) = app.get(&format!("/users/{user_id}/favorites")).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn deleted_favorite_can_be_added_again() {
    let app = spawn_app().await;
    let user_id = app.create_user("yoda@example.com").await;
    let planet_id = app.create_planet("Dagobah", 1).await;
    let body = json!({ "user_id": user_id, "planets_id": planet_id });

    let (_, created) = app.post("/favorites", body.clone()).await;
    let favorite_id = created["data"]["id"].as_i64().unwrap();
    app.delete(&format!("/favorites/{favorite_id}")).await;

    let (status, _) = app.post("/favorites", body).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn schema_rejects_favorites_with_both_or_no_targets() {
    let app = spawn_app().await;
    let user_id = app.create_user("mace@example.com").await;
    let character_id = app.create_character("Jedi master").await;
    let planet_id = app.create_planet("Haruun Kal", 1).await;

    let both = FavoriteActive {
        id: NotSet,
        user_id: Set(user_id),
        character_id: Set(Some(character_id)),
        planet_id: Set(Some(planet_id)),
    }
    .insert(&app.state.orm)
    .await;
    assert!(both.is_err());

    let neither = FavoriteActive {
        id: NotSet,
        user_id: Set(user_id),
        character_id: Set(None),
        planet_id: Set(None),
    }
    .insert(&app.state.orm)
    .await;
    assert!(neither.is_err());
}

#[tokio::test]
async fn schema_rejects_duplicate_pairs() {
    let app = spawn_app().await;
    let user_id = app.create_user("qui-gon@example.com").await;
    let character_id = app.create_character("Padawan").await;

    let insert = || FavoriteActive {
        id: NotSet,
        user_id: Set(user_id),
        character_id: Set(Some(character_id)),
        planet_id: Set(None),
    };

    insert().insert(&app.state.orm).await.expect("first insert");
    let err = insert()
        .insert(&app.state.orm)
        .await
        .expect_err("duplicate insert");
    assert!(favorites_api::error::is_unique_violation(&err));
}

#[tokio::test]
async fn non_integer_favorite_ids_are_json_not_found() {
    let app = spawn_app().await;

    for (method, uri) in [
        (Method::DELETE, "/favorites/abc"),
        (Method::GET, "/users/abc/favorites"),
        (Method::DELETE, "/favorites/99999999999"),
    ] {
        let (status, body) = app.request(method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body["message"].as_str().is_some(), "{uri}");
        assert!(body["data"]["error"].as_str().is_some(), "{uri}");
    }
}

#[tokio::test]
async fn persistence_failures_are_server_errors() {
    let app = spawn_app().await;
    let user_id = app.create_user("tarkin@example.com").await;
    let character_id = app.create_character("Grand Moff").await;

    app.state
        .orm
        .execute_unprepared("DROP TABLE favorites")
        .await
        .expect("drop favorites");

    let (status, body) = app
        .post(
            "/favorites",
            json!({ "user_id": user_id, "character_id": character_id }),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["message"].as_str().expect("error message");
    assert!(message.starts_with("An error occurred"), "{message}");

    let (status, body) = app.delete("/favorites/1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["message"].as_str().expect("error message");
    assert!(message.starts_with("An error occurred"), "{message}");

    // The connection is usable again once the failed transactions are rolled back.
    let (status, _) = app.get("/people").await;
    assert_eq!(status, StatusCode::OK);
}
