use chrono::NaiveDate;
use favorites_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::admin::{CreateCharacterRequest, CreatePlanetRequest, CreateUserRequest},
    entity::{Characters, Planets},
    error::AppError,
    services::admin_service,
    state::AppState,
};
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.db_max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState { orm };

    ensure_user(&state, "luke@example.com", "tatooine").await?;
    ensure_user(&state, "leia@example.com", "alderaan").await?;
    seed_characters(&state).await?;
    seed_planets(&state).await?;

    println!("Seed completed");
    Ok(())
}

async fn ensure_user(state: &AppState, email: &str, password: &str) -> anyhow::Result<()> {
    let request = CreateUserRequest {
        email: email.to_string(),
        password: password.to_string(),
        is_active: Some(true),
    };
    match admin_service::create_user(state, request).await {
        Ok(_) => println!("Created user {email}"),
        Err(AppError::Conflict(_)) => println!("User {email} already exists"),
        Err(err) => return Err(anyhow::anyhow!(err.to_string())),
    }
    Ok(())
}

async fn seed_characters(state: &AppState) -> anyhow::Result<()> {
    if Characters::find().count(&state.orm).await? > 0 {
        println!("Characters already seeded");
        return Ok(());
    }

    let characters = [
        ("https://starwars-visualguide.com/assets/img/characters/1.jpg", "Jedi from Tatooine", (1977, 5, 25)),
        ("https://starwars-visualguide.com/assets/img/characters/4.jpg", "Sith lord", (1941, 12, 1)),
        ("https://starwars-visualguide.com/assets/img/characters/5.jpg", "Princess of Alderaan", (1977, 5, 25)),
    ];

    for (image_url, description, (y, m, d)) in characters {
        let birthdate = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| anyhow::anyhow!("invalid birthdate {y}-{m}-{d}"))?;
        admin_service::create_character(
            state,
            CreateCharacterRequest {
                image_url: image_url.to_string(),
                description: Some(description.to_string()),
                birthdate,
            },
        )
        .await
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;
    }

    println!("Seeded characters");
    Ok(())
}

async fn seed_planets(state: &AppState) -> anyhow::Result<()> {
    if Planets::find().count(&state.orm).await? > 0 {
        println!("Planets already seeded");
        return Ok(());
    }

    let planets = [
        ("https://starwars-visualguide.com/assets/img/planets/1.jpg", "Desert world", 1),
        ("https://starwars-visualguide.com/assets/img/planets/2.jpg", "Peaceful and green", 1),
        ("https://starwars-visualguide.com/assets/img/planets/6.jpg", "Gas giant mining colony", 2),
    ];

    for (image_url, description, gravity) in planets {
        admin_service::create_planet(
            state,
            CreatePlanetRequest {
                image_url: image_url.to_string(),
                description: Some(description.to_string()),
                gravity,
            },
        )
        .await
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;
    }

    println!("Seeded planets");
    Ok(())
}
