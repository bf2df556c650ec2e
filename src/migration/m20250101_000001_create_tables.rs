//! Create users, characters, planets and the favorites join table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).text().not_null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Characters::ImageUrl).string_len(255).not_null())
                    .col(ColumnDef::new(Characters::Description).text())
                    .col(ColumnDef::new(Characters::Birthdate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planets::ImageUrl).string_len(255).not_null())
                    .col(ColumnDef::new(Planets::Description).text())
                    .col(ColumnDef::new(Planets::Gravity).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Exactly one of character_id / planet_id must be set.
        let one_target = Expr::col(Favorites::CharacterId)
            .is_not_null()
            .and(Expr::col(Favorites::PlanetId).is_null())
            .or(Expr::col(Favorites::CharacterId)
                .is_null()
                .and(Expr::col(Favorites::PlanetId).is_not_null()));

        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorites::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favorites::UserId).integer().not_null())
                    .col(ColumnDef::new(Favorites::CharacterId).integer().null())
                    .col(ColumnDef::new(Favorites::PlanetId).integer().null())
                    .check(one_target)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_character")
                            .from(Favorites::Table, Favorites::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planet")
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // NULLs never collide, so a planet favorite is never caught by the
        // character index and vice versa.
        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_character")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_planet")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Characters {
    Table,
    Id,
    ImageUrl,
    Description,
    Birthdate,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    ImageUrl,
    Description,
    Gravity,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetId,
}
