//! Identity and link tables
//!
//! `links.user_id` declares a reference to `users.personal_id`. The
//! reference is not enforced at runtime (SQLite connections are opened with
//! foreign keys off), so links may name owners that were never registered.

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
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::PersonalId)
                            .string()
                            .not_null()
                            .unique_key(),
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
                    .table(Links::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Links::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Links::UserId).string().not_null())
                    .col(ColumnDef::new(Links::Link).text().not_null())
                    .col(
                        ColumnDef::new(Links::ShortCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Links::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_links_user_id")
                            .from(Links::Table, Links::UserId)
                            .to(Users::Table, Users::PersonalId),
                    )
                    .to_owned(),
            )
            .await?;

        // owner listing
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_links_user_id")
                    .table(Links::Table)
                    .col(Links::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_links_user_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Links::Table).to_owned())
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
    PersonalId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Links {
    Table,
    Id,
    UserId,
    Link,
    ShortCode,
    CreatedAt,
}
