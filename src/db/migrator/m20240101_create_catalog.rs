use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genres::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Genres::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Genres::Ranking).integer().not_null())
                    .col(
                        ColumnDef::new(Genres::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Genres::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string().not_null())
                    .col(ColumnDef::new(Movies::Rating).double().not_null())
                    .col(
                        ColumnDef::new(Movies::Awards)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Movies::ReleaseDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Movies::Length).integer().null())
                    .col(ColumnDef::new(Movies::GenreId).integer().null())
                    .col(
                        ColumnDef::new(Movies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Movies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // No ON DELETE action: dependent rows are cleaned up by the
                    // movie repository before the parent row goes away.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movies_genre_id")
                            .from(Movies::Table, Movies::GenreId)
                            .to(Genres::Table, Genres::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Actors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Actors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Actors::Name).string().not_null())
                    .col(ColumnDef::new(Actors::Rating).double().null())
                    .col(ColumnDef::new(Actors::FavoriteMovieId).integer().null())
                    .col(
                        ColumnDef::new(Actors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Actors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_actors_favorite_movie_id")
                            .from(Actors::Table, Actors::FavoriteMovieId)
                            .to(Movies::Table, Movies::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActorMovie::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ActorMovie::ActorId).integer().not_null())
                    .col(ColumnDef::new(ActorMovie::MovieId).integer().not_null())
                    .col(
                        ColumnDef::new(ActorMovie::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActorMovie::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ActorMovie::ActorId)
                            .col(ActorMovie::MovieId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_actor_movie_actor_id")
                            .from(ActorMovie::Table, ActorMovie::ActorId)
                            .to(Actors::Table, Actors::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_actor_movie_movie_id")
                            .from(ActorMovie::Table, ActorMovie::MovieId)
                            .to(Movies::Table, Movies::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActorMovie::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Actors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genres::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Genres {
    Table,
    Id,
    Name,
    Ranking,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Rating,
    Awards,
    ReleaseDate,
    Length,
    GenreId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Actors {
    Table,
    Id,
    Name,
    Rating,
    FavoriteMovieId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ActorMovie {
    Table,
    ActorId,
    MovieId,
    CreatedAt,
    UpdatedAt,
}
