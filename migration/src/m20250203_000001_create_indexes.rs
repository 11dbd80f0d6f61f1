use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Q1/Q4/Q5 revenue filters and ORDER BY revenue
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_movies_revenue")
                    .table(Movies::Table)
                    .col(Movies::Revenue)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_movies_vote_average")
                    .table(Movies::Table)
                    .col(Movies::VoteAverage)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_movie_crew_job")
                    .table(MovieCrew::Table)
                    .col(MovieCrew::Job)
                    .to_owned(),
            )
            .await?;

        // Lets the actor-pair self-join cut to the leading billing window from the index alone.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_movie_cast_movie_order_person")
                    .table(MovieCast::Table)
                    .col(MovieCast::MovieId)
                    .col(MovieCast::CastOrder)
                    .col(MovieCast::PersonId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_movie_cast_movie_order_person")
                    .table(MovieCast::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_movie_crew_job").table(MovieCrew::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_movies_vote_average")
                    .table(Movies::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_movies_revenue").table(Movies::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Revenue,
    VoteAverage,
}

#[derive(DeriveIden)]
enum MovieCrew {
    Table,
    Job,
}

#[derive(DeriveIden)]
enum MovieCast {
    Table,
    MovieId,
    PersonId,
    CastOrder,
}
