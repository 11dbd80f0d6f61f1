use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieGenres::Table)
                    .if_not_exists()
                    .col(integer(MovieGenres::MovieId))
                    .col(integer(MovieGenres::GenreId))
                    .primary_key(
                        Index::create()
                            .col(MovieGenres::MovieId)
                            .col(MovieGenres::GenreId),
                    )
                    .foreign_key(&mut cascading_fk(
                        "fk_movie_genres_movie",
                        (MovieGenres::Table, MovieGenres::MovieId),
                        (Movies::Table, Movies::MovieId),
                    ))
                    .foreign_key(&mut cascading_fk(
                        "fk_movie_genres_genre",
                        (MovieGenres::Table, MovieGenres::GenreId),
                        (Genres::Table, Genres::GenreId),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieCast::Table)
                    .if_not_exists()
                    .col(integer(MovieCast::MovieId))
                    .col(integer(MovieCast::PersonId))
                    .col(integer(MovieCast::CastOrder))
                    .col(string_len_null(MovieCast::CharacterName, 500))
                    .primary_key(
                        Index::create()
                            .col(MovieCast::MovieId)
                            .col(MovieCast::PersonId)
                            .col(MovieCast::CastOrder),
                    )
                    .foreign_key(&mut cascading_fk(
                        "fk_movie_cast_movie",
                        (MovieCast::Table, MovieCast::MovieId),
                        (Movies::Table, Movies::MovieId),
                    ))
                    .foreign_key(&mut cascading_fk(
                        "fk_movie_cast_person",
                        (MovieCast::Table, MovieCast::PersonId),
                        (People::Table, People::PersonId),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieCrew::Table)
                    .if_not_exists()
                    .col(integer(MovieCrew::MovieId))
                    .col(integer(MovieCrew::PersonId))
                    .col(string_len(MovieCrew::Department, 100))
                    .col(string_len(MovieCrew::Job, 255))
                    .primary_key(
                        Index::create()
                            .col(MovieCrew::MovieId)
                            .col(MovieCrew::PersonId)
                            .col(MovieCrew::Department)
                            .col(MovieCrew::Job),
                    )
                    .foreign_key(&mut cascading_fk(
                        "fk_movie_crew_movie",
                        (MovieCrew::Table, MovieCrew::MovieId),
                        (Movies::Table, Movies::MovieId),
                    ))
                    .foreign_key(&mut cascading_fk(
                        "fk_movie_crew_person",
                        (MovieCrew::Table, MovieCrew::PersonId),
                        (People::Table, People::PersonId),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieKeywords::Table)
                    .if_not_exists()
                    .col(integer(MovieKeywords::MovieId))
                    .col(integer(MovieKeywords::KeywordId))
                    .primary_key(
                        Index::create().col(MovieKeywords::MovieId).col(MovieKeywords::KeywordId),
                    )
                    .foreign_key(&mut cascading_fk(
                        "fk_movie_keywords_movie",
                        (MovieKeywords::Table, MovieKeywords::MovieId),
                        (Movies::Table, Movies::MovieId),
                    ))
                    .foreign_key(&mut cascading_fk(
                        "fk_movie_keywords_keyword",
                        (MovieKeywords::Table, MovieKeywords::KeywordId),
                        (Keywords::Table, Keywords::KeywordId),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieRatingsSummary::Table)
                    .if_not_exists()
                    .col(integer(MovieRatingsSummary::MovieId).primary_key())
                    .col(double_null(MovieRatingsSummary::RatingAvg))
                    .col(integer_null(MovieRatingsSummary::RatingCount))
                    .foreign_key(&mut cascading_fk(
                        "fk_movie_ratings_summary_movie",
                        (MovieRatingsSummary::Table, MovieRatingsSummary::MovieId),
                        (Movies::Table, Movies::MovieId),
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovieRatingsSummary::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieKeywords::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieCrew::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieCast::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieGenres::Table).to_owned()).await?;
        Ok(())
    }
}

/// Child rows follow their parent on delete and on key change.
fn cascading_fk<T, C, P, K>(name: &str, child: (T, C), parent: (P, K)) -> ForeignKeyCreateStatement
where
    T: IntoTableRef,
    C: IdenList,
    P: IntoTableRef,
    K: IdenList,
{
    ForeignKey::create()
        .name(name)
        .from(child.0, child.1)
        .to(parent.0, parent.1)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    MovieId,
}

#[derive(DeriveIden)]
enum Genres {
    Table,
    GenreId,
}

#[derive(DeriveIden)]
enum People {
    Table,
    PersonId,
}

#[derive(DeriveIden)]
enum Keywords {
    Table,
    KeywordId,
}

#[derive(DeriveIden)]
enum MovieGenres {
    Table,
    MovieId,
    GenreId,
}

#[derive(DeriveIden)]
enum MovieCast {
    Table,
    MovieId,
    PersonId,
    CastOrder,
    CharacterName,
}

#[derive(DeriveIden)]
enum MovieCrew {
    Table,
    MovieId,
    PersonId,
    Department,
    Job,
}

#[derive(DeriveIden)]
enum MovieKeywords {
    Table,
    MovieId,
    KeywordId,
}

#[derive(DeriveIden)]
enum MovieRatingsSummary {
    Table,
    MovieId,
    RatingAvg,
    RatingCount,
}
