use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(integer(Movies::MovieId).primary_key())
                    .col(string(Movies::Title))
                    .col(string_null(Movies::OriginalTitle))
                    .col(string_len_null(Movies::OriginalLanguage, 10))
                    .col(date_null(Movies::ReleaseDate))
                    .col(integer_null(Movies::ReleaseYear))
                    .col(integer_null(Movies::Runtime))
                    // 0 means "not reported"
                    .col(big_integer(Movies::Budget).default(0))
                    .col(big_integer(Movies::Revenue).default(0))
                    .col(double_null(Movies::Popularity))
                    .col(double_null(Movies::VoteAverage))
                    .col(integer_null(Movies::VoteCount))
                    .col(text_null(Movies::Tagline))
                    .col(text_null(Movies::Overview))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(integer(Genres::GenreId).primary_key())
                    .col(string_len(Genres::Name, 100).unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(integer(People::PersonId).primary_key())
                    .col(string(People::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Keywords::Table)
                    .if_not_exists()
                    .col(integer(Keywords::KeywordId).primary_key())
                    .col(string(Keywords::Name))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Keywords::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(People::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Genres::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    MovieId,
    Title,
    OriginalTitle,
    OriginalLanguage,
    ReleaseDate,
    ReleaseYear,
    Runtime,
    Budget,
    Revenue,
    Popularity,
    VoteAverage,
    VoteCount,
    Tagline,
    Overview,
}

#[derive(DeriveIden)]
enum Genres {
    Table,
    GenreId,
    Name,
}

#[derive(DeriveIden)]
enum People {
    Table,
    PersonId,
    Name,
}

#[derive(DeriveIden)]
enum Keywords {
    Table,
    KeywordId,
    Name,
}
