//! Bulk load of a catalog dataset.
//!
//! A dataset is one JSON document with an array per table. It is written in a
//! single transaction, parents before children, so a failure anywhere leaves
//! the database as it was.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, IntoActiveModel,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    entities::{
        genre, keyword, movie, movie_cast, movie_crew, movie_genre, movie_keyword,
        movie_ratings_summary, person,
    },
    error::{CatalogError, CatalogResult},
};

const CHUNK_SIZE: usize = 500;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Dataset {
    pub movies: Vec<movie::Model>,
    pub genres: Vec<genre::Model>,
    pub people: Vec<person::Model>,
    pub keywords: Vec<keyword::Model>,
    pub movie_genres: Vec<movie_genre::Model>,
    pub movie_cast: Vec<movie_cast::Model>,
    pub movie_crew: Vec<movie_crew::Model>,
    pub movie_keywords: Vec<movie_keyword::Model>,
    pub ratings: Vec<movie_ratings_summary::Model>,
}

impl Dataset {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Rows written per table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ImportSummary {
    pub movies: u64,
    pub genres: u64,
    pub people: u64,
    pub keywords: u64,
    pub movie_genres: u64,
    pub movie_cast: u64,
    pub movie_crew: u64,
    pub movie_keywords: u64,
    pub ratings: u64,
}

impl ImportSummary {
    pub fn total(&self) -> u64 {
        self.movies
            + self.genres
            + self.people
            + self.keywords
            + self.movie_genres
            + self.movie_cast
            + self.movie_crew
            + self.movie_keywords
            + self.ratings
    }
}

pub async fn load(db: &DatabaseConnection, dataset: Dataset) -> CatalogResult<ImportSummary> {
    let Dataset {
        mut movies,
        genres,
        people,
        keywords,
        movie_genres,
        movie_cast,
        movie_crew,
        movie_keywords,
        ratings,
    } = dataset;

    movies.iter_mut().for_each(fill_release_year);

    let txn = db.begin().await.map_err(CatalogError::Transaction)?;

    let summary = ImportSummary {
        movies: insert_chunked::<movie::ActiveModel>(&txn, "movies", movies).await?,
        genres: insert_chunked::<genre::ActiveModel>(&txn, "genres", genres).await?,
        people: insert_chunked::<person::ActiveModel>(&txn, "people", people).await?,
        keywords: insert_chunked::<keyword::ActiveModel>(&txn, "keywords", keywords).await?,
        movie_genres: insert_chunked::<movie_genre::ActiveModel>(&txn, "movie_genres", movie_genres)
            .await?,
        movie_cast: insert_chunked::<movie_cast::ActiveModel>(&txn, "movie_cast", movie_cast)
            .await?,
        movie_crew: insert_chunked::<movie_crew::ActiveModel>(&txn, "movie_crew", movie_crew)
            .await?,
        movie_keywords: insert_chunked::<movie_keyword::ActiveModel>(
            &txn,
            "movie_keywords",
            movie_keywords,
        )
        .await?,
        ratings: insert_chunked::<movie_ratings_summary::ActiveModel>(
            &txn,
            "movie_ratings_summary",
            ratings,
        )
        .await?,
    };

    txn.commit().await.map_err(CatalogError::Transaction)?;

    info!(rows = summary.total(), movies = summary.movies, "dataset imported");
    Ok(summary)
}

async fn insert_chunked<A>(
    txn: &DatabaseTransaction,
    table: &'static str,
    rows: Vec<<A::Entity as EntityTrait>::Model>,
) -> CatalogResult<u64>
where
    A: ActiveModelTrait,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let mut inserted = 0;
    let mut rows = rows.into_iter().map(IntoActiveModel::<A>::into_active_model).peekable();

    while rows.peek().is_some() {
        let chunk: Vec<A> = rows.by_ref().take(CHUNK_SIZE).collect();
        inserted += <A::Entity as EntityTrait>::insert_many(chunk)
            .exec_without_returning(txn)
            .await
            .map_err(|source| CatalogError::Import { table, source })?;
    }

    debug!(table, rows = inserted, "table imported");
    Ok(inserted)
}

fn fill_release_year(movie: &mut movie::Model) {
    if movie.release_year.is_some() {
        return;
    }
    movie.release_year = movie
        .release_date
        .as_deref()
        .and_then(|raw| raw.parse::<jiff::civil::Date>().ok())
        .map(|date| i32::from(date.year()));
}
