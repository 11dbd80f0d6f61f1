use sea_orm::ConnectionTrait;
use tracing::debug;

use super::{QueryKind, fetch};
use crate::{
    error::CatalogResult,
    models::{ActorPair, DirectorRevenue, GenrePair},
};

/// Row cap for the actor-pair and genre-pair rankings.
pub const PAIR_LIMIT: u32 = 15;

pub const DIRECTOR_JOB: &str = "Director";

const ACTOR_PAIRS_SQL: &str = include_str!("sql/actor_pairs.sql");
const TOP_DIRECTORS_SQL: &str = include_str!("sql/top_directors.sql");
const GENRE_PAIRS_SQL: &str = include_str!("sql/genre_pairs.sql");

/// Q3: actors billed together (both below `cast_order_cutoff`) in at least
/// `min_movies` movies, best average rating first.
///
/// Each pair appears once, ordered by person id.
pub async fn actor_pairs<C>(
    db: &C,
    min_movies: u32,
    cast_order_cutoff: i32,
) -> CatalogResult<Vec<ActorPair>>
where
    C: ConnectionTrait,
{
    let rows: Vec<ActorPair> = fetch(
        db,
        QueryKind::ActorPairs,
        ACTOR_PAIRS_SQL,
        vec![
            cast_order_cutoff.into(),
            i64::from(min_movies).into(),
            i64::from(PAIR_LIMIT).into(),
        ],
    )
    .await?;

    debug!(min_movies, cast_order_cutoff, rows = rows.len(), "actor pairs");
    Ok(rows)
}

/// Q4: directors ranked by the summed revenue of the movies they directed.
/// Movies without reported revenue are left out.
pub async fn top_directors<C>(db: &C, limit: u32) -> CatalogResult<Vec<DirectorRevenue>>
where
    C: ConnectionTrait,
{
    let rows: Vec<DirectorRevenue> = fetch(
        db,
        QueryKind::TopDirectors,
        TOP_DIRECTORS_SQL,
        vec![DIRECTOR_JOB.into(), i64::from(limit).into()],
    )
    .await?;

    debug!(limit, rows = rows.len(), "top directors");
    Ok(rows)
}

/// Q5: genre pairs shared by movies earning at least `min_revenue`, highest
/// average revenue first.
pub async fn genre_pairs<C>(db: &C, min_revenue: i64) -> CatalogResult<Vec<GenrePair>>
where
    C: ConnectionTrait,
{
    let rows: Vec<GenrePair> = fetch(
        db,
        QueryKind::GenrePairs,
        GENRE_PAIRS_SQL,
        vec![min_revenue.into(), i64::from(PAIR_LIMIT).into()],
    )
    .await?;

    debug!(min_revenue, rows = rows.len(), "genre pairs");
    Ok(rows)
}
