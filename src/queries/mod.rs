//! The analytical query set. Every query is a single parameterized SELECT
//! that reads the catalog and never writes to it.

mod rankings;
mod search;

use std::fmt;

use sea_orm::{ConnectionTrait, FromQueryResult, Statement, Value};

pub use rankings::{DIRECTOR_JOB, PAIR_LIMIT, actor_pairs, genre_pairs, top_directors};
pub use search::{SEARCH_LIMIT, plot_search, title_search};

use crate::error::{CatalogError, CatalogResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryKind {
    PlotSearch,
    TitleSearch,
    ActorPairs,
    TopDirectors,
    GenrePairs,
}

impl QueryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::PlotSearch => "plot search",
            QueryKind::TitleSearch => "title search",
            QueryKind::ActorPairs => "actor pairs",
            QueryKind::TopDirectors => "top directors",
            QueryKind::GenrePairs => "genre pairs",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

async fn fetch<T, C>(
    db: &C,
    query: QueryKind,
    sql: &str,
    values: Vec<Value>,
) -> CatalogResult<Vec<T>>
where
    T: FromQueryResult,
    C: ConnectionTrait,
{
    let stmt = Statement::from_sql_and_values(db.get_database_backend(), sql, values);
    T::find_by_statement(stmt).all(db).await.map_err(|source| CatalogError::Query { query, source })
}
