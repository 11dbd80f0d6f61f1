use sea_orm::ConnectionTrait;
use tracing::debug;

use super::{QueryKind, fetch};
use crate::{
    error::CatalogResult,
    fts,
    models::{PlotMatch, TitleMatch},
};

/// Row cap for both full-text searches.
pub const SEARCH_LIMIT: u32 = 20;

const PLOT_SEARCH_SQL: &str = include_str!("sql/plot_search.sql");
const TITLE_SEARCH_SQL: &str = include_str!("sql/title_search.sql");

/// Q1: movies whose overview matches `phrase` and that report both budget
/// and revenue, highest revenue first.
pub async fn plot_search<C>(db: &C, phrase: &str) -> CatalogResult<Vec<PlotMatch>>
where
    C: ConnectionTrait,
{
    let Some(expr) = fts::match_expression(phrase) else {
        debug!(phrase, "nothing searchable in plot phrase");
        return Ok(Vec::new());
    };

    let rows: Vec<PlotMatch> = fetch(
        db,
        QueryKind::PlotSearch,
        PLOT_SEARCH_SQL,
        vec![expr.into(), i64::from(SEARCH_LIMIT).into()],
    )
    .await?;

    debug!(phrase, rows = rows.len(), "plot search");
    Ok(rows)
}

/// Q2: movies whose title matches `phrase`, most popular first.
pub async fn title_search<C>(db: &C, phrase: &str) -> CatalogResult<Vec<TitleMatch>>
where
    C: ConnectionTrait,
{
    let Some(expr) = fts::match_expression(phrase) else {
        debug!(phrase, "nothing searchable in title phrase");
        return Ok(Vec::new());
    };

    let rows: Vec<TitleMatch> = fetch(
        db,
        QueryKind::TitleSearch,
        TITLE_SEARCH_SQL,
        vec![expr.into(), i64::from(SEARCH_LIMIT).into()],
    )
    .await?;

    debug!(phrase, rows = rows.len(), "title search");
    Ok(rows)
}
