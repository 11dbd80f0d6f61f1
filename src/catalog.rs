use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    config::Config,
    db,
    error::{CatalogError, CatalogResult},
    models::{ActorPair, DirectorRevenue, GenrePair, PlotMatch, TitleMatch},
    queries,
};

/// An open, migrated catalog database.
///
/// Owns the only connection. Dropping the catalog releases it; `close` does
/// the same and reports failures.
pub struct Catalog {
    db: DatabaseConnection,
    cast_order_cutoff: i32,
}

impl Catalog {
    pub async fn open(config: &Config) -> CatalogResult<Self> {
        let db = db::connect(config).await?;
        db::migrate(&db).await?;
        info!(cast_order_cutoff = config.cast_order_cutoff, "catalog ready");
        Ok(Self::new(db, config.cast_order_cutoff))
    }

    pub fn new(db: DatabaseConnection, cast_order_cutoff: i32) -> Self {
        Self { db, cast_order_cutoff }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn cast_order_cutoff(&self) -> i32 {
        self.cast_order_cutoff
    }

    pub async fn plot_search(&self, phrase: &str) -> CatalogResult<Vec<PlotMatch>> {
        queries::plot_search(&self.db, phrase).await
    }

    pub async fn title_search(&self, phrase: &str) -> CatalogResult<Vec<TitleMatch>> {
        queries::title_search(&self.db, phrase).await
    }

    pub async fn actor_pairs(&self, min_movies: u32) -> CatalogResult<Vec<ActorPair>> {
        queries::actor_pairs(&self.db, min_movies, self.cast_order_cutoff).await
    }

    pub async fn top_directors(&self, limit: u32) -> CatalogResult<Vec<DirectorRevenue>> {
        queries::top_directors(&self.db, limit).await
    }

    pub async fn genre_pairs(&self, min_revenue: i64) -> CatalogResult<Vec<GenrePair>> {
        queries::genre_pairs(&self.db, min_revenue).await
    }

    pub async fn close(self) -> CatalogResult<()> {
        self.db.close().await.map_err(CatalogError::Connect)?;
        info!("catalog closed");
        Ok(())
    }
}
