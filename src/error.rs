use sea_orm::DbErr;

use crate::queries::QueryKind;

/// Every failure leaves the library unrecovered; callers decide whether to
/// log, abort or retry.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not connect to the database")]
    Connect(#[source] DbErr),

    #[error("schema setup failed")]
    Schema(#[source] DbErr),

    #[error("{query} query failed")]
    Query {
        query: QueryKind,
        #[source]
        source: DbErr,
    },

    #[error("import into {table} failed")]
    Import {
        table: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("import transaction failed")]
    Transaction(#[source] DbErr),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
