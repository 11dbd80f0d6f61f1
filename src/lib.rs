//! A movie catalog schema and the analytical queries that run over it.

pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod fts;
pub mod import;
pub mod models;
pub mod queries;
pub mod report;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, CatalogResult};
