use anyhow::Context;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://filmdb.db?mode=rwc";

/// Billing ranks below this value count as leading roles for actor pairing.
pub const DEFAULT_CAST_ORDER_CUTOFF: i32 = 5;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub cast_order_cutoff: i32,
    pub sql_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            cast_order_cutoff: DEFAULT_CAST_ORDER_CUTOFF,
            sql_log: false,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// A private in-memory database, mostly for tests.
    pub fn in_memory() -> Self {
        Self { database_url: "sqlite::memory:".to_string(), ..Self::default() }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let cast_order_cutoff = match lookup("CAST_ORDER_CUTOFF") {
            Some(raw) => raw.trim().parse().context("CAST_ORDER_CUTOFF")?,
            None => defaults.cast_order_cutoff,
        };

        let sql_log = match lookup("SQL_LOG") {
            Some(raw) => raw.trim().parse().context("SQL_LOG")?,
            None => defaults.sql_log,
        };

        Ok(Self { database_url, cast_order_cutoff, sql_log })
    }
}
