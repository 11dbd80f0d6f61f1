use sea_orm_migration::{
    prelude::*,
    sea_orm::{ConnectionTrait, DatabaseBackend},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// An external-content FTS5 table over one `movies` column, keyed by `movie_id`.
struct FullTextIndex {
    table: &'static str,
    column: &'static str,
}

const FULL_TEXT_INDEXES: [FullTextIndex; 2] = [
    FullTextIndex { table: "movie_title_fts", column: "title" },
    FullTextIndex { table: "movie_overview_fts", column: "overview" },
];

impl FullTextIndex {
    fn create_statements(&self) -> Vec<String> {
        let Self { table, column } = self;
        vec![
            format!(
                "CREATE VIRTUAL TABLE IF NOT EXISTS {table} \
                 USING fts5({column}, content='movies', content_rowid='movie_id')"
            ),
            format!(
                "CREATE TRIGGER IF NOT EXISTS {table}_ai AFTER INSERT ON movies BEGIN \
                 INSERT INTO {table}(rowid, {column}) VALUES (new.movie_id, new.{column}); \
                 END"
            ),
            format!(
                "CREATE TRIGGER IF NOT EXISTS {table}_ad AFTER DELETE ON movies BEGIN \
                 INSERT INTO {table}({table}, rowid, {column}) VALUES ('delete', old.movie_id, old.{column}); \
                 END"
            ),
            format!(
                "CREATE TRIGGER IF NOT EXISTS {table}_au AFTER UPDATE ON movies BEGIN \
                 INSERT INTO {table}({table}, rowid, {column}) VALUES ('delete', old.movie_id, old.{column}); \
                 INSERT INTO {table}(rowid, {column}) VALUES (new.movie_id, new.{column}); \
                 END"
            ),
            // picks up rows loaded before the index existed
            format!("INSERT INTO {table}({table}) VALUES ('rebuild')"),
        ]
    }

    fn drop_statements(&self) -> Vec<String> {
        let table = self.table;
        vec![
            format!("DROP TRIGGER IF EXISTS {table}_au"),
            format!("DROP TRIGGER IF EXISTS {table}_ad"),
            format!("DROP TRIGGER IF EXISTS {table}_ai"),
            format!("DROP TABLE IF EXISTS {table}"),
        ]
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DatabaseBackend::Sqlite {
            return Err(DbErr::Migration(
                "full-text indexes are built on SQLite FTS5 and need a SQLite backend".to_owned(),
            ));
        }

        let db = manager.get_connection();
        for index in &FULL_TEXT_INDEXES {
            for stmt in index.create_statements() {
                db.execute_unprepared(&stmt).await?;
            }
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for index in FULL_TEXT_INDEXES.iter().rev() {
            for stmt in index.drop_statements() {
                db.execute_unprepared(&stmt).await?;
            }
        }
        Ok(())
    }
}
