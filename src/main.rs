use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use filmdb::{
    Catalog, Config,
    import::{self, Dataset},
    report::{self, Tabular},
};
use serde::Serialize;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "filmdb", version, about = "Movie catalog schema and analytical queries")]
struct Cli {
    /// Overrides DATABASE_URL.
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Print rows as JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report that the schema is ready. Opening the database applies pending migrations.
    Init,
    /// Import a JSON dataset.
    Load { path: PathBuf },
    /// Full-text search over plot overviews.
    Plot { phrase: String },
    /// Full-text search over titles.
    Title { phrase: String },
    /// Leading actors who keep appearing together.
    ActorPairs {
        #[arg(long, default_value_t = 3)]
        min_movies: u32,
    },
    /// Directors ranked by total revenue.
    Directors {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Genre combinations ranked by average revenue.
    GenrePairs {
        #[arg(long, default_value_t = 50_000_000)]
        min_revenue: i64,
    },
    /// Run the example invocation of every query.
    Demo,
}

#[derive(Clone, Copy)]
enum Output {
    Table,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,filmdb=debug,sqlx=warn".to_string()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env()?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    let output = if cli.json { Output::Json } else { Output::Table };

    let catalog = Catalog::open(&config).await?;
    let outcome = run(&catalog, cli.command, output).await;
    catalog.close().await?;
    outcome
}

async fn run(catalog: &Catalog, command: Command, output: Output) -> anyhow::Result<()> {
    match command {
        Command::Init => {
            info!("schema ready");
        }
        Command::Load { path } => {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            let dataset = Dataset::from_json(&raw)
                .with_context(|| format!("parsing {}", path.display()))?;
            let summary = import::load(catalog.db(), dataset).await?;
            info!(rows = summary.total(), "load finished");
        }
        Command::Plot { phrase } => {
            let rows = catalog.plot_search(&phrase).await?;
            emit(output, &format!("Plot search: {phrase:?}"), &rows)?;
        }
        Command::Title { phrase } => {
            let rows = catalog.title_search(&phrase).await?;
            emit(output, &format!("Title search: {phrase:?}"), &rows)?;
        }
        Command::ActorPairs { min_movies } => {
            let rows = catalog.actor_pairs(min_movies).await?;
            emit(output, &format!("Actor pairs with at least {min_movies} movies"), &rows)?;
        }
        Command::Directors { limit } => {
            let rows = catalog.top_directors(limit).await?;
            emit(output, &format!("Top {limit} directors by revenue"), &rows)?;
        }
        Command::GenrePairs { min_revenue } => {
            let rows = catalog.genre_pairs(min_revenue).await?;
            let floor = filmdb::models::Money(min_revenue);
            emit(output, &format!("Genre pairs with revenue >= {floor}"), &rows)?;
        }
        Command::Demo => demo(catalog, output).await,
    }
    Ok(())
}

/// The canonical example invocations. A failing query is reported and the
/// rest still run.
async fn demo(catalog: &Catalog, output: Output) {
    let results = [
        catalog
            .plot_search("apocalypse")
            .await
            .map(|rows| emit(output, "Plot search: \"apocalypse\"", &rows)),
        catalog
            .title_search("superhero")
            .await
            .map(|rows| emit(output, "Title search: \"superhero\"", &rows)),
        catalog
            .actor_pairs(3)
            .await
            .map(|rows| emit(output, "Actor pairs with at least 3 movies", &rows)),
        catalog
            .top_directors(10)
            .await
            .map(|rows| emit(output, "Top 10 directors by revenue", &rows)),
        catalog
            .genre_pairs(50_000_000)
            .await
            .map(|rows| emit(output, "Genre pairs with revenue >= $50,000,000", &rows)),
    ];

    for result in results {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(err)) => error!("could not print results: {err:#}"),
            Err(err) => error!("{:#}", anyhow::Error::from(err)),
        }
    }
}

fn emit<T: Tabular + Serialize>(output: Output, title: &str, rows: &[T]) -> anyhow::Result<()> {
    match output {
        Output::Table => println!("{}", report::render(title, rows)),
        Output::Json => println!("{}", serde_json::to_string_pretty(rows)?),
    }
    Ok(())
}
