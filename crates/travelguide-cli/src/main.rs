mod favorites;
mod recent;
mod search;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::favorites::FavoritesCommands;
use crate::recent::RecentCommands;

#[derive(Debug, Parser)]
#[command(name = "travelguide")]
#[command(about = "Find tourist attractions by city, keep favorites and recent searches")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search a city and list its attractions
    Search {
        /// City name, free text
        city: String,
        /// Toggle the N-th result (1-based) as a favorite; repeatable
        #[arg(long = "toggle", value_name = "N")]
        toggle: Vec<usize>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage favorite places
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
    /// Manage recent searches
    Recent {
        #[command(subcommand)]
        command: RecentCommands,
    },
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Apply pending migrations
    Migrate,
    /// Check the database connection
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = travelguide_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let pool_config = travelguide_db::PoolConfig::from_app_config(&config);
    let pool = travelguide_db::connect_pool(&config.database_url, pool_config).await?;

    if let Commands::Db { command } = &command {
        return run_db(&pool, command).await;
    }
    travelguide_db::run_migrations(&pool).await?;

    match command {
        Commands::Search { city, toggle, json } => {
            search::run_search(&pool, &config, &city, &toggle, json).await
        }
        Commands::Favorites { command } => favorites::run_favorites(&pool, &config, command).await,
        Commands::Recent { command } => recent::run_recent(&pool, &config, command).await,
        Commands::Db { .. } => Ok(()),
    }
}

async fn run_db(pool: &sqlx::SqlitePool, command: &DbCommands) -> anyhow::Result<()> {
    match command {
        DbCommands::Migrate => {
            let applied = travelguide_db::run_migrations(pool).await?;
            println!("applied {applied} migration(s)");
        }
        DbCommands::Ping => {
            travelguide_db::ping(pool).await?;
            println!("database ok");
        }
    }
    Ok(())
}

/// Static map builder for the configured key, if one is usable.
fn static_map(config: &travelguide_core::AppConfig) -> Option<travelguide_geoapify::StaticMap> {
    let key = config.usable_api_key()?;
    match travelguide_geoapify::StaticMap::with_base_url(key, &config.geoapify_maps_base_url) {
        Ok(maps) => Some(maps),
        Err(err) => {
            tracing::warn!(error = %err, "static map URLs disabled");
            None
        }
    }
}
