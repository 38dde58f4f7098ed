//! `favorites` command handlers.

use clap::Subcommand;
use sqlx::SqlitePool;
use travelguide_core::{plan_toggle, AppConfig, FavoriteAction, FavoriteEntry, PointOfInterest};
use travelguide_db::DbError;

/// Sub-commands available under `favorites`.
#[derive(Debug, Subcommand)]
pub enum FavoritesCommands {
    /// List every favorite
    List {
        /// Print favorites as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a place to favorites, or remove it if it is already one
    Toggle {
        /// Place name as returned by a search
        #[arg(long)]
        name: Option<String>,
        /// Latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// City the place was found in
        #[arg(long)]
        city: String,
    },
    /// Remove a favorite by id
    Remove {
        /// Favorite id from `favorites list`
        id: i64,
    },
}

pub(crate) fn format_favorite(favorite: &FavoriteEntry) -> String {
    let coords = match (favorite.lat, favorite.lon) {
        (Some(lat), Some(lon)) => format!("{lat}, {lon}"),
        _ => "no location".to_string(),
    };
    format!(
        "{:>4}  {:<32}{:<16}{coords}",
        favorite.id,
        favorite.display_name(),
        favorite.city.as_deref().unwrap_or("\u{2014}"),
    )
}

/// Dispatch a `favorites` sub-command.
///
/// # Errors
///
/// Returns an error if a store operation fails or the requested favorite
/// does not exist.
pub(crate) async fn run_favorites(
    pool: &SqlitePool,
    config: &AppConfig,
    command: FavoritesCommands,
) -> anyhow::Result<()> {
    match command {
        FavoritesCommands::List { json } => run_list(pool, config, json).await,
        FavoritesCommands::Toggle {
            name,
            lat,
            lon,
            city,
        } => {
            let poi = PointOfInterest::from_coordinates(name, &[lon, lat]);
            let favorites = travelguide_db::list_favorites(pool).await?;
            let action = plan_toggle(&poi, &city, &favorites);
            travelguide_db::apply_favorite_action(pool, &action).await?;
            match action {
                FavoriteAction::Insert(_) => println!("added {} to favorites", poi.display_name()),
                FavoriteAction::Delete(_) => {
                    println!("removed {} from favorites", poi.display_name());
                }
            }
            Ok(())
        }
        FavoritesCommands::Remove { id } => match travelguide_db::remove_favorite(pool, id).await {
            Ok(()) => {
                println!("removed favorite {id}");
                Ok(())
            }
            Err(DbError::NotFound) => anyhow::bail!("no favorite with id {id}"),
            Err(err) => Err(err.into()),
        },
    }
}

async fn run_list(pool: &SqlitePool, config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let favorites = travelguide_db::list_favorites(pool).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&favorites)?);
        return Ok(());
    }

    if favorites.is_empty() {
        println!("no favorites yet");
        return Ok(());
    }

    let maps = crate::static_map(config);
    println!("{:>4}  {:<32}{:<16}LOCATION", "ID", "NAME", "CITY");
    for favorite in &favorites {
        println!("{}", format_favorite(favorite));
        if let Some(url) = maps.as_ref().and_then(|m| m.for_favorite(favorite)) {
            println!("      map: {url}");
        }
    }
    Ok(())
}
