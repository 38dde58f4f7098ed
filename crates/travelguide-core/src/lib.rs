pub mod app_config;
pub mod config;
pub mod favorites;
pub mod places;
pub mod recent;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use favorites::{is_favorite, plan_toggle, FavoriteAction, FavoriteEntry, NewFavorite};
pub use places::{GeocodeResult, PointOfInterest, SearchState};
pub use recent::{should_record, RecentSearchEntry};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
