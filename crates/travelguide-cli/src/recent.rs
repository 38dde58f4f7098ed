//! `recent` command handlers.

use clap::Subcommand;
use sqlx::SqlitePool;
use travelguide_core::{AppConfig, RecentSearchEntry};

/// Sub-commands available under `recent`.
#[derive(Debug, Subcommand)]
pub enum RecentCommands {
    /// List recent searches, newest first
    List,
    /// Forget every recent search
    Clear,
    /// Search again for the N-th recent term (1-based, newest first)
    Search {
        index: usize,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

pub(crate) fn format_recent(position: usize, entry: &RecentSearchEntry) -> String {
    let when = entry.searched_at().map_or_else(
        || "\u{2014}".to_string(),
        |t| t.format("%Y-%m-%d %H:%M").to_string(),
    );
    format!("{position:>3}. {:<24}{when}", entry.search_term)
}

/// Dispatch a `recent` sub-command.
///
/// # Errors
///
/// Returns an error if a store operation fails, the index is out of range,
/// or the repeated search fails.
pub(crate) async fn run_recent(
    pool: &SqlitePool,
    config: &AppConfig,
    command: RecentCommands,
) -> anyhow::Result<()> {
    match command {
        RecentCommands::List => {
            let entries = travelguide_db::list_recent_searches(pool).await?;
            if entries.is_empty() {
                println!("no recent searches");
                return Ok(());
            }
            for (i, entry) in entries.iter().enumerate() {
                println!("{}", format_recent(i + 1, entry));
            }
            Ok(())
        }
        RecentCommands::Clear => {
            let removed = travelguide_db::clear_recent_searches(pool).await?;
            println!("cleared {removed} recent search(es)");
            Ok(())
        }
        RecentCommands::Search { index, json } => {
            let entries = travelguide_db::list_recent_searches(pool).await?;
            let entry = index
                .checked_sub(1)
                .and_then(|i| entries.get(i))
                .ok_or_else(|| {
                    anyhow::anyhow!("recent search {index} does not exist ({} stored)", entries.len())
                })?;
            crate::search::run_search(pool, config, &entry.search_term, &[], json).await
        }
    }
}
