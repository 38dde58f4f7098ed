//! `search` command: run the city search, record it, and toggle favorites.

use serde::Serialize;
use sqlx::SqlitePool;
use travelguide_core::{
    is_favorite, plan_toggle, should_record, AppConfig, FavoriteAction, FavoriteEntry,
    PointOfInterest, SearchState,
};
use travelguide_geoapify::{GeoapifyClient, StaticMap};
use travelguide_search::{PlacesApi, SearchWorkflow};

/// One search result as printed by `--json`.
#[derive(Debug, Serialize)]
pub(crate) struct PoiView {
    pub index: usize,
    pub name: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub favorite: bool,
    pub map_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchOutput {
    pub city: String,
    pub pois: Vec<PoiView>,
}

pub(crate) fn build_views(
    pois: &[PointOfInterest],
    favorites: &[FavoriteEntry],
    maps: Option<&StaticMap>,
) -> Vec<PoiView> {
    pois.iter()
        .enumerate()
        .map(|(i, poi)| PoiView {
            index: i + 1,
            name: poi.name.clone(),
            longitude: poi.longitude,
            latitude: poi.latitude,
            favorite: is_favorite(poi, favorites),
            map_url: maps
                .and_then(|m| m.for_poi(poi))
                .map(|url| url.to_string()),
        })
        .collect()
}

pub(crate) fn format_view(view: &PoiView) -> String {
    let marker = if view.favorite { "\u{2605}" } else { " " };
    let name = view.name.as_deref().unwrap_or("Unknown POI");
    let coords = match (view.latitude, view.longitude) {
        (Some(lat), Some(lon)) => format!("{lat}, {lon}"),
        _ => "no location".to_string(),
    };
    format!("{:>3}. {marker} {name} ({coords})", view.index)
}

/// Trigger one search and record `city` as a recent search, whatever the
/// outcome, unless the term is already in the list.
///
/// # Errors
///
/// Returns an error if a store operation fails or another search is still
/// running on `workflow`.
pub(crate) async fn search_and_record<P: PlacesApi>(
    pool: &SqlitePool,
    workflow: &SearchWorkflow<P>,
    city: &str,
    now_ms: i64,
) -> anyhow::Result<SearchState> {
    // In-memory mirror of the recent list, used for dedup.
    let recent_terms: Vec<String> = travelguide_db::list_recent_searches(pool)
        .await?
        .into_iter()
        .map(|e| e.search_term)
        .collect();

    let state = workflow
        .trigger(city)
        .await
        .ok_or_else(|| anyhow::anyhow!("a search is already running"))?;

    if should_record(city, &recent_terms) {
        travelguide_db::insert_recent_search(pool, city, now_ms).await?;
    }
    Ok(state)
}

/// Search `city`, record it as a recent search, apply any favorite toggles,
/// and print the results.
///
/// # Errors
///
/// Returns an error if the API key is missing, the city is blank, a store
/// operation fails, a toggle index is out of range, or the search fails.
pub(crate) async fn run_search(
    pool: &SqlitePool,
    config: &AppConfig,
    city: &str,
    toggles: &[usize],
    json: bool,
) -> anyhow::Result<()> {
    let api_key = config
        .usable_api_key()
        .ok_or_else(|| anyhow::anyhow!("GEOAPIFY_API_KEY is not set; cannot search"))?;
    if city.trim().is_empty() {
        anyhow::bail!("city must not be blank");
    }

    let client = GeoapifyClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.geoapify_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Geoapify client: {e}"))?;
    let maps = crate::static_map(config);

    let workflow = SearchWorkflow::new(client);
    let now = chrono::Utc::now().timestamp_millis();
    let state = search_and_record(pool, &workflow, city, now).await?;

    let pois = match state {
        SearchState::Loaded(pois) => pois,
        SearchState::Failed(message) => anyhow::bail!("{message}"),
        SearchState::Idle | SearchState::Loading => {
            anyhow::bail!("search did not complete")
        }
    };

    let mut favorites = travelguide_db::list_favorites(pool).await?;
    let current_city = city.trim();
    for &n in toggles {
        let poi = n
            .checked_sub(1)
            .and_then(|i| pois.get(i))
            .ok_or_else(|| anyhow::anyhow!("--toggle {n} is out of range (1..={})", pois.len()))?;
        let action = plan_toggle(poi, current_city, &favorites);
        travelguide_db::apply_favorite_action(pool, &action).await?;
        match action {
            FavoriteAction::Insert(_) => eprintln!("added {} to favorites", poi.display_name()),
            FavoriteAction::Delete(_) => {
                eprintln!("removed {} from favorites", poi.display_name());
            }
        }
        favorites = travelguide_db::list_favorites(pool).await?;
    }

    let views = build_views(&pois, &favorites, maps.as_ref());

    if json {
        let output = SearchOutput {
            city: current_city.to_string(),
            pois: views,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if views.is_empty() {
        println!("no attractions found for {current_city}");
        return Ok(());
    }

    println!("attractions in {current_city}:");
    for view in &views {
        println!("{}", format_view(view));
        if let Some(url) = &view.map_url {
            println!("       map: {url}");
        }
    }
    Ok(())
}
