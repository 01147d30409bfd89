use serde::{Deserialize, Serialize};
use std::fmt;
use crate::models::{MatchResult, MatchTier, Store, StoreMatch};
use crate::services::catalog::Catalog;

/// How many shared tags a listing card shows
const LISTING_TAG_LIMIT: usize = 3;

/// Filter chip on the discover screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoverFilter {
    All,
    Nearest,
    BestMatch,
    Category(String),
}

impl DiscoverFilter {
    /// Parse a chip label. Empty or missing labels mean `All`.
    pub fn parse(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            None | Some("") | Some("All") => DiscoverFilter::All,
            Some("Nearest") => DiscoverFilter::Nearest,
            Some("Best Match") => DiscoverFilter::BestMatch,
            Some(category) => DiscoverFilter::Category(category.to_string()),
        }
    }
}

impl fmt::Display for DiscoverFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoverFilter::All => write!(f, "All"),
            DiscoverFilter::Nearest => write!(f, "Nearest"),
            DiscoverFilter::BestMatch => write!(f, "Best Match"),
            DiscoverFilter::Category(c) => write!(f, "{}", c),
        }
    }
}

/// A store joined with its match and the viewer's favorite flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreListing {
    pub store: Store,
    #[serde(rename = "match")]
    pub store_match: Option<StoreMatch>,
    pub match_percentage: f64,
    pub match_tier: MatchTier,
    /// First few shared tags, for the card
    pub shared_tags: Vec<String>,
    pub is_favorite: bool,
}

/// Chip labels: the three orderings followed by each aesthetic category
pub fn filter_labels(catalog: &Catalog) -> Vec<String> {
    let mut labels = vec![
        DiscoverFilter::All.to_string(),
        DiscoverFilter::Nearest.to_string(),
        DiscoverFilter::BestMatch.to_string(),
    ];
    labels.extend(catalog.aesthetic_categories());
    labels
}

/// Join a store with its match by exact name
pub fn listing_for(store: &Store, matches: &MatchResult, favorites: &[String]) -> StoreListing {
    let store_match = matches.for_store(&store.name).cloned();
    let match_percentage = store_match
        .as_ref()
        .map(|m| m.match_percentage)
        .unwrap_or(0.0);
    let shared_tags = store_match
        .as_ref()
        .map(|m| m.shared_tags.iter().take(LISTING_TAG_LIMIT).cloned().collect())
        .unwrap_or_default();

    StoreListing {
        store: store.clone(),
        store_match,
        match_percentage,
        match_tier: MatchTier::from_percentage(match_percentage),
        shared_tags,
        is_favorite: favorites.contains(&store.id),
    }
}

/// Stores for the discover screen under the given filter
///
/// `All` keeps catalog order, `Nearest` sorts by distance, `Best Match`
/// sorts by match percentage (unmatched stores count as 0) and a category
/// keeps only that aesthetic. Sorts are stable.
pub fn list_stores(
    catalog: &Catalog,
    matches: &MatchResult,
    favorites: &[String],
    filter: &DiscoverFilter,
) -> Vec<StoreListing> {
    let mut stores: Vec<&Store> = catalog.stores().iter().collect();

    match filter {
        DiscoverFilter::All => {}
        DiscoverFilter::Nearest => {
            stores.sort_by(|a, b| {
                a.distance_miles()
                    .partial_cmp(&b.distance_miles())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        DiscoverFilter::BestMatch => {
            stores.sort_by(|a, b| {
                matches
                    .percentage_for(&b.name)
                    .partial_cmp(&matches.percentage_for(&a.name))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        DiscoverFilter::Category(category) => {
            stores.retain(|s| &s.aesthetic_category == category);
        }
    }

    stores
        .into_iter()
        .map(|store| listing_for(store, matches, favorites))
        .collect()
}

/// Favorited stores in catalog order
pub fn favorite_stores(catalog: &Catalog, matches: &MatchResult, favorites: &[String]) -> Vec<StoreListing> {
    catalog
        .stores()
        .iter()
        .filter(|s| favorites.contains(&s.id))
        .map(|store| listing_for(store, matches, favorites))
        .collect()
}
