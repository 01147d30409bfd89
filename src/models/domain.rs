use serde::{Deserialize, Serialize};

/// A quiz card the user can pick when describing their taste
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleOption {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// A seasonal collection shown on a store's detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub season: String,
}

/// Boutique catalog entry. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub description: String,
    pub brand_tags: Vec<String>,
    pub collection_descriptors: Vec<String>,
    pub aesthetic_category: String,
    pub address: String,
    pub distance: String,
    pub hours: String,
    pub phone: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub collections: Vec<Collection>,
}

impl Store {
    /// Numeric prefix of the distance label ("0.3 mi" -> 0.3).
    ///
    /// Labels without a leading number sort last.
    pub fn distance_miles(&self) -> f64 {
        let numeric: String = self
            .distance
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        numeric.parse().unwrap_or(f64::INFINITY)
    }
}

/// Normalized style profile produced by the style-analysis agent
///
/// Every field is always populated after shaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub vibe_name: String,
    pub style_tags: Vec<String>,
    pub color_preferences: Vec<String>,
    pub silhouette_preferences: Vec<String>,
    pub vibe_description: String,
}

pub const DEFAULT_VIBE_NAME: &str = "Your Style";

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            vibe_name: DEFAULT_VIBE_NAME.to_string(),
            style_tags: Vec::new(),
            color_preferences: Vec::new(),
            silhouette_preferences: Vec::new(),
            vibe_description: String::new(),
        }
    }
}

/// One store's compatibility with a style profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreMatch {
    pub store_name: String,
    /// Expected in 0..=100, not enforced.
    pub match_percentage: f64,
    pub match_explanation: String,
    pub shared_tags: Vec<String>,
}

/// Ranked store matches plus the agent's overall summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub ranked_stores: Vec<StoreMatch>,
    pub match_summary: String,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.ranked_stores.is_empty()
    }

    /// Find the match for a store by exact name
    pub fn for_store(&self, store_name: &str) -> Option<&StoreMatch> {
        self.ranked_stores.iter().find(|m| m.store_name == store_name)
    }

    /// Match percentage for a store, 0 when the agent did not rank it
    pub fn percentage_for(&self, store_name: &str) -> f64 {
        self.for_store(store_name)
            .map(|m| m.match_percentage)
            .unwrap_or(0.0)
    }
}

/// Map pin colouring bucket for a match percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Strong,
    Moderate,
    Weak,
}

impl MatchTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            MatchTier::Strong
        } else if percentage >= 50.0 {
            MatchTier::Moderate
        } else {
            MatchTier::Weak
        }
    }
}
