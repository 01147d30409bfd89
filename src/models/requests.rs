use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to open a new quiz session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Start with the canned sample profile instead of an empty quiz.
    /// Falls back to the configured default when absent.
    #[serde(default, alias = "sampleData")]
    pub sample_data: Option<bool>,
}

/// Request to toggle a style card in the quiz
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToggleStyleRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "styleId")]
    pub style_id: String,
}

/// Request to toggle a store in the favorites list
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToggleFavoriteRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "storeId")]
    pub store_id: String,
}

/// Request to switch sample-data mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleDataRequest {
    pub enabled: bool,
}

/// Query parameters for the store listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreListQuery {
    #[serde(default)]
    pub filter: Option<String>,
}
