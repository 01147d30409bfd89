use serde_json::Value;
use crate::core::normalize::ParsedObject;
use crate::models::{MatchResult, StoreMatch, StyleProfile, DEFAULT_VIBE_NAME};

/// Shape a parsed style-analysis payload into a `StyleProfile`
///
/// Missing or wrong-typed fields fall back to their defaults one by one;
/// the rest of the payload is kept.
pub fn shape_style_profile(parsed: &ParsedObject) -> StyleProfile {
    StyleProfile {
        vibe_name: text_field(parsed.get("vibe_name"), DEFAULT_VIBE_NAME),
        style_tags: string_list(parsed.get("style_tags")),
        color_preferences: string_list(parsed.get("color_preferences")),
        silhouette_preferences: string_list(parsed.get("silhouette_preferences")),
        vibe_description: text_field(parsed.get("vibe_description"), ""),
    }
}

/// Shape a parsed store-matching payload into a `MatchResult`
///
/// Each element of `ranked_stores` is shaped on its own, so a malformed
/// element becomes an all-default `StoreMatch` instead of dropping the list.
pub fn shape_match_result(parsed: &ParsedObject) -> MatchResult {
    let ranked_stores = match parsed.get("ranked_stores") {
        Some(Value::Array(entries)) => entries.iter().map(shape_store_match).collect(),
        _ => Vec::new(),
    };

    MatchResult {
        ranked_stores,
        match_summary: text_field(parsed.get("match_summary"), ""),
    }
}

/// Shape a single `ranked_stores` element
pub fn shape_store_match(entry: &Value) -> StoreMatch {
    let Some(fields) = entry.as_object() else {
        return StoreMatch::default();
    };

    StoreMatch {
        store_name: text_field(fields.get("store_name"), ""),
        match_percentage: fields
            .get("match_percentage")
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        match_explanation: text_field(fields.get("match_explanation"), ""),
        shared_tags: string_list(fields.get("shared_tags")),
    }
}

/// A string field, or `default` when absent, null, or not a string
#[inline]
fn text_field(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        _ => default.to_string(),
    }
}

/// A sequence of strings. Non-arrays become empty; scalar elements are
/// rendered as text and nested structures are skipped.
fn string_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> ParsedObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_object_yields_default_profile() {
        let profile = shape_style_profile(&ParsedObject::new());

        assert_eq!(profile, StyleProfile {
            vibe_name: "Your Style".to_string(),
            style_tags: vec![],
            color_preferences: vec![],
            silhouette_preferences: vec![],
            vibe_description: String::new(),
        });
    }

    #[test]
    fn test_full_profile() {
        let parsed = object(json!({
            "vibe_name": "Urban Minimalist",
            "style_tags": ["minimalist", "clean"],
            "color_preferences": ["ivory"],
            "silhouette_preferences": ["oversized coats"],
            "vibe_description": "Quiet and sharp."
        }));

        let profile = shape_style_profile(&parsed);
        assert_eq!(profile.vibe_name, "Urban Minimalist");
        assert_eq!(profile.style_tags, vec!["minimalist", "clean"]);
        assert_eq!(profile.color_preferences, vec!["ivory"]);
        assert_eq!(profile.silhouette_preferences, vec!["oversized coats"]);
        assert_eq!(profile.vibe_description, "Quiet and sharp.");
    }

    #[test]
    fn test_bare_string_is_not_split_into_tags() {
        let parsed = object(json!({ "style_tags": "minimalist" }));
        assert!(shape_style_profile(&parsed).style_tags.is_empty());
    }

    #[test]
    fn test_wrong_typed_fields_fall_back_individually() {
        let parsed = object(json!({
            "vibe_name": null,
            "style_tags": { "a": 1 },
            "color_preferences": ["navy", 7, null, ["nested"]],
            "vibe_description": 12
        }));

        let profile = shape_style_profile(&parsed);
        assert_eq!(profile.vibe_name, "Your Style");
        assert!(profile.style_tags.is_empty());
        assert_eq!(profile.color_preferences, vec!["navy", "7"]);
        assert_eq!(profile.vibe_description, "");
    }

    #[test]
    fn test_empty_vibe_name_is_kept() {
        let parsed = object(json!({ "vibe_name": "" }));
        assert_eq!(shape_style_profile(&parsed).vibe_name, "");
    }

    #[test]
    fn test_store_match_defaults() {
        let parsed = object(json!({ "ranked_stores": [{ "store_name": "X" }] }));
        let result = shape_match_result(&parsed);

        assert_eq!(result.ranked_stores, vec![StoreMatch {
            store_name: "X".to_string(),
            match_percentage: 0.0,
            match_explanation: String::new(),
            shared_tags: vec![],
        }]);
        assert_eq!(result.match_summary, "");
    }

    #[test]
    fn test_malformed_element_does_not_abort_list() {
        let parsed = object(json!({
            "ranked_stores": [
                { "store_name": "Maison Blanc", "match_percentage": 94, "shared_tags": ["clean"] },
                "garbage",
                null,
                { "store_name": "Clarity", "match_percentage": "82" }
            ],
            "match_summary": "SoHo suits you."
        }));

        let result = shape_match_result(&parsed);
        assert_eq!(result.ranked_stores.len(), 4);
        assert_eq!(result.ranked_stores[0].match_percentage, 94.0);
        assert_eq!(result.ranked_stores[0].shared_tags, vec!["clean"]);
        assert_eq!(result.ranked_stores[1], StoreMatch::default());
        assert_eq!(result.ranked_stores[2], StoreMatch::default());
        assert_eq!(result.ranked_stores[3].store_name, "Clarity");
        assert_eq!(result.ranked_stores[3].match_percentage, 0.0);
        assert_eq!(result.match_summary, "SoHo suits you.");
    }

    #[test]
    fn test_non_array_ranked_stores() {
        let parsed = object(json!({ "ranked_stores": "none", "match_summary": "Nothing close." }));
        let result = shape_match_result(&parsed);
        assert!(result.ranked_stores.is_empty());
        assert_eq!(result.match_summary, "Nothing close.");
    }

    #[test]
    fn test_percentage_outside_range_is_not_clamped() {
        let parsed = object(json!({ "ranked_stores": [{ "match_percentage": 140.5 }] }));
        assert_eq!(shape_match_result(&parsed).ranked_stores[0].match_percentage, 140.5);
    }
}
