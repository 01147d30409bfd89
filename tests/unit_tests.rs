// Unit tests for StyleMatch

use serde_json::{json, Value};
use stylematch::core::{
    extract_object, filter_labels, normalize_outcome, shape_match_result, shape_style_profile,
    DiscoverFilter,
};
use stylematch::models::{AgentOutcome, MatchTier, StoreMatch, StyleProfile};
use stylematch::services::Catalog;

#[test]
fn test_normalizer_prefers_decoded_object() {
    let raw = json!({ "vibe_name": "Direct" });
    let parsed = extract_object(&raw).unwrap();
    assert_eq!(parsed["vibe_name"], "Direct");
}

#[test]
fn test_normalizer_strict_string() {
    let raw = Value::String(r#"{"match_summary":"ok"}"#.to_string());
    assert_eq!(extract_object(&raw).unwrap()["match_summary"], "ok");
}

#[test]
fn test_normalizer_salvages_from_prose() {
    let raw = Value::String("Here is your profile:\n{\"vibe_name\":\"Salvaged\"}\nEnjoy!".to_string());
    assert_eq!(extract_object(&raw).unwrap()["vibe_name"], "Salvaged");
}

#[test]
fn test_normalizer_rejects_non_objects() {
    for raw in [
        Value::Null,
        json!(42),
        json!(true),
        json!(["a", "b"]),
        Value::String("no braces here".to_string()),
        Value::String("} backwards {".to_string()),
        Value::String("[1, 2, 3]".to_string()),
    ] {
        assert!(extract_object(&raw).is_none(), "expected no object from {}", raw);
    }
}

#[test]
fn test_normalizer_two_objects_in_prose_is_unparseable() {
    // the greedy span covers both objects and is not valid JSON
    let raw = Value::String("A {\"a\":1} and B {\"b\":2}".to_string());
    assert!(extract_object(&raw).is_none());
}

#[test]
fn test_normalizer_failure_outcome() {
    assert!(normalize_outcome(&AgentOutcome::failure("busy")).is_none());
    assert!(normalize_outcome(&AgentOutcome::Success { payload: json!({}) }).is_none());
}

#[test]
fn test_normalized_object_is_stable() {
    let raw = Value::String("noise {\"x\":{\"y\":[1,2]}} noise".to_string());
    let first = extract_object(&raw).unwrap();
    let again = extract_object(&Value::Object(first.clone())).unwrap();
    assert_eq!(first, again);
}

#[test]
fn test_shaping_an_empty_object() {
    let parsed = extract_object(&json!({})).unwrap();

    assert_eq!(shape_style_profile(&parsed), StyleProfile::default());

    let matches = shape_match_result(&parsed);
    assert!(matches.ranked_stores.is_empty());
    assert_eq!(matches.match_summary, "");
}

#[test]
fn test_shaping_partial_ranking() {
    let parsed = extract_object(&Value::String(
        r#"{"ranked_stores":[{"store_name":"Clarity","match_percentage":77.5},"junk"]}"#.to_string(),
    ))
    .unwrap();

    let matches = shape_match_result(&parsed);
    assert_eq!(matches.ranked_stores.len(), 2);
    assert_eq!(matches.ranked_stores[0].store_name, "Clarity");
    assert_eq!(matches.ranked_stores[0].match_percentage, 77.5);
    assert!(matches.ranked_stores[0].shared_tags.is_empty());
    assert_eq!(matches.ranked_stores[1], StoreMatch::default());
    assert_eq!(matches.percentage_for("Clarity"), 77.5);
    assert_eq!(matches.percentage_for("Atelier Noir"), 0.0);
}

#[test]
fn test_match_tier_boundaries() {
    assert_eq!(MatchTier::from_percentage(80.0), MatchTier::Strong);
    assert_eq!(MatchTier::from_percentage(79.9), MatchTier::Moderate);
    assert_eq!(MatchTier::from_percentage(50.0), MatchTier::Moderate);
    assert_eq!(MatchTier::from_percentage(49.9), MatchTier::Weak);
}

#[test]
fn test_filter_labels_and_parsing() {
    let labels = filter_labels(&Catalog::builtin());
    assert_eq!(&labels[..3], &["All", "Nearest", "Best Match"]);
    assert!(labels.contains(&"Minimalist".to_string()));

    assert_eq!(DiscoverFilter::parse(None), DiscoverFilter::All);
    assert_eq!(DiscoverFilter::parse(Some("Best Match")), DiscoverFilter::BestMatch);
    assert_eq!(
        DiscoverFilter::parse(Some("Vintage")),
        DiscoverFilter::Category("Vintage".to_string())
    );
}
