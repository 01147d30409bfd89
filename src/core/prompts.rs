use crate::models::{Store, StyleOption, StyleProfile};

/// Build the instruction sent to the style-analysis agent
///
/// One line per selected option:
/// `- {name} ({category}): {description}. Tags: {tag, tag}`
pub fn style_analysis_prompt(selected: &[&StyleOption]) -> String {
    let options = selected
        .iter()
        .map(|opt| {
            format!(
                "- {} ({}): {}. Tags: {}",
                opt.name,
                opt.category,
                opt.description,
                opt.tags.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze these style selections and generate a style profile. \
         The user selected the following styles:\n\n{}\n\n\
         Generate a JSON style profile with: \
         vibe_name (catchy 2-3 word descriptor), \
         style_tags (array of style keywords), \
         color_preferences (array of color names), \
         silhouette_preferences (array of silhouette types), \
         vibe_description (2-3 sentence style personality description).",
        options
    )
}

/// Build the instruction sent to the store-matching agent
pub fn store_match_prompt(profile: &StyleProfile, stores: &[Store]) -> String {
    let stores = stores
        .iter()
        .map(|s| {
            format!(
                "- {} ({}): Tags: {}. Collections: {}",
                s.name,
                s.aesthetic_category,
                s.brand_tags.join(", "),
                s.collection_descriptors.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Match this style profile against these stores and rank them by compatibility.\n\n\
         Style Profile:\n\
         - Vibe: {}\n\
         - Tags: {}\n\
         - Colors: {}\n\
         - Silhouettes: {}\n\
         - Description: {}\n\n\
         Stores:\n{}\n\n\
         Return a JSON with: \
         ranked_stores (array of {{store_name, match_percentage (0-100), match_explanation, shared_tags}}), \
         match_summary (brief overall summary).",
        profile.vibe_name,
        profile.style_tags.join(", "),
        profile.color_preferences.join(", "),
        profile.silhouette_preferences.join(", "),
        profile.vibe_description,
        stores
    )
}
