use std::collections::HashSet;
use crate::models::{Collection, MatchResult, StoreMatch, Store, StyleOption, StyleProfile};

/// Static style options and boutiques the quiz and matcher work against
#[derive(Debug, Clone)]
pub struct Catalog {
    styles: Vec<StyleOption>,
    stores: Vec<Store>,
}

impl Catalog {
    pub fn new(styles: Vec<StyleOption>, stores: Vec<Store>) -> Self {
        Self { styles, stores }
    }

    /// The built-in SoHo catalog
    pub fn builtin() -> Self {
        Self::new(builtin_styles(), builtin_stores())
    }

    pub fn styles(&self) -> &[StyleOption] {
        &self.styles
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn style(&self, id: &str) -> Option<&StyleOption> {
        self.styles.iter().find(|s| s.id == id)
    }

    pub fn store(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == id)
    }

    pub fn store_by_name(&self, name: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.name == name)
    }

    /// Options whose id is in `ids`, in catalog order
    pub fn selected_styles(&self, ids: &[String]) -> Vec<&StyleOption> {
        self.styles
            .iter()
            .filter(|opt| ids.contains(&opt.id))
            .collect()
    }

    /// Distinct aesthetic categories in catalog order
    pub fn aesthetic_categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.stores
            .iter()
            .filter(|s| seen.insert(s.aesthetic_category.as_str()))
            .map(|s| s.aesthetic_category.clone())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn style(id: &str, name: &str, category: &str, description: &str, tags: &[&str], image: &str) -> StyleOption {
    StyleOption {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        tags: strings(tags),
        image_url: format!("https://images.unsplash.com/{}?w=400&h=500&fit=crop", image),
    }
}

fn collection(name: &str, image: &str, season: &str) -> Collection {
    Collection {
        name: name.to_string(),
        image_url: format!("https://images.unsplash.com/{}?w=300&h=300&fit=crop", image),
        season: season.to_string(),
    }
}

fn builtin_styles() -> Vec<StyleOption> {
    vec![
        style("1", "Minimalist Chic", "Minimalist", "Clean lines, neutral tones, effortless elegance", &["minimalist", "clean", "neutral"], "photo-1490481651871-ab68de25d43d"),
        style("2", "Street Luxe", "Streetwear", "Urban edge meets high-end fashion", &["streetwear", "urban", "edgy"], "photo-1509631179647-0177331693ae"),
        style("3", "Bohemian Spirit", "Bohemian", "Free-flowing fabrics, earthy tones, artistic flair", &["bohemian", "boho", "free-spirited"], "photo-1518622358385-8ea7d0794bf6"),
        style("4", "Classic Tailored", "Classic", "Timeless cuts, structured silhouettes, refined details", &["classic", "tailored", "refined"], "photo-1507003211169-0a1dd7228f2d"),
        style("5", "Avant-Garde", "Avant-Garde", "Experimental shapes, bold statements, artistic expression", &["avant-garde", "experimental", "bold"], "photo-1558618666-fcd25c85f82e"),
        style("6", "Scandinavian Ease", "Minimalist", "Nordic simplicity, functional beauty, muted palettes", &["scandinavian", "minimal", "functional"], "photo-1485462537746-965f33f7f6a7"),
        style("7", "Romantic Feminine", "Romantic", "Soft fabrics, floral motifs, delicate details", &["romantic", "feminine", "delicate"], "photo-1502716119720-b23a1e3b3c42"),
        style("8", "Athleisure Luxe", "Athleisure", "Performance meets luxury, sporty sophistication", &["athleisure", "sporty", "luxury"], "photo-1515886657613-9f3515b0c78f"),
        style("9", "Vintage Revival", "Vintage", "Retro-inspired pieces, nostalgic charm, curated finds", &["vintage", "retro", "nostalgic"], "photo-1529139574466-a303027c1d8b"),
        style("10", "Power Dressing", "Professional", "Sharp suits, commanding presence, modern authority", &["power", "professional", "sharp"], "photo-1487222477894-8943e31ef7b2"),
        style("11", "Coastal Relaxed", "Casual", "Breezy linens, sun-washed tones, effortless cool", &["coastal", "relaxed", "casual"], "photo-1469334031218-e382a71b716b"),
        style("12", "Dark Romantic", "Edgy", "Moody palettes, rich textures, dramatic silhouettes", &["dark", "romantic", "dramatic"], "photo-1496747611176-843222e1e57c"),
    ]
}

struct StoreSeed<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    brand_tags: &'a [&'a str],
    collection_descriptors: &'a [&'a str],
    aesthetic_category: &'a str,
    address: &'a str,
    distance: &'a str,
    hours: &'a str,
    phone: &'a str,
    image: &'a str,
}

impl StoreSeed<'_> {
    fn build(self, collections: Vec<Collection>) -> Store {
        Store {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            brand_tags: strings(self.brand_tags),
            collection_descriptors: strings(self.collection_descriptors),
            aesthetic_category: self.aesthetic_category.to_string(),
            address: self.address.to_string(),
            distance: self.distance.to_string(),
            hours: self.hours.to_string(),
            phone: self.phone.to_string(),
            image_url: format!("https://images.unsplash.com/{}?w=600&h=400&fit=crop", self.image),
            collections,
        }
    }
}

fn builtin_stores() -> Vec<Store> {
    vec![
        StoreSeed {
            id: "s1", name: "Maison Blanc",
            description: "A minimalist boutique focused on clean aesthetics and timeless wardrobe staples.",
            brand_tags: &["minimalist", "clean", "neutral", "tailored", "scandinavian"],
            collection_descriptors: &["curated basics", "capsule wardrobe", "monochrome essentials"],
            aesthetic_category: "Minimalist",
            address: "42 Bleecker St, SoHo", distance: "0.3 mi", hours: "10AM - 8PM", phone: "(212) 555-0101",
            image: "photo-1441986300917-64674bd600d8",
        }
        .build(vec![
            collection("Winter Essentials", "photo-1489987707025-afc232f7ea0f", "Winter 2026"),
            collection("Linen Edit", "photo-1523381210434-271e8be1f52b", "Spring 2026"),
        ]),
        StoreSeed {
            id: "s2", name: "GRDN Studio",
            description: "Urban streetwear meets high fashion. Limited drops and exclusive collaborations.",
            brand_tags: &["streetwear", "urban", "edgy", "bold", "experimental"],
            collection_descriptors: &["limited editions", "sneaker collabs", "graphic art"],
            aesthetic_category: "Streetwear",
            address: "187 Orchard St, LES", distance: "0.8 mi", hours: "11AM - 9PM", phone: "(212) 555-0202",
            image: "photo-1528698827591-e19cef51a699",
        }
        .build(vec![
            collection("Drop 07", "photo-1556906781-9a412961c28c", "SS26"),
            collection("Artist Series", "photo-1523398002811-999ca8dec234", "Ongoing"),
        ]),
        StoreSeed {
            id: "s3", name: "Terra & Sage",
            description: "Bohemian-inspired boutique with artisan goods and earth-toned fashion.",
            brand_tags: &["bohemian", "boho", "free-spirited", "romantic", "vintage"],
            collection_descriptors: &["handcrafted textiles", "artisan jewelry", "earth-toned dresses"],
            aesthetic_category: "Bohemian",
            address: "55 Bedford Ave, Williamsburg", distance: "1.2 mi", hours: "10AM - 7PM", phone: "(718) 555-0303",
            image: "photo-1567401893414-76b7b1e5a7a5",
        }
        .build(vec![
            collection("Desert Bloom", "photo-1469334031218-e382a71b716b", "Spring 2026"),
        ]),
        StoreSeed {
            id: "s4", name: "Atelier Noir",
            description: "Dark, dramatic fashion for those who dare. Sculptural silhouettes and luxe textures.",
            brand_tags: &["dark", "dramatic", "avant-garde", "edgy", "romantic"],
            collection_descriptors: &["sculptural coats", "dark romanticism", "architectural accessories"],
            aesthetic_category: "Avant-Garde",
            address: "12 Crosby St, SoHo", distance: "0.5 mi", hours: "11AM - 8PM", phone: "(212) 555-0404",
            image: "photo-1555529669-e69e7aa0ba9a",
        }
        .build(vec![
            collection("Shadow Line", "photo-1558618666-fcd25c85f82e", "FW26"),
            collection("Velvet Hours", "photo-1496747611176-843222e1e57c", "FW26"),
        ]),
        StoreSeed {
            id: "s5", name: "Form & Function",
            description: "Performance luxury. Athleisure elevated with premium fabrics and sharp design.",
            brand_tags: &["athleisure", "sporty", "luxury", "functional", "minimal"],
            collection_descriptors: &["performance knits", "luxury activewear", "travel capsules"],
            aesthetic_category: "Athleisure",
            address: "90 Prince St, SoHo", distance: "0.4 mi", hours: "9AM - 9PM", phone: "(212) 555-0505",
            image: "photo-1472851294608-062f824d29cc",
        }
        .build(vec![
            collection("Move Collection", "photo-1515886657613-9f3515b0c78f", "SS26"),
        ]),
        StoreSeed {
            id: "s6", name: "The Archive",
            description: "Curated vintage finds from the 60s through Y2K. Every piece tells a story.",
            brand_tags: &["vintage", "retro", "nostalgic", "curated", "classic"],
            collection_descriptors: &["vintage denim", "retro prints", "designer resale"],
            aesthetic_category: "Vintage",
            address: "213 Grand St, Chinatown", distance: "0.9 mi", hours: "12PM - 8PM", phone: "(212) 555-0606",
            image: "photo-1558618666-fcd25c85f82e",
        }
        .build(vec![
            collection("90s Revival", "photo-1529139574466-a303027c1d8b", "Curated"),
        ]),
        StoreSeed {
            id: "s7", name: "Clarity",
            description: "Refined professional wardrobe essentials for the modern power dresser.",
            brand_tags: &["professional", "sharp", "tailored", "classic", "refined"],
            collection_descriptors: &["power suits", "boardroom essentials", "modern workwear"],
            aesthetic_category: "Professional",
            address: "5 E 57th St, Midtown", distance: "2.1 mi", hours: "10AM - 7PM", phone: "(212) 555-0707",
            image: "photo-1441984904996-e0b6ba687e04",
        }
        .build(vec![
            collection("Executive Edit", "photo-1487222477894-8943e31ef7b2", "SS26"),
            collection("After Hours", "photo-1507003211169-0a1dd7228f2d", "FW26"),
        ]),
        StoreSeed {
            id: "s8", name: "Dune Collective",
            description: "Coastal-inspired relaxed luxury. Effortless pieces for sun-soaked living.",
            brand_tags: &["coastal", "relaxed", "casual", "feminine", "delicate"],
            collection_descriptors: &["resort wear", "linen collection", "beach-to-bar"],
            aesthetic_category: "Casual",
            address: "78 N 6th St, Williamsburg", distance: "1.5 mi", hours: "10AM - 7PM", phone: "(718) 555-0808",
            image: "photo-1441986300917-64674bd600d8",
        }
        .build(vec![
            collection("Shore Line", "photo-1469334031218-e382a71b716b", "SS26"),
        ]),
    ]
}

/// Canned profile shown in sample-data mode
pub fn sample_profile() -> StyleProfile {
    StyleProfile {
        vibe_name: "Urban Minimalist".to_string(),
        style_tags: strings(&["minimalist", "clean", "tailored", "neutral", "scandinavian", "functional"]),
        color_preferences: strings(&["ivory", "charcoal", "camel", "slate", "off-white"]),
        silhouette_preferences: strings(&["oversized coats", "straight-leg trousers", "structured blazers", "relaxed knitwear"]),
        vibe_description: "Your style blends Scandinavian restraint with urban sophistication. You gravitate toward neutral palettes and clean architectural lines, preferring quality fabrics and timeless silhouettes over trend-driven pieces. Your wardrobe is a curated capsule of versatile essentials.".to_string(),
    }
}

fn sample_match(store_name: &str, percentage: f64, explanation: &str, tags: &[&str]) -> StoreMatch {
    StoreMatch {
        store_name: store_name.to_string(),
        match_percentage: percentage,
        match_explanation: explanation.to_string(),
        shared_tags: strings(tags),
    }
}

/// Canned ranked matches and summary shown in sample-data mode
pub fn sample_matches() -> MatchResult {
    MatchResult {
        ranked_stores: vec![
            sample_match("Maison Blanc", 94.0, "A near-perfect alignment with your minimalist aesthetic. Their curated basics and capsule wardrobe approach mirrors your preference for clean, versatile pieces.", &["minimalist", "clean", "neutral", "tailored", "scandinavian"]),
            sample_match("Clarity", 82.0, "Strong overlap in tailored, refined pieces. Their professional wardrobe essentials complement your structured silhouette preferences.", &["tailored", "classic", "refined"]),
            sample_match("Form & Function", 75.0, "Shared appreciation for functional minimalism. Their performance luxury line aligns with your love for quality and clean design.", &["functional", "minimal", "luxury"]),
            sample_match("Dune Collective", 58.0, "Some crossover in relaxed, neutral-toned pieces, though their coastal aesthetic differs from your urban core.", &["relaxed", "casual"]),
            sample_match("GRDN Studio", 42.0, "Limited overlap. Their streetwear-forward aesthetic diverges from your minimalist sensibility.", &["urban"]),
            sample_match("The Archive", 38.0, "Vintage finds occasionally align with your classic taste, but the retro aesthetic is largely different from your modern approach.", &["classic", "curated"]),
            sample_match("Terra & Sage", 25.0, "Earth tones offer some palette overlap, but the bohemian silhouettes diverge significantly from your structured preferences.", &["vintage"]),
            sample_match("Atelier Noir", 20.0, "Minimal alignment. Their dramatic, avant-garde approach contrasts with your understated minimalism.", &["edgy"]),
        ],
        match_summary: "Your Urban Minimalist style aligns most strongly with boutiques that prioritize clean lines, neutral palettes, and curated essentials. SoHo emerges as your ideal shopping district, with Maison Blanc and Clarity offering the closest aesthetic matches to your wardrobe vision.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.styles().len(), 12);
        assert_eq!(catalog.stores().len(), 8);
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.style("3").map(|s| s.name.as_str()), Some("Bohemian Spirit"));
        assert_eq!(catalog.store("s7").map(|s| s.name.as_str()), Some("Clarity"));
        assert_eq!(catalog.store_by_name("Atelier Noir").map(|s| s.id.as_str()), Some("s4"));
        assert!(catalog.style("99").is_none());
    }

    #[test]
    fn test_selected_styles_follow_catalog_order() {
        let catalog = Catalog::builtin();
        let ids = vec!["9".to_string(), "1".to_string(), "4".to_string()];
        let names: Vec<&str> = catalog.selected_styles(&ids).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Minimalist Chic", "Classic Tailored", "Vintage Revival"]);
    }

    #[test]
    fn test_aesthetic_categories_are_distinct() {
        let categories = Catalog::builtin().aesthetic_categories();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0], "Minimalist");
        assert_eq!(categories[7], "Casual");
    }

    #[test]
    fn test_sample_matches_name_catalog_stores() {
        let catalog = Catalog::builtin();
        for m in &sample_matches().ranked_stores {
            assert!(catalog.store_by_name(&m.store_name).is_some(), "{} missing", m.store_name);
        }
    }
}
