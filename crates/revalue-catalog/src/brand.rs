//! Brand tier resolution.
//!
//! Tiers are checked in fixed priority order; the first tier with a keyword
//! contained in the normalized brand name wins. Brands matching nothing fall
//! through to the Standard tier with a neutral factor.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static TIERS: Lazy<Vec<BrandTier>> = Lazy::new(default_brand_tiers);

/// Brand reputation bucket controlling one price factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandTier {
    pub label: String,
    pub factor: f64,
    /// Lowercase keywords matched as substrings of the brand name
    pub keywords: Vec<String>,
}

impl BrandTier {
    /// Neutral tier for brands matching no keyword set
    pub fn standard() -> Self {
        Self {
            label: "Standard".to_string(),
            factor: 1.0,
            keywords: Vec::new(),
        }
    }
}

/// Built-in tiers in priority order: Premium, Business, Mainstream, Budget
pub fn default_brand_tiers() -> Vec<BrandTier> {
    vec![
        tier("Premium", 1.15, &["apple", "samsung", "google", "microsoft", "sony", "oneplus"]),
        tier("Business", 1.1, &["dell", "hp", "lenovo", "asus", "lg", "surface"]),
        tier(
            "Mainstream",
            1.03,
            &["xiaomi", "redmi", "realme", "oppo", "vivo", "motorola", "acer", "honor", "nokia"],
        ),
        tier("Budget", 0.92, &["itel", "lava", "infinix", "tecno", "micromax"]),
    ]
}

fn tier(label: &str, factor: f64, keywords: &[&str]) -> BrandTier {
    BrandTier {
        label: label.to_string(),
        factor,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Resolve a brand against the built-in tier table
pub fn resolve_brand_tier(brand: &str) -> BrandTier {
    resolve_in(&TIERS, brand)
}

/// Resolve a brand against a custom tier table, first match wins
pub fn resolve_in(tiers: &[BrandTier], brand: &str) -> BrandTier {
    let normalized = brand.trim().to_lowercase();
    if normalized.is_empty() {
        return BrandTier::standard();
    }
    for tier in tiers {
        if tier.keywords.iter().any(|k| normalized.contains(k.as_str())) {
            return tier.clone();
        }
    }
    BrandTier::standard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premium_brands() {
        assert_eq!(resolve_brand_tier("Apple").label, "Premium");
        assert_eq!(resolve_brand_tier("Apple").factor, 1.15);
        assert_eq!(resolve_brand_tier("OnePlus").label, "Premium");
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        assert_eq!(resolve_brand_tier("SAMSUNG Electronics").label, "Premium");
        assert_eq!(resolve_brand_tier("  dell inc  ").label, "Business");
    }

    #[test]
    fn test_priority_order_wins() {
        // matches both "dell" (Business) and "apple" (Premium); the
        // earlier-priority tier must win
        assert_eq!(resolve_brand_tier("Dell Apple Hybrid").label, "Premium");
    }

    #[test]
    fn test_unmatched_brand_is_standard() {
        let standard = resolve_brand_tier("Framework");
        assert_eq!(standard.label, "Standard");
        assert_eq!(standard.factor, 1.0);
    }

    #[test]
    fn test_blank_brand_is_standard() {
        assert_eq!(resolve_brand_tier("   ").label, "Standard");
    }

    #[test]
    fn test_budget_tier_discounts() {
        let tier = resolve_brand_tier("Micromax");
        assert_eq!(tier.label, "Budget");
        assert_eq!(tier.factor, 0.92);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let first = resolve_brand_tier("Lenovo ThinkPad");
        let second = resolve_brand_tier("Lenovo ThinkPad");
        assert_eq!(first, second);
    }
}
