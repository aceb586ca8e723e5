//! Enum keys for form-selected attributes and their pricing tables.
//!
//! The form boundary hands keys over as raw strings. Each table resolves an
//! exact lowercase key; a key outside the table falls back to the default
//! documented on that table rather than failing the request.

use serde::{Deserialize, Serialize};

/// Cosmetic/functional condition grade of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// Multiplier applied when the key is outside the table
    pub const UNKNOWN_KEY_MULTIPLIER: f64 = 0.50;

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "excellent" => Some(Condition::Excellent),
            "good" => Some(Condition::Good),
            "fair" => Some(Condition::Fair),
            "poor" => Some(Condition::Poor),
            _ => None,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Condition::Excellent => 1.00,
            Condition::Good => 0.87,
            Condition::Fair => 0.70,
            Condition::Poor => 0.45,
        }
    }

    /// Resolve a raw key to its multiplier, defaulting on a miss
    pub fn multiplier_for_key(key: &str) -> f64 {
        Self::parse(key)
            .map(Self::multiplier)
            .unwrap_or(Self::UNKNOWN_KEY_MULTIPLIER)
    }

    pub fn label(self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

/// Reported issue category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    None,
    Cosmetic,
    Battery,
    Display,
    Hardware,
}

impl IssueKind {
    /// Multiplier applied when the key is outside the table
    pub const UNKNOWN_KEY_MULTIPLIER: f64 = 1.0;

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "none" => Some(IssueKind::None),
            "cosmetic" => Some(IssueKind::Cosmetic),
            "battery" => Some(IssueKind::Battery),
            "display" => Some(IssueKind::Display),
            "hardware" => Some(IssueKind::Hardware),
            _ => None,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            IssueKind::None => 1.00,
            IssueKind::Cosmetic => 0.95,
            IssueKind::Battery => 0.85,
            IssueKind::Display => 0.60,
            IssueKind::Hardware => 0.45,
        }
    }

    /// Resolve a raw key to its multiplier, defaulting on a miss
    pub fn multiplier_for_key(key: &str) -> f64 {
        Self::parse(key)
            .map(Self::multiplier)
            .unwrap_or(Self::UNKNOWN_KEY_MULTIPLIER)
    }
}

/// Accessory bundle handed in alongside the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessoryKit {
    All,
    Basic,
    None,
}

impl AccessoryKit {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "all" => Some(AccessoryKit::All),
            "basic" => Some(AccessoryKit::Basic),
            "none" => Some(AccessoryKit::None),
            _ => None,
        }
    }

    /// Shared bonus table used when a profile does not price this kit itself
    pub fn fallback_bonus(self) -> f64 {
        match self {
            AccessoryKit::All => 200.0,
            AccessoryKit::Basic => 100.0,
            AccessoryKit::None => 0.0,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            AccessoryKit::All => "all",
            AccessoryKit::Basic => "basic",
            AccessoryKit::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_table() {
        assert_eq!(Condition::multiplier_for_key("excellent"), 1.00);
        assert_eq!(Condition::multiplier_for_key("good"), 0.87);
        assert_eq!(Condition::multiplier_for_key("fair"), 0.70);
        assert_eq!(Condition::multiplier_for_key("poor"), 0.45);
    }

    #[test]
    fn test_condition_unknown_key_defaults() {
        assert_eq!(Condition::multiplier_for_key("mint"), 0.50);
        assert_eq!(Condition::multiplier_for_key(""), 0.50);
        // keys are exact lowercase; anything else takes the default
        assert_eq!(Condition::multiplier_for_key("Excellent"), 0.50);
    }

    #[test]
    fn test_issue_table() {
        assert_eq!(IssueKind::multiplier_for_key("none"), 1.00);
        assert_eq!(IssueKind::multiplier_for_key("cosmetic"), 0.95);
        assert_eq!(IssueKind::multiplier_for_key("battery"), 0.85);
        assert_eq!(IssueKind::multiplier_for_key("display"), 0.60);
        assert_eq!(IssueKind::multiplier_for_key("hardware"), 0.45);
    }

    #[test]
    fn test_issue_unknown_key_defaults() {
        assert_eq!(IssueKind::multiplier_for_key("water_damage"), 1.0);
    }

    #[test]
    fn test_accessory_fallback_bonus() {
        assert_eq!(AccessoryKit::All.fallback_bonus(), 200.0);
        assert_eq!(AccessoryKit::Basic.fallback_bonus(), 100.0);
        assert_eq!(AccessoryKit::None.fallback_bonus(), 0.0);
        assert_eq!(AccessoryKit::parse("charger"), None);
    }

    #[test]
    fn test_serde_keys_are_lowercase() {
        let json = serde_json::to_string(&AccessoryKit::All).unwrap();
        assert_eq!(json, "\"all\"");
        let parsed: Condition = serde_json::from_str("\"fair\"").unwrap();
        assert_eq!(parsed, Condition::Fair);
    }
}
