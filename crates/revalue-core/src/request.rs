//! Valuation request: the attributes of one device being appraised.

use serde::{Deserialize, Serialize};

/// Input for a single valuation call.
///
/// Numeric fields are assumed to have been coerced to numbers already (see
/// the form boundary in the engine crate); the engine re-validates ranges
/// before pricing. Key fields carry the raw form keys so that unknown keys
/// can flow through to their documented default multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRequest {
    pub device_type: String,
    pub brand: String,
    pub model: String,
    /// Raw condition key, expected in {excellent, good, fair, poor}
    pub condition: String,
    pub age_years: f64,
    /// Storage in GB, or screen size in inches for display devices
    pub spec_value: f64,
    /// Battery health percentage in [0, 100]
    pub battery_health: f64,
    /// Raw accessories key, expected in {all, basic, none}
    pub accessories: String,
    /// Raw issue key, expected in {none, cosmetic, battery, display, hardware}
    pub issue: String,
}

impl ValuationRequest {
    /// Start a request with typical-form defaults: good condition, 2 years
    /// old, 85% battery, no accessories, no reported issues. The spec value
    /// must be supplied before the request passes validation.
    pub fn new(
        device_type: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            device_type: device_type.into(),
            brand: brand.into(),
            model: model.into(),
            condition: "good".to_string(),
            age_years: 2.0,
            spec_value: 0.0,
            battery_health: 85.0,
            accessories: "none".to_string(),
            issue: "none".to_string(),
        }
    }

    pub fn condition(mut self, key: impl Into<String>) -> Self {
        self.condition = key.into();
        self
    }

    pub fn age(mut self, years: f64) -> Self {
        self.age_years = years;
        self
    }

    pub fn spec(mut self, value: f64) -> Self {
        self.spec_value = value;
        self
    }

    pub fn battery(mut self, health: f64) -> Self {
        self.battery_health = health;
        self
    }

    pub fn accessories(mut self, key: impl Into<String>) -> Self {
        self.accessories = key.into();
        self
    }

    pub fn issue(mut self, key: impl Into<String>) -> Self {
        self.issue = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = ValuationRequest::new("smartphone", "Apple", "iPhone 13");
        assert_eq!(request.condition, "good");
        assert_eq!(request.age_years, 2.0);
        assert_eq!(request.battery_health, 85.0);
        assert_eq!(request.accessories, "none");
        assert_eq!(request.issue, "none");
    }

    #[test]
    fn test_builder_overrides() {
        let request = ValuationRequest::new("laptop", "Dell", "XPS 13")
            .condition("excellent")
            .age(1.0)
            .spec(512.0)
            .battery(92.0)
            .accessories("all")
            .issue("cosmetic");
        assert_eq!(request.condition, "excellent");
        assert_eq!(request.age_years, 1.0);
        assert_eq!(request.spec_value, 512.0);
        assert_eq!(request.battery_health, 92.0);
        assert_eq!(request.accessories, "all");
        assert_eq!(request.issue, "cosmetic");
    }
}
