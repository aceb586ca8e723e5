//! Valuation result: the estimate, its audit trail, and breakdown line items.

use serde::{Deserialize, Serialize};

/// Whether an adjustment scaled the running estimate or added to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorKind {
    Multiplier,
    Bonus,
}

/// One applied pricing adjustment, in pipeline order.
///
/// The `detail` line is the explanation shown to the user; the trail of these
/// lines is part of the engine contract, not incidental logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFactor {
    /// Stable factor name ("condition", "age", "spec", "battery", "brand",
    /// "issue", "accessories")
    pub name: String,
    /// Human-readable line, e.g. `Condition (good) ×0.87`
    pub detail: String,
    /// The multiplier, or the bonus amount in rupees for additive factors
    pub value: f64,
    pub kind: FactorKind,
}

impl AppliedFactor {
    pub fn multiplier(name: impl Into<String>, detail: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            value,
            kind: FactorKind::Multiplier,
        }
    }

    pub fn bonus(name: impl Into<String>, detail: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            value,
            kind: FactorKind::Bonus,
        }
    }
}

/// Final output of one valuation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Estimated recyclable value in whole rupees, a multiple of 10
    pub estimate: i64,
    /// Audit trail of applied factors, in pipeline order
    pub factors: Vec<AppliedFactor>,
    /// Resolved brand tier label ("Premium", ..., "Standard")
    pub brand_tier: String,
    /// Display label of the matched device profile
    pub device_label: String,
    /// CO₂ saved by recycling this device type, in kg
    pub co2_saved_kg: u32,
}

impl ValuationResult {
    /// The audit trail as display lines, in pipeline order
    pub fn explanation(&self) -> Vec<String> {
        self.factors.iter().map(|f| f.detail.clone()).collect()
    }
}

/// One recoverable-material category of the final estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLineItem {
    pub icon: String,
    pub label: String,
    /// Description plus formatted recovered value, e.g.
    /// `Lithium-ion modules · ₹1,570`
    pub detail: String,
    /// Recovered value in whole rupees, floored at 80
    pub recovered_value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_preserves_order() {
        let result = ValuationResult {
            estimate: 6290,
            factors: vec![
                AppliedFactor::multiplier("condition", "Condition (excellent) ×1.00", 1.0),
                AppliedFactor::bonus("accessories", "Accessories bonus +₹250", 250.0),
            ],
            brand_tier: "Premium".to_string(),
            device_label: "Smartphone".to_string(),
            co2_saved_kg: 9,
        };

        let lines = result.explanation();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Condition (excellent) ×1.00");
        assert_eq!(lines[1], "Accessories bonus +₹250");
    }

    #[test]
    fn test_result_serialization() {
        let result = ValuationResult {
            estimate: 900,
            factors: vec![],
            brand_tier: "Standard".to_string(),
            device_label: "Smartphone".to_string(),
            co2_saved_kg: 9,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"estimate\":900"));

        let parsed: ValuationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
