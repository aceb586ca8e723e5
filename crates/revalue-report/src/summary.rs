//! Render-ready estimate summary payload.
//!
//! Composes the engine result with display labels and the material
//! breakdown. The payload is plain data; markup belongs to the external
//! presentation layer.

use crate::breakdown::build_breakdown;
use revalue_catalog::DeviceProfile;
use revalue_core::{format_inr, Condition, MaterialLineItem, ValuationRequest, ValuationResult};
use serde::{Deserialize, Serialize};

/// Display label for an accessories key
pub fn accessory_label(key: &str) -> &'static str {
    match key {
        "all" => "Charger + box",
        "basic" => "Charger only",
        "none" => "Missing accessories",
        _ => "Not specified",
    }
}

/// Display label for a condition key; unknown keys display as given
pub fn condition_label(key: &str) -> String {
    Condition::parse(key)
        .map(|condition| condition.label().to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Everything the presentation layer needs to render one estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub device_label: String,
    pub brand: String,
    pub model: String,
    pub condition_label: String,
    pub accessories_label: String,
    /// Estimated recyclable value in rupees
    pub estimate: i64,
    /// Formatted amount, e.g. "₹6,290"
    pub estimate_display: String,
    /// Reward points credited on pickup, approximately the estimate
    pub reward_points: i64,
    pub co2_saved_kg: u32,
    /// Audit-trail lines explaining the scoring, in pipeline order
    pub factors: Vec<String>,
    pub breakdown: Vec<MaterialLineItem>,
}

impl EstimateSummary {
    pub fn build(
        request: &ValuationRequest,
        profile: &DeviceProfile,
        result: &ValuationResult,
    ) -> Self {
        Self {
            device_label: result.device_label.clone(),
            brand: request.brand.clone(),
            model: request.model.clone(),
            condition_label: condition_label(&request.condition),
            accessories_label: accessory_label(&request.accessories).to_string(),
            estimate: result.estimate,
            estimate_display: format!("₹{}", format_inr(result.estimate)),
            reward_points: result.estimate,
            co2_saved_kg: result.co2_saved_kg,
            factors: result.explanation(),
            breakdown: build_breakdown(profile, result.estimate),
        }
    }
}
