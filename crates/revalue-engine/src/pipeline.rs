//! The ordered factor chain that turns a request into an estimate.
//!
//! Factors are applied in a strict order and each one appends an audit entry
//! as it is applied, so the trail reads in pipeline order. The order must not
//! change: it is part of the contract with the rendering side.

use crate::validate::validate_request;
use revalue_catalog::{default_brand_tiers, resolve_in, BrandTier, DeviceCatalog};
use revalue_core::{
    format_inr, AccessoryKit, AppliedFactor, Condition, IssueKind, ValuationError,
    ValuationRequest, ValuationResult,
};

/// Battery health below this floor is not penalized further
pub const BATTERY_CLAMP_FLOOR: f64 = 30.0;

/// The valuation engine: a catalog plus a brand tier table
pub struct ValuationEngine {
    catalog: DeviceCatalog,
    brand_tiers: Vec<BrandTier>,
}

impl ValuationEngine {
    pub fn new(catalog: DeviceCatalog) -> Self {
        Self {
            catalog,
            brand_tiers: default_brand_tiers(),
        }
    }

    /// Replace the brand tier table
    pub fn with_brand_tiers(mut self, tiers: Vec<BrandTier>) -> Self {
        self.brand_tiers = tiers;
        self
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    /// Price one device. Pure over the request and the static configuration;
    /// identical input yields identical output.
    pub fn estimate(&self, request: &ValuationRequest) -> Result<ValuationResult, ValuationError> {
        let profile = validate_request(&self.catalog, request)?;
        tracing::debug!(
            device_type = %request.device_type,
            brand = %request.brand,
            "pricing device"
        );

        let mut factors = Vec::new();
        let mut estimate = profile.base_price;

        // 1. Condition grade
        let condition_multiplier = Condition::multiplier_for_key(&request.condition);
        estimate *= condition_multiplier;
        factors.push(AppliedFactor::multiplier(
            "condition",
            format!("Condition ({}) ×{:.2}", request.condition, condition_multiplier),
            condition_multiplier,
        ));

        // 2. Age decay, floored so very old devices keep residual value
        let age_multiplier = (1.0 - request.age_years * profile.age_depreciation_rate)
            .max(profile.min_age_factor);
        estimate *= age_multiplier;
        factors.push(AppliedFactor::multiplier(
            "age",
            format!("Age impact ({} yrs) ×{:.2}", request.age_years, age_multiplier),
            age_multiplier,
        ));

        // 3. Spec relative to the profile baseline, downside bounded at 0.6
        let spec_delta = (request.spec_value - profile.spec_baseline) / profile.spec_baseline;
        let spec_multiplier = (1.0 + spec_delta * profile.spec_weight).max(0.6);
        estimate *= spec_multiplier;
        factors.push(AppliedFactor::multiplier(
            "spec",
            format!(
                "Spec adjustment ({} vs {}) ×{:.2}",
                request.spec_value, profile.spec_baseline, spec_multiplier
            ),
            spec_multiplier,
        ));

        // 4. Battery health, skipped entirely for devices without one
        if profile.uses_battery {
            let normalized = request.battery_health.clamp(BATTERY_CLAMP_FLOOR, 100.0) / 100.0;
            let battery_multiplier = 0.6 + normalized * profile.battery_weight;
            estimate *= battery_multiplier;
            factors.push(AppliedFactor::multiplier(
                "battery",
                format!(
                    "Battery health ({}%) ×{:.2}",
                    request.battery_health, battery_multiplier
                ),
                battery_multiplier,
            ));
        }

        // 5. Brand tier, first match in priority order
        let tier = resolve_in(&self.brand_tiers, &request.brand);
        estimate *= tier.factor;
        factors.push(AppliedFactor::multiplier(
            "brand",
            format!("Brand tier ({}) ×{:.2}", tier.label, tier.factor),
            tier.factor,
        ));

        // 6. Reported issue; the no-issue case carries no audit line
        let issue_multiplier = IssueKind::multiplier_for_key(&request.issue);
        estimate *= issue_multiplier;
        if request.issue != "none" {
            factors.push(AppliedFactor::multiplier(
                "issue",
                format!("Issue penalty ({}) ×{:.2}", request.issue, issue_multiplier),
                issue_multiplier,
            ));
        }

        // 7. Accessories, additive; unparseable keys add nothing
        let accessories_bonus = AccessoryKit::parse(&request.accessories)
            .map(|kit| profile.accessory_bonus_for(kit))
            .unwrap_or(0.0);
        estimate += accessories_bonus;
        factors.push(AppliedFactor::bonus(
            "accessories",
            format!(
                "Accessories bonus +₹{}",
                format_inr(accessories_bonus.round() as i64)
            ),
            accessories_bonus,
        ));

        // 8. Floor and round
        estimate = estimate.max(profile.min_price);
        let rounded = round_to_ten(estimate);

        tracing::debug!(device = %profile.label, estimate = rounded, "estimate complete");

        Ok(ValuationResult {
            estimate: rounded,
            factors,
            brand_tier: tier.label,
            device_label: profile.label.clone(),
            co2_saved_kg: profile.co2_savings_kg,
        })
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new(DeviceCatalog::builtin())
    }
}

/// Round to the nearest 10 rupees, half up
fn round_to_ten(value: f64) -> i64 {
    ((value / 10.0 + 0.5).floor() * 10.0) as i64
}
