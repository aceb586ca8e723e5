//! Form boundary: fallible parse from raw form strings to a request.
//!
//! Numeric fields left blank take the documented defaults (2 years of age,
//! the profile's spec baseline, 85% battery health); a non-blank value that
//! does not parse as a number fails with the field name instead of turning
//! into NaN somewhere inside the pipeline.

use revalue_catalog::DeviceCatalog;
use revalue_core::{ValuationError, ValuationRequest};
use serde::{Deserialize, Serialize};

/// Default device age assumed when the form field is left blank
pub const DEFAULT_AGE_YEARS: f64 = 2.0;
/// Default battery health assumed when the form field is left blank
pub const DEFAULT_BATTERY_HEALTH: f64 = 85.0;

/// Raw estimator form fields, as strings from the form-like boundary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatorForm {
    pub device_type: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub age_years: String,
    pub spec_value: String,
    pub battery_health: String,
    pub accessories: String,
    pub issue: String,
}

impl EstimatorForm {
    /// Coerce the raw fields into a request, applying blank-field defaults.
    /// The resulting request still goes through full range validation in the
    /// engine.
    pub fn parse(&self, catalog: &DeviceCatalog) -> Result<ValuationRequest, ValuationError> {
        let profile = catalog.resolve(&self.device_type)?;

        let age_years = parse_or(&self.age_years, "age", DEFAULT_AGE_YEARS)?;
        let spec_value = parse_or(&self.spec_value, "spec", profile.spec_baseline)?;
        let battery_health = parse_or(&self.battery_health, "battery", DEFAULT_BATTERY_HEALTH)?;

        Ok(ValuationRequest {
            device_type: self.device_type.clone(),
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            condition: self.condition.clone(),
            age_years,
            spec_value,
            battery_health,
            accessories: self.accessories.clone(),
            issue: self.issue.clone(),
        })
    }
}

fn parse_or(raw: &str, field: &'static str, default: f64) -> Result<f64, ValuationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ValuationError::InvalidNumber {
            field,
            raw: raw.to_string(),
        })
}
