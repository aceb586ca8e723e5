//! Request validation ahead of any pricing computation.
//!
//! Every failure names the violated field; nothing is priced on a bad
//! request. Unknown condition/issue/accessory keys are not validation
//! failures; their tables define a default on miss.

use revalue_catalog::{DeviceCatalog, DeviceProfile};
use revalue_core::{ValuationError, ValuationRequest};

/// Validate a request against the catalog, returning the matched profile
pub fn validate_request<'a>(
    catalog: &'a DeviceCatalog,
    request: &ValuationRequest,
) -> Result<&'a DeviceProfile, ValuationError> {
    let profile = catalog.resolve(&request.device_type)?;

    if request.brand.trim().is_empty() {
        return Err(ValuationError::MissingRequiredField { field: "brand" });
    }
    if request.model.trim().is_empty() {
        return Err(ValuationError::MissingRequiredField { field: "model" });
    }
    if !request.age_years.is_finite() || request.age_years < 0.0 {
        return Err(ValuationError::InvalidAge {
            value: request.age_years,
        });
    }
    if !request.spec_value.is_finite() || request.spec_value <= 0.0 {
        return Err(ValuationError::InvalidSpecValue {
            value: request.spec_value,
        });
    }
    if !request.battery_health.is_finite()
        || !(0.0..=100.0).contains(&request.battery_health)
    {
        return Err(ValuationError::InvalidBatteryHealth {
            value: request.battery_health,
        });
    }

    Ok(profile)
}
