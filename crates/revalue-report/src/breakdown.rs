//! Material-recovery breakdown derived from a final estimate.

use revalue_catalog::{default_materials, DeviceProfile, MaterialShare};
use revalue_core::{format_inr, MaterialLineItem};

/// Displayed recovery never drops below this, so very low-value devices
/// still show a meaningful figure per material
pub const MIN_RECOVERED_VALUE: i64 = 80;

/// One line item per material, preserving catalog order. Profiles without
/// their own material list use the fixed default set.
pub fn build_breakdown(profile: &DeviceProfile, estimate: i64) -> Vec<MaterialLineItem> {
    let default_set;
    let materials: &[MaterialShare] = if profile.materials.is_empty() {
        default_set = default_materials();
        &default_set
    } else {
        &profile.materials
    };

    materials
        .iter()
        .map(|share| {
            let recovered =
                round_rupees(estimate as f64 * share.percent).max(MIN_RECOVERED_VALUE);
            MaterialLineItem {
                icon: share.icon.clone(),
                label: share.label.clone(),
                detail: format!("{} · ₹{}", share.description, format_inr(recovered)),
                recovered_value: recovered,
            }
        })
        .collect()
}

/// Round to the nearest whole rupee, half up
fn round_rupees(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
