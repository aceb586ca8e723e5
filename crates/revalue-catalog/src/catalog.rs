//! Device catalog: process-wide immutable profile configuration.

use crate::profile::{DeviceProfile, PriorityTier};
use once_cell::sync::Lazy;
use revalue_core::ValuationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static BUILTIN: Lazy<DeviceCatalog> = Lazy::new(DeviceCatalog::builtin);

/// Profiles keyed by device-type key, loaded once and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCatalog {
    pub profiles: BTreeMap<String, DeviceProfile>,
}

impl DeviceCatalog {
    /// The five built-in device types
    pub fn builtin() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert("smartphone".to_string(), DeviceProfile::smartphone());
        profiles.insert("laptop".to_string(), DeviceProfile::laptop());
        profiles.insert("desktop".to_string(), DeviceProfile::desktop());
        profiles.insert("tablet".to_string(), DeviceProfile::tablet());
        profiles.insert("monitor".to_string(), DeviceProfile::monitor());
        Self { profiles }
    }

    /// Shared built-in catalog, constructed once per process
    pub fn shared() -> &'static DeviceCatalog {
        &BUILTIN
    }

    /// Load a replacement catalog from YAML and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self, ValuationError> {
        let catalog: DeviceCatalog =
            serde_yaml::from_str(yaml).map_err(|e| ValuationError::CatalogFormat {
                reason: e.to_string(),
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn get(&self, device_type: &str) -> Option<&DeviceProfile> {
        self.profiles.get(device_type)
    }

    /// Resolve a device-type key, or signal the recoverable
    /// unsupported-device condition
    pub fn resolve(&self, device_type: &str) -> Result<&DeviceProfile, ValuationError> {
        self.get(device_type)
            .ok_or_else(|| ValuationError::UnsupportedDeviceType {
                device_type: device_type.to_string(),
            })
    }

    /// Check every profile's invariants
    pub fn validate(&self) -> Result<(), ValuationError> {
        for (key, profile) in &self.profiles {
            profile.validate(key)?;
        }
        Ok(())
    }

    pub fn device_types(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Info-panel payload for a selected device type
    pub fn insights(&self, device_type: &str) -> Option<ProfileInsights> {
        self.get(device_type).map(|profile| ProfileInsights {
            title: format!("{} insights", profile.label),
            tips: profile.tips.clone(),
            co2_savings_kg: profile.co2_savings_kg,
            material_recovery_value: profile.material_recovery_value,
            priority_tier: profile.priority_tier,
        })
    }
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Per-device-type insights shown next to the estimator form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInsights {
    pub title: String,
    pub tips: Vec<String>,
    pub co2_savings_kg: u32,
    pub material_recovery_value: i64,
    pub priority_tier: PriorityTier,
}
