//! Device profiles: per-device-type pricing configuration.
//!
//! One profile per supported device type, each with independently tuned
//! economics. Display devices price on screen size instead of storage and
//! skip the battery factor entirely.

use revalue_core::{AccessoryKit, ValuationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One recoverable-material category and its share of final value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialShare {
    pub label: String,
    pub icon: String,
    /// Fraction of the final estimate attributed to this material, in (0, 1].
    /// Shares are used independently per line item and need not sum to 1.
    pub percent: f64,
    pub description: String,
}

/// Processing priority bucket shown in the device insights panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PriorityTier::High => write!(f, "High"),
            PriorityTier::Medium => write!(f, "Medium"),
            PriorityTier::Low => write!(f, "Low"),
        }
    }
}

/// Static pricing configuration for one device type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Display label, e.g. "Monitor / TV"
    pub label: String,

    // === Pricing curve ===
    /// Starting estimate in rupees before any factor is applied
    pub base_price: f64,
    /// Hard floor applied after the factor chain
    pub min_price: f64,
    /// Value lost per year of age
    pub age_depreciation_rate: f64,
    /// Floor of the age multiplier; keeps very old devices above zero
    #[serde(default = "default_min_age_factor")]
    pub min_age_factor: f64,

    // === Specification ===
    /// Baseline spec the multiplier is centred on (GB, or inches)
    pub spec_baseline: f64,
    #[serde(default = "default_spec_weight")]
    pub spec_weight: f64,
    pub spec_label: String,
    pub spec_placeholder: String,

    // === Battery ===
    /// Display devices set this to false and skip the battery factor
    #[serde(default = "default_true")]
    pub uses_battery: bool,
    #[serde(default = "default_battery_weight")]
    pub battery_weight: f64,

    // === Bonuses and impact ===
    /// Per-kit accessory bonus; missing kits fall back to the shared table
    #[serde(default)]
    pub accessory_bonus: BTreeMap<AccessoryKit, f64>,
    #[serde(default = "default_co2_savings")]
    pub co2_savings_kg: u32,
    /// Typical recoverable-material value shown in the insights panel
    pub material_recovery_value: i64,
    pub priority_tier: PriorityTier,

    // === Display content ===
    #[serde(default)]
    pub tips: Vec<String>,
    /// Material shares for the breakdown; empty means use the default set
    #[serde(default)]
    pub materials: Vec<MaterialShare>,
}

fn default_true() -> bool {
    true
}

fn default_min_age_factor() -> f64 {
    0.35
}

fn default_spec_weight() -> f64 {
    0.002
}

fn default_battery_weight() -> f64 {
    0.5
}

fn default_co2_savings() -> u32 {
    10
}

impl DeviceProfile {
    /// Bonus for an accessory kit, falling back to the shared default table
    /// when the profile does not price the kit itself
    pub fn accessory_bonus_for(&self, kit: AccessoryKit) -> f64 {
        self.accessory_bonus
            .get(&kit)
            .copied()
            .unwrap_or_else(|| kit.fallback_bonus())
    }

    /// Check the profile invariants, naming the offending field
    pub fn validate(&self, key: &str) -> Result<(), ValuationError> {
        let fail = |reason: String| ValuationError::InvalidProfile {
            profile: key.to_string(),
            reason,
        };

        if !self.base_price.is_finite() || self.base_price <= 0.0 {
            return Err(fail(format!("base_price must be > 0, got {}", self.base_price)));
        }
        if !self.min_price.is_finite() || self.min_price < 0.0 || self.min_price > self.base_price {
            return Err(fail(format!(
                "min_price must be in [0, base_price], got {}",
                self.min_price
            )));
        }
        if !self.age_depreciation_rate.is_finite() || self.age_depreciation_rate < 0.0 {
            return Err(fail(format!(
                "age_depreciation_rate must be >= 0, got {}",
                self.age_depreciation_rate
            )));
        }
        if !self.spec_baseline.is_finite() || self.spec_baseline <= 0.0 {
            return Err(fail(format!(
                "spec_baseline must be > 0, got {}",
                self.spec_baseline
            )));
        }
        for material in &self.materials {
            if !material.percent.is_finite() || material.percent <= 0.0 || material.percent > 1.0 {
                return Err(fail(format!(
                    "material '{}' percent must be in (0, 1], got {}",
                    material.label, material.percent
                )));
            }
        }
        Ok(())
    }

    pub fn smartphone() -> Self {
        Self {
            label: "Smartphone".to_string(),
            base_price: 4200.0,
            min_price: 900.0,
            age_depreciation_rate: 0.09,
            min_age_factor: 0.35,
            spec_baseline: 128.0,
            spec_weight: 0.004,
            spec_label: "Storage (GB)".to_string(),
            spec_placeholder: "e.g., 128".to_string(),
            uses_battery: true,
            battery_weight: 0.65,
            accessory_bonus: bonus_table(250.0, 120.0),
            co2_savings_kg: 9,
            material_recovery_value: 620,
            priority_tier: PriorityTier::High,
            tips: vec![
                "Check for screen cracks or Face ID issues before submitting.".to_string(),
                "Higher storage variants and 5G models can fetch up to 8% extra.".to_string(),
                "Include charger/box for better trust with recyclers.".to_string(),
            ],
            materials: vec![
                material("Precious Metals", "🥇", 0.15, "Gold, silver & palladium traces"),
                material("Battery Pack", "🔋", 0.25, "Lithium-ion modules"),
                material("Display & Glass", "📱", 0.3, "OLED/LCD assembly"),
                material("Frame & Copper", "⚙️", 0.2, "Aluminium, copper & steel"),
                material("Plastics & Others", "♻️", 0.1, "Polymers, PCBs & misc."),
            ],
        }
    }

    pub fn laptop() -> Self {
        Self {
            label: "Laptop".to_string(),
            base_price: 10500.0,
            min_price: 2500.0,
            age_depreciation_rate: 0.07,
            min_age_factor: 0.4,
            spec_baseline: 512.0,
            spec_weight: 0.0025,
            spec_label: "Storage (GB)".to_string(),
            spec_placeholder: "e.g., 512 or 256".to_string(),
            uses_battery: true,
            battery_weight: 0.55,
            accessory_bonus: bonus_table(400.0, 200.0),
            co2_savings_kg: 24,
            material_recovery_value: 1350,
            priority_tier: PriorityTier::High,
            tips: vec![
                "Mention RAM/SSD upgrades for additional payout.".to_string(),
                "Keys, hinges and trackpad condition influence grading.".to_string(),
                "Factory reset + original charger add credibility.".to_string(),
            ],
            materials: vec![
                material("Aluminium & Copper", "🧱", 0.32, "Chassis + heat sinks"),
                material("Battery Modules", "🔋", 0.18, "Lithium cells"),
                material("Logic Boards", "🧠", 0.22, "Motherboard & RAM"),
                material("Display Assembly", "🖥️", 0.18, "LCD/LED panel"),
                material("Plastics", "♻️", 0.1, "Keys & bezels"),
            ],
        }
    }

    pub fn desktop() -> Self {
        Self {
            label: "Desktop".to_string(),
            base_price: 8000.0,
            min_price: 2000.0,
            age_depreciation_rate: 0.08,
            min_age_factor: 0.4,
            spec_baseline: 1024.0,
            spec_weight: 0.0018,
            spec_label: "Storage (GB)".to_string(),
            spec_placeholder: "e.g., 512 or 1024".to_string(),
            uses_battery: true,
            battery_weight: 0.35,
            accessory_bonus: bonus_table(250.0, 120.0),
            co2_savings_kg: 21,
            material_recovery_value: 980,
            priority_tier: PriorityTier::Medium,
            tips: vec![
                "Mention dedicated GPU model if present.".to_string(),
                "Power supply, motherboard and HDD fetch most value.".to_string(),
                "Bundle keyboard/mouse for smoother resale.".to_string(),
            ],
            materials: vec![
                material("Metals & Chassis", "⚙️", 0.35, "Steel cases & copper"),
                material("Circuit Boards", "🧩", 0.3, "CPU, GPU & PCBs"),
                material("Storage Units", "💾", 0.15, "HDD/SSD recovery"),
                material("Power Supply", "🔌", 0.12, "Transformers"),
                material("Plastic Panels", "♻️", 0.08, "Front panels"),
            ],
        }
    }

    pub fn tablet() -> Self {
        Self {
            label: "Tablet".to_string(),
            base_price: 5200.0,
            min_price: 1200.0,
            age_depreciation_rate: 0.085,
            min_age_factor: 0.35,
            spec_baseline: 128.0,
            spec_weight: 0.0035,
            spec_label: "Storage (GB)".to_string(),
            spec_placeholder: "e.g., 64 or 256".to_string(),
            uses_battery: true,
            battery_weight: 0.6,
            accessory_bonus: bonus_table(220.0, 120.0),
            co2_savings_kg: 12,
            material_recovery_value: 740,
            priority_tier: PriorityTier::Medium,
            tips: vec![
                "List pencil/keyboard accessories if included.".to_string(),
                "Check for backlight bleed or dead pixels.".to_string(),
                "LTE/5G variants have better recovery value.".to_string(),
            ],
            materials: vec![
                material("Display Assembly", "📗", 0.34, "Glass + digitizer"),
                material("Battery Pack", "🔋", 0.23, "Lithium polymer"),
                material("Logic Boards", "🧠", 0.18, "PCB & chips"),
                material("Frame Metals", "⚒️", 0.15, "Aluminium frame"),
                material("Other Components", "♻️", 0.1, "Speakers, plastics"),
            ],
        }
    }

    pub fn monitor() -> Self {
        Self {
            label: "Monitor / TV".to_string(),
            base_price: 3800.0,
            min_price: 850.0,
            age_depreciation_rate: 0.07,
            min_age_factor: 0.45,
            spec_baseline: 24.0,
            spec_weight: 0.03,
            spec_label: "Screen Size (inches)".to_string(),
            spec_placeholder: "e.g., 24 or 32".to_string(),
            uses_battery: false,
            battery_weight: 0.2,
            accessory_bonus: bonus_table(150.0, 80.0),
            co2_savings_kg: 14,
            material_recovery_value: 560,
            priority_tier: PriorityTier::Medium,
            tips: vec![
                "Mention resolution (FHD/4K) for better quotes.".to_string(),
                "Check for dead pixels or burn-in.".to_string(),
                "Stand/wall-mount availability influences logistics.".to_string(),
            ],
            materials: vec![
                material("Panel Glass", "🖼️", 0.4, "LCD/OLED glass"),
                material("Backlight Unit", "💡", 0.18, "LED strips"),
                material("Circuit Boards", "🧩", 0.2, "T-Con & power boards"),
                material("Metals & Frame", "⚙️", 0.12, "Aluminium & steel"),
                material("Plastics", "♻️", 0.1, "Rear housing"),
            ],
        }
    }
}

/// Fixed 5-category material set used when a profile defines none
pub fn default_materials() -> Vec<MaterialShare> {
    vec![
        material("Metals & Frame", "⚙️", 0.3, "Aluminium & copper parts"),
        material("Circuit Boards", "🧠", 0.25, "PCBs and chipsets"),
        material("Battery Pack", "🔋", 0.2, "Power modules"),
        material("Display", "🖥️", 0.15, "Glass assemblies"),
        material("Plastics", "♻️", 0.1, "Panels & casing"),
    ]
}

fn material(label: &str, icon: &str, percent: f64, description: &str) -> MaterialShare {
    MaterialShare {
        label: label.to_string(),
        icon: icon.to_string(),
        percent,
        description: description.to_string(),
    }
}

fn bonus_table(all: f64, basic: f64) -> BTreeMap<AccessoryKit, f64> {
    let mut table = BTreeMap::new();
    table.insert(AccessoryKit::All, all);
    table.insert(AccessoryKit::Basic, basic);
    table.insert(AccessoryKit::None, 0.0);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles_pass_validation() {
        for (key, profile) in [
            ("smartphone", DeviceProfile::smartphone()),
            ("laptop", DeviceProfile::laptop()),
            ("desktop", DeviceProfile::desktop()),
            ("tablet", DeviceProfile::tablet()),
            ("monitor", DeviceProfile::monitor()),
        ] {
            assert!(profile.validate(key).is_ok(), "profile {} failed validation", key);
        }
    }

    #[test]
    fn test_smartphone_economics() {
        let profile = DeviceProfile::smartphone();
        assert_eq!(profile.base_price, 4200.0);
        assert_eq!(profile.min_price, 900.0);
        assert_eq!(profile.accessory_bonus_for(AccessoryKit::All), 250.0);
        assert_eq!(profile.materials.len(), 5);
        assert!(profile.uses_battery);
    }

    #[test]
    fn test_monitor_prices_on_screen_size() {
        let profile = DeviceProfile::monitor();
        assert!(!profile.uses_battery);
        assert_eq!(profile.spec_label, "Screen Size (inches)");
        assert_eq!(profile.spec_baseline, 24.0);
    }

    #[test]
    fn test_accessory_fallback_for_unpriced_kit() {
        let mut profile = DeviceProfile::smartphone();
        profile.accessory_bonus.remove(&AccessoryKit::All);
        // falls back to the shared table
        assert_eq!(profile.accessory_bonus_for(AccessoryKit::All), 200.0);
        // still prefers the profile's own entry
        assert_eq!(profile.accessory_bonus_for(AccessoryKit::Basic), 120.0);
    }

    #[test]
    fn test_validate_rejects_bad_percent() {
        let mut profile = DeviceProfile::smartphone();
        profile.materials[0].percent = 1.5;
        let err = profile.validate("smartphone").unwrap_err();
        assert!(matches!(err, ValuationError::InvalidProfile { .. }));
    }

    #[test]
    fn test_validate_rejects_min_above_base() {
        let mut profile = DeviceProfile::smartphone();
        profile.min_price = 5000.0;
        assert!(profile.validate("smartphone").is_err());
    }

    #[test]
    fn test_default_materials_cover_five_categories() {
        let materials = default_materials();
        assert_eq!(materials.len(), 5);
        assert!(materials.iter().all(|m| m.percent > 0.0 && m.percent <= 1.0));
    }
}
