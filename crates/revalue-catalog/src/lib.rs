//! ReValue Catalog: device profiles and brand tier tables.
//!
//! Static pricing configuration for the valuation engine. Profiles and tier
//! tables are loaded once per process and never mutated; there is no runtime
//! mutation API.
//!
//! # Example
//!
//! ```
//! use revalue_catalog::{resolve_brand_tier, DeviceCatalog};
//!
//! let catalog = DeviceCatalog::shared();
//! let profile = catalog.resolve("smartphone").unwrap();
//! assert_eq!(profile.label, "Smartphone");
//!
//! let tier = resolve_brand_tier("Apple");
//! assert_eq!(tier.label, "Premium");
//! ```

pub mod brand;
pub mod catalog;
pub mod profile;

pub use brand::{default_brand_tiers, resolve_brand_tier, resolve_in, BrandTier};
pub use catalog::{DeviceCatalog, ProfileInsights};
pub use profile::{default_materials, DeviceProfile, MaterialShare, PriorityTier};
