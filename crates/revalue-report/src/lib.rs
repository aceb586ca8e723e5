//! ReValue Report: breakdown formatter and summary payloads.
//!
//! Derives the display side of an estimate: the per-material recovery
//! breakdown and the render-ready summary handed to the presentation layer.
//!
//! # Example
//!
//! ```
//! use revalue_catalog::DeviceProfile;
//! use revalue_report::build_breakdown;
//!
//! let profile = DeviceProfile::smartphone();
//! let breakdown = build_breakdown(&profile, 6290);
//! assert_eq!(breakdown.len(), 5);
//! assert!(breakdown.iter().all(|item| item.recovered_value >= 80));
//! ```

pub mod breakdown;
pub mod summary;

pub use breakdown::{build_breakdown, MIN_RECOVERED_VALUE};
pub use summary::{accessory_label, condition_label, EstimateSummary};
