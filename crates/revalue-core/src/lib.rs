//! ReValue Core: shared data model for the e-waste valuation pipeline.
//!
//! Defines the request/result types exchanged between the form boundary, the
//! scoring engine, and the breakdown formatter, plus the enum-keyed pricing
//! tables (condition, issue, accessories) with their documented
//! default-on-miss policies.

pub mod currency;
pub mod error;
pub mod keys;
pub mod request;
pub mod result;

pub use currency::format_inr;
pub use error::ValuationError;
pub use keys::{AccessoryKit, Condition, IssueKind};
pub use request::ValuationRequest;
pub use result::{AppliedFactor, FactorKind, MaterialLineItem, ValuationResult};

/// Version of the valuation engine
pub const ENGINE_VERSION: &str = "1.0.0";
