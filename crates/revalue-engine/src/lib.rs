//! ReValue Engine: validation and the ordered scoring pipeline.
//!
//! Turns device attributes into a rupee estimate with an audit trail of
//! every applied factor. Pure computation over the request and the static
//! catalog; per-call state is stack-local, so the engine is safe to share
//! across callers.
//!
//! # Architecture
//!
//! ```text
//! EstimatorForm → ValuationRequest → Validation → Factor Chain → ValuationResult
//!                                         ↓             ↓              ↓
//!                                  ValuationError   AppliedFactor   estimate +
//!                                  (typed field)    audit trail     audit trail
//! ```
//!
//! # Example
//!
//! ```
//! use revalue_engine::{estimate, ValuationRequest};
//!
//! let request = ValuationRequest::new("smartphone", "Apple", "iPhone 13")
//!     .condition("excellent")
//!     .age(0.0)
//!     .spec(128.0)
//!     .battery(100.0)
//!     .accessories("all");
//!
//! let result = estimate(&request).unwrap();
//! assert_eq!(result.estimate, 6290);
//! for line in result.explanation() {
//!     println!("  - {}", line);
//! }
//! ```

pub mod form;
pub mod pipeline;
pub mod scrap;
pub mod validate;

pub use form::{EstimatorForm, DEFAULT_AGE_YEARS, DEFAULT_BATTERY_HEALTH};
pub use pipeline::{ValuationEngine, BATTERY_CLAMP_FLOOR};
pub use scrap::{ScrapCalculator, ScrapQuote};
pub use validate::validate_request;

// Re-export the shared model so callers need only this crate
pub use revalue_core::{
    AppliedFactor, FactorKind, ValuationError, ValuationRequest, ValuationResult,
};

/// Price one device against the built-in catalog
pub fn estimate(request: &ValuationRequest) -> Result<ValuationResult, ValuationError> {
    ValuationEngine::default().estimate(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_convenience() {
        let request = ValuationRequest::new("tablet", "Samsung", "Tab S8").spec(128.0);
        let result = estimate(&request).unwrap();
        assert!(result.estimate >= 1200);
        assert_eq!(result.estimate % 10, 0);
    }

    #[test]
    fn test_estimate_surfaces_validation_errors() {
        let request = ValuationRequest::new("hoverboard", "Acme", "X1").spec(64.0);
        assert!(matches!(
            estimate(&request).unwrap_err(),
            ValuationError::UnsupportedDeviceType { .. }
        ));
    }
}
