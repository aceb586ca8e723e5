//! Unified Error Model
//!
//! Every validation failure carries the violated field. Unknown-but-valid
//! enum keys (condition, issue, accessories) are not errors; they take the
//! default multiplier documented on the corresponding table.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    #[error("unsupported device type: {device_type}")]
    UnsupportedDeviceType { device_type: String },

    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("device age must be a finite number of years >= 0, got {value}")]
    InvalidAge { value: f64 },

    #[error("specification value must be a finite number > 0, got {value}")]
    InvalidSpecValue { value: f64 },

    #[error("battery health must be between 0 and 100, got {value}")]
    InvalidBatteryHealth { value: f64 },

    #[error("{field} is not a valid number: '{raw}'")]
    InvalidNumber { field: &'static str, raw: String },

    #[error("unknown scrap material: {material}")]
    UnknownMaterial { material: String },

    #[error("quantity must be a finite number of kg > 0, got {value}")]
    InvalidQuantity { value: f64 },

    #[error("invalid profile '{profile}': {reason}")]
    InvalidProfile { profile: String, reason: String },

    #[error("catalog parse error: {reason}")]
    CatalogFormat { reason: String },
}
