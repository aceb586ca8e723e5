//! Loose-material scrap pricing.
//!
//! Quick per-kg quotes for recyclable material handed in outside a device:
//! a base-price table keyed by material, scaled by quantity and a condition
//! multiplier. Unknown materials are an error; unknown condition grades price
//! at a neutral multiplier.

use revalue_core::ValuationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scrap pricing tables; `Default` carries the built-in rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapCalculator {
    /// Rupees per kg by material key
    pub base_prices: BTreeMap<String, f64>,
    /// Multiplier by condition grade; grades outside the table are neutral
    pub condition_multipliers: BTreeMap<String, f64>,
}

impl Default for ScrapCalculator {
    fn default() -> Self {
        let mut base_prices = BTreeMap::new();
        base_prices.insert("batteries".to_string(), 110.0);
        base_prices.insert("circuit".to_string(), 140.0);
        base_prices.insert("metal".to_string(), 95.0);
        base_prices.insert("plastic".to_string(), 45.0);
        base_prices.insert("led".to_string(), 105.0);
        base_prices.insert("cables".to_string(), 75.0);
        base_prices.insert("gold".to_string(), 3500.0);

        let mut condition_multipliers = BTreeMap::new();
        condition_multipliers.insert("Excellent".to_string(), 1.0);
        condition_multipliers.insert("Good".to_string(), 0.9);
        condition_multipliers.insert("Fair".to_string(), 0.75);
        condition_multipliers.insert("Poor".to_string(), 0.5);

        Self {
            base_prices,
            condition_multipliers,
        }
    }
}

/// One priced scrap lot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapQuote {
    pub material: String,
    pub unit_price: f64,
    pub quantity_kg: f64,
    pub condition: String,
    pub multiplier: f64,
    pub total: f64,
}

impl ScrapCalculator {
    /// Price a quantity of one material
    pub fn quote(
        &self,
        material: &str,
        quantity_kg: f64,
        condition: &str,
    ) -> Result<ScrapQuote, ValuationError> {
        if !quantity_kg.is_finite() || quantity_kg <= 0.0 {
            return Err(ValuationError::InvalidQuantity { value: quantity_kg });
        }

        let unit_price = self
            .base_prices
            .get(material)
            .copied()
            .ok_or_else(|| ValuationError::UnknownMaterial {
                material: material.to_string(),
            })?;

        let multiplier = self
            .condition_multipliers
            .get(condition)
            .copied()
            .unwrap_or(1.0);

        Ok(ScrapQuote {
            material: material.to_string(),
            unit_price,
            quantity_kg,
            condition: condition.to_string(),
            multiplier,
            total: unit_price * quantity_kg * multiplier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_quote() {
        let calculator = ScrapCalculator::default();
        let quote = calculator.quote("gold", 2.0, "Good").unwrap();
        assert_eq!(quote.unit_price, 3500.0);
        assert_eq!(quote.multiplier, 0.9);
        assert_eq!(quote.total, 6300.0);
    }

    #[test]
    fn test_batteries_excellent() {
        let quote = ScrapCalculator::default()
            .quote("batteries", 5.0, "Excellent")
            .unwrap();
        assert_eq!(quote.total, 550.0);
    }

    #[test]
    fn test_unknown_material_is_an_error() {
        let err = ScrapCalculator::default()
            .quote("uranium", 1.0, "Good")
            .unwrap_err();
        assert_eq!(
            err,
            ValuationError::UnknownMaterial {
                material: "uranium".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_condition_is_neutral() {
        let quote = ScrapCalculator::default()
            .quote("metal", 10.0, "Mint")
            .unwrap();
        assert_eq!(quote.multiplier, 1.0);
        assert_eq!(quote.total, 950.0);
    }

    #[test]
    fn test_invalid_quantity() {
        let calculator = ScrapCalculator::default();
        assert!(matches!(
            calculator.quote("metal", 0.0, "Good").unwrap_err(),
            ValuationError::InvalidQuantity { .. }
        ));
        assert!(matches!(
            calculator.quote("metal", f64::NAN, "Good").unwrap_err(),
            ValuationError::InvalidQuantity { .. }
        ));
    }
}
