//! Storefront pricing payload types
//!
//! These map one-to-one onto the JSON array accepted by the SparkLayer
//! bulk pricing endpoint:
//!
//! ```json
//! [{"sku": "A-1", "pricing": [{"quantity": 1, "price": 12.5, "unit_of_measure": null}]}]
//! ```

use super::ids::Sku;
use serde::{Deserialize, Serialize};

/// One quantity break in a price list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Minimum quantity this price applies to
    pub quantity: u32,

    /// Unit price
    pub price: f64,

    /// Unit of measure; always sent as null
    pub unit_of_measure: Option<String>,
}

/// Pricing update for a single SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingUpdateItem {
    /// Product identifier
    pub sku: Sku,

    /// Quantity breaks; the sync only ever sends a single quantity=1 tier
    pub pricing: Vec<PriceTier>,
}

impl PricingUpdateItem {
    /// Creates an item priced at `price` for quantity 1
    ///
    /// Returns `None` when `price` is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricesync::domain::{PricingUpdateItem, Sku};
    ///
    /// let item = PricingUpdateItem::single_unit(Sku::new("A-1").unwrap(), 9.99).unwrap();
    /// assert_eq!(item.unit_price(), Some(9.99));
    ///
    /// assert!(PricingUpdateItem::single_unit(Sku::new("A-1").unwrap(), f64::NAN).is_none());
    /// ```
    pub fn single_unit(sku: Sku, price: f64) -> Option<Self> {
        if !price.is_finite() {
            return None;
        }
        Some(Self {
            sku,
            pricing: vec![PriceTier {
                quantity: 1,
                price,
                unit_of_measure: None,
            }],
        })
    }

    /// Price of the quantity=1 tier, if any
    pub fn unit_price(&self) -> Option<f64> {
        self.pricing
            .iter()
            .find(|tier| tier.quantity == 1)
            .map(|tier| tier.price)
    }
}
