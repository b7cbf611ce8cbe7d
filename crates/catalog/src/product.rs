use serde::{Deserialize, Serialize};

use crate::report::{ListingFormat, ListingLine};

/// A single catalog record: what it is called, how many are on hand, and what
/// one costs.
///
/// Neither `inventory` nor `price` is validated; negative values are stored
/// as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    inventory: i32,
    price: f64,
}

impl Product {
    /// Create a record holding its own copy of `name`.
    ///
    /// The record stays valid regardless of what the caller later does with
    /// the buffer it passed in.
    pub fn new(name: impl Into<String>, inventory: i32, price: f64) -> Self {
        Self {
            name: name.into(),
            inventory,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> i32 {
        self.inventory
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Stock value on hand: `inventory * price`.
    pub fn investment(&self) -> f64 {
        f64::from(self.inventory) * self.price
    }

    /// Destroy the record, releasing its name.
    ///
    /// Consuming `self` makes a second release of the same record a compile
    /// error rather than a runtime hazard.
    pub fn release(self) {
        tracing::trace!(name = %self.name, "product released");
        drop(self);
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let format = ListingFormat::default();
        core::fmt::Display::fmt(&ListingLine::new(self, &format), f)
    }
}
