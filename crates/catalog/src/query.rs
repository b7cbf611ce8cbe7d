//! Extremum queries.
//!
//! Each query is one left-to-right pass with a running maximum seeded at
//! zero. A record only takes over when its score is strictly greater, so the
//! first record reaching the maximum wins ties, and a catalog whose scores are
//! all `<= 0` yields the first record. NaN scores never win.

use stockroom_core::{OrderedStore, Position};

use crate::catalog::Catalog;
use crate::product::Product;

impl<S: OrderedStore<Product>> Catalog<S> {
    /// Position of the record maximizing `score`.
    ///
    /// Returns `None` only for an empty catalog.
    pub fn max_by_score<F>(&self, score: F) -> Option<Position>
    where
        F: Fn(&Product) -> f64,
    {
        if self.is_empty() {
            return None;
        }

        let mut best = 0.0;
        let mut best_index = 0;
        for (index, product) in self.iter().enumerate() {
            let value = score(product);
            if value > best {
                best = value;
                best_index = index;
            }
        }

        Some(Position::new(best_index))
    }

    pub fn max_price_position(&self) -> Option<Position> {
        self.max_by_score(Product::price)
    }

    pub fn max_investment_position(&self) -> Option<Position> {
        self.max_by_score(Product::investment)
    }

    /// The record with the greatest price, borrowed from the catalog.
    pub fn find_max_price(&self) -> Option<&Product> {
        self.max_price_position().and_then(|position| self.get(position))
    }

    /// The record with the greatest `inventory * price`, borrowed from the
    /// catalog.
    pub fn find_max_investment(&self) -> Option<&Product> {
        self.max_investment_position().and_then(|position| self.get(position))
    }
}
