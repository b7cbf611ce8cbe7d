//! In-place sort by inventory.

use stockroom_core::OrderedStore;

use crate::catalog::Catalog;
use crate::product::Product;

/// What a sort run did.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// Full passes over the catalog, including the final swap-free one.
    pub passes: usize,
    /// Adjacent exchanges performed.
    pub swaps: usize,
}

impl SortOutcome {
    /// True if the catalog was already in order.
    pub fn was_sorted(&self) -> bool {
        self.swaps == 0
    }
}

impl<S: OrderedStore<Product>> Catalog<S> {
    /// Reorder records so `inventory` is non-decreasing.
    ///
    /// Exchange sort: full left-to-right passes swap any neighbour pair whose
    /// right-hand inventory is strictly smaller, until a pass makes no swap.
    /// Whole records move, so names and prices stay with their inventory.
    /// Equal inventories are never swapped, which keeps the sort stable.
    /// No auxiliary storage is used.
    ///
    /// Any [`Position`](stockroom_core::Position) obtained before the sort may
    /// point at a different record afterwards.
    pub fn sort_by_inventory(&mut self) -> SortOutcome {
        let len = self.items.len();
        let mut outcome = SortOutcome::default();

        loop {
            outcome.passes += 1;
            let mut pass_swaps = 0;

            for index in 1..len {
                let out_of_order = match (self.items.get(index - 1), self.items.get(index)) {
                    (Some(current), Some(next)) => next.inventory() < current.inventory(),
                    _ => false,
                };
                if out_of_order && self.items.swap(index - 1, index).is_ok() {
                    pass_swaps += 1;
                }
            }

            tracing::trace!(pass = outcome.passes, swaps = pass_swaps, "inventory sort pass");
            outcome.swaps += pass_swaps;
            if pass_swaps == 0 {
                break;
            }
        }

        tracing::debug!(
            len,
            passes = outcome.passes,
            swaps = outcome.swaps,
            "catalog sorted by inventory"
        );
        outcome
    }
}
