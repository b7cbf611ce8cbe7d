//! Textual catalog listing.
//!
//! One line per record, in current catalog order. The default layout is
//!
//! ```text
//!   - name: Widget       \tinventory: 12  \tprice: 3.500000
//! ```
//!
//! Column widths are presentation only; nothing parses this output.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use stockroom_core::OrderedStore;

use crate::catalog::Catalog;
use crate::product::Product;

/// Column layout for listings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingFormat {
    /// Minimum name column width; longer names are not truncated.
    pub name_width: usize,
    /// Minimum inventory column width.
    pub inventory_width: usize,
    /// Digits after the decimal point in the price column.
    pub price_precision: usize,
}

impl Default for ListingFormat {
    fn default() -> Self {
        Self {
            name_width: 13,
            inventory_width: 4,
            price_precision: 6,
        }
    }
}

/// A record rendered with a particular [`ListingFormat`].
#[derive(Debug, Copy, Clone)]
pub struct ListingLine<'a> {
    product: &'a Product,
    format: &'a ListingFormat,
}

impl<'a> ListingLine<'a> {
    pub fn new(product: &'a Product, format: &'a ListingFormat) -> Self {
        Self { product, format }
    }
}

impl core::fmt::Display for ListingLine<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "  - name: {:<name_width$}\tinventory: {:<inventory_width$}\tprice: {:.price_precision$}",
            self.product.name(),
            self.product.inventory(),
            self.product.price(),
            name_width = self.format.name_width,
            inventory_width = self.format.inventory_width,
            price_precision = self.format.price_precision,
        )
    }
}

impl<S: OrderedStore<Product>> Catalog<S> {
    /// Write one line per record to `out`.
    ///
    /// Only reads the catalog; nothing is buffered beyond each line.
    pub fn write_listing<W: Write>(&self, out: &mut W, format: &ListingFormat) -> io::Result<()> {
        for product in self.iter() {
            writeln!(out, "{}", ListingLine::new(product, format))?;
        }
        Ok(())
    }

    /// Print the catalog to stdout in the default layout.
    pub fn print_products(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_listing(&mut out, &ListingFormat::default())?;
        out.flush()
    }
}
