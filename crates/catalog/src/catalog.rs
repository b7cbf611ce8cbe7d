//! The catalog container and its lifecycle: creation, bulk construction from
//! parallel columns, record-level access, and teardown.

use stockroom_core::{CatalogError, CatalogResult, OrderedStore, Position};

use crate::product::Product;

/// Ordered collection of [`Product`] records.
///
/// Insertion order is preserved except where [`Catalog::sort_by_inventory`]
/// reorders it. The catalog exclusively owns its records; every slot holds
/// exactly one live record until it is removed.
///
/// `S` is the backing sequence. It defaults to `Vec<Product>`; any
/// [`OrderedStore`] works.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<S = Vec<Product>> {
    pub(crate) items: S,
}

impl Catalog {
    /// Create an empty catalog backed by a `Vec`.
    pub fn new() -> Self {
        Self::new_in()
    }

    /// Build a catalog from three parallel columns.
    ///
    /// Record `i` is `(names[i], inventories[i], prices[i])`, and catalog order
    /// equals input order. All three columns must have the same length as
    /// `names`; otherwise nothing is built.
    pub fn from_columns<N: AsRef<str>>(
        names: &[N],
        inventories: &[i32],
        prices: &[f64],
    ) -> CatalogResult<Self> {
        Self::from_columns_in(names, inventories, prices)
    }

    /// Build a catalog from records that already exist, keeping their order.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self::from_products_in(products)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::from_products(iter)
    }
}

impl<S: OrderedStore<Product> + Default> Catalog<S> {
    /// Create an empty catalog over a fresh `S`.
    pub fn new_in() -> Self {
        Self {
            items: S::default(),
        }
    }

    /// [`Catalog::from_columns`] over an arbitrary backing store.
    pub fn from_columns_in<N: AsRef<str>>(
        names: &[N],
        inventories: &[i32],
        prices: &[f64],
    ) -> CatalogResult<Self> {
        let count = names.len();
        if inventories.len() != count {
            return Err(CatalogError::length_mismatch("inventories", count, inventories.len()));
        }
        if prices.len() != count {
            return Err(CatalogError::length_mismatch("prices", count, prices.len()));
        }

        let mut catalog = Self::new_in();
        for ((name, &inventory), &price) in names.iter().zip(inventories).zip(prices) {
            let name: &str = name.as_ref();
            catalog.push(Product::new(name, inventory, price));
        }

        tracing::debug!(count, "catalog built from columns");
        Ok(catalog)
    }

    /// [`Catalog::from_products`] over an arbitrary backing store.
    pub fn from_products_in(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new_in();
        for product in products {
            catalog.push(product);
        }
        catalog
    }
}

impl<S: OrderedStore<Product>> Catalog<S> {
    /// Wrap an existing store; its current contents become the catalog.
    pub fn with_store(items: S) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: Position) -> Option<&Product> {
        self.items.get(position.index())
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut Product> {
        self.items.get_mut(position.index())
    }

    /// Append a record, taking ownership of it.
    pub fn push(&mut self, product: Product) -> Position {
        let position = Position::new(self.items.len());
        self.items.push(product);
        position
    }

    /// Insert a record at `position` (`0..=len`), shifting later records up.
    pub fn insert(&mut self, position: Position, product: Product) -> CatalogResult<()> {
        self.items.insert(position.index(), product)
    }

    /// Take a record out of the catalog, shifting later records down.
    ///
    /// Ownership moves to the caller, who may release it or keep it.
    pub fn remove(&mut self, position: Position) -> CatalogResult<Product> {
        self.items.remove(position.index())
    }

    /// Records in current catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        (0..self.items.len()).filter_map(move |index| self.items.get(index))
    }

    /// Tear the catalog down: release every record exactly once, then the
    /// container itself.
    ///
    /// Records are taken from the front one at a time until the store is
    /// empty, so none is skipped or visited twice. Returns how many records
    /// were released.
    pub fn release(mut self) -> usize {
        let mut released = 0;
        while let Ok(product) = self.items.remove(0) {
            product.release();
            released += 1;
        }

        tracing::debug!(released, "catalog released");
        released
    }

    /// Hand back the backing store without releasing any record.
    pub fn into_store(self) -> S {
        self.items
    }
}
