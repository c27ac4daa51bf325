//! Product stock.

mod product;

pub use product::Product;

use tracing::warn;

/// Handle to a product bound to the current transaction.
///
/// Handles index into the inventory they came from and are only valid there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProductId(usize);

/// Every product the machine carries, in the order it was configured.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Units left of `name`; products the machine does not carry have none.
    pub fn get_quantity(&self, name: &str) -> u32 {
        self.find(name).map_or(0, |p| p.quantity)
    }

    /// Look up `name` for binding to a transaction.
    pub fn select_for_transaction(&self, name: &str) -> Option<ProductId> {
        self.products
            .iter()
            .position(|p| p.name == name)
            .map(ProductId)
    }

    /// Take one unit of `id` out of stock.
    ///
    /// Callers check stock before dispensing; an empty product stays at zero.
    pub fn decrement(&mut self, id: ProductId) {
        match self.products.get_mut(id.0) {
            Some(product) => product.quantity = product.quantity.saturating_sub(1),
            None => warn!(index = id.0, "decrement of unknown product ignored"),
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Units left across every product.
    pub fn total_quantity(&self) -> u32 {
        self.products.iter().map(|p| p.quantity).sum()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
