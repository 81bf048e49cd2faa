//! Cart Manager
//!
//! Ordered list of product copies. No quantities: adding the same product
//! twice yields two entries.

use serde::{Deserialize, Serialize};
use super::product::Product;

/// Whether the cart has anything to check out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Empty,
    NonEmpty,
}

/// In-memory shopping cart for one session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of the product
    pub fn add(&mut self, product: &Product) {
        self.entries.push(product.clone());
    }

    /// Remove the first entry with this id, returning it.
    /// Unknown ids are ignored.
    pub fn remove(&mut self, product_id: u32) -> Option<Product> {
        let index = self.entries.iter().position(|p| p.id == product_id)?;
        Some(self.entries.remove(index))
    }

    /// Sum of entry prices
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|p| u64::from(p.price)).sum()
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn state(&self) -> CartState {
        if self.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }
}
