//! Session-scoped shopping cart state container.
//!
//! The cart is the single source of truth for what a visitor intends to buy.
//! It lives in the visitor's session for the duration of a browsing session
//! and is discarded when the session expires; there is no other persistence.
//!
//! The container holds an ordered list of lines, unique by product id, and
//! is mutated only through [`Cart::add_item`], [`Cart::remove_item`], and
//! [`Cart::clear`]. All three are total: they cannot fail for any cart
//! state. The cart computes nothing beyond identity-based merging - views
//! derive totals themselves from [`Cart::items`].

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// A single product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price at the time the line was added.
    pub price: Price,
    /// Always >= 1; the only way down is removing the whole line.
    pub quantity: u32,
}

/// The cart: an ordered sequence of [`CartItem`], unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product to the cart.
    ///
    /// If a line with the same id already exists its quantity is incremented
    /// by 1; otherwise a new line with quantity 1 is appended. Insertion
    /// order is preserved.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self.items.iter_mut().find(|line| line.id == product.id) {
            line.quantity += 1;
        } else {
            self.items.push(CartItem {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity: 1,
            });
        }
    }

    /// Remove the line with the given id entirely.
    ///
    /// This deletes the whole line regardless of its quantity - it is NOT a
    /// decrement. No-op if no line has the id.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|line| line.id != *id);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
