//! Session-related types and keys.
//!
//! The cart itself is stored in the session as a serialized
//! [`vaquita_feliz_core::Cart`]; only the keys live here.

/// Session keys for cart data.
pub mod keys {
    /// Key for storing the session-scoped shopping cart.
    pub const CART: &str = "cart";
}
