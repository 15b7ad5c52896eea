//! Catalog entry types.
//!
//! Products and recipes are static, read-only data: the storefront builds
//! its tables once at startup and only ever reads them afterwards.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, RecipeId};

/// A product available in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price; always positive.
    pub price: Price,
    pub image_url: String,
}

/// A recipe featuring the storefront's products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}
