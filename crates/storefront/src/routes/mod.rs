//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /productos              - Product listing
//! GET  /recetas                - Recipe listing
//!
//! # Cart (HTMX fragments)
//! GET  /carrito                - Cart page
//! POST /carrito/add            - Add to cart (returns count badge, triggers cart-updated)
//! POST /carrito/remove         - Remove line (returns cart_contents fragment)
//! POST /carrito/clear          - Empty cart (returns cart_contents fragment)
//! GET  /carrito/count          - Cart count badge (fragment)
//! GET  /carrito/items          - Cart-page contents (fragment)
//! GET  /carrito/sidebar        - Cart sidebar (fragment)
//!
//! # Content pages
//! GET  /nosotros               - About page
//! ```

pub mod cart;
pub mod home;
pub mod pages;
pub mod products;
pub mod recipes;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route("/items", get(cart::items))
        .route("/sidebar", get(cart::sidebar))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog routes
        .route("/productos", get(products::index))
        .route("/recetas", get(recipes::index))
        // Cart routes
        .nest("/carrito", cart_routes())
        // Content pages
        .merge(pages::router())
}
