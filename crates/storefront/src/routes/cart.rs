//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself is stored in the session; every mutation responds with an
//! `HX-Trigger: cart-updated` header, and each consumer (header count badge,
//! sidebar, cart-page contents) listens for that event and re-fetches its
//! fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use vaquita_feliz_core::{Cart, CartItem, CurrencyCode, Price, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data for the cart page.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for the cart page.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: format_total(cart.items()),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(line: &CartItem) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            quantity: line.quantity,
            line_total: Price::new(
                line.price.amount * Decimal::from(line.quantity),
                line.price.currency_code,
            )
            .display(),
        }
    }
}

/// Cart line display data for the sidebar.
#[derive(Clone)]
pub struct SidebarItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

/// Cart display data for the sidebar.
///
/// The sidebar derives its total itself rather than sharing the cart page's
/// derivation; both views must always agree.
#[derive(Clone)]
pub struct CartSidebarView {
    pub items: Vec<SidebarItemView>,
    pub total: String,
}

impl From<&Cart> for CartSidebarView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|line| SidebarItemView {
                    id: line.id.to_string(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            total: format_total(cart.items()),
        }
    }
}

/// Sum price x quantity over the lines and format for display.
fn format_total(lines: &[CartItem]) -> String {
    let amount: Decimal = lines
        .iter()
        .map(|line| line.price.amount * Decimal::from(line.quantity))
        .sum();
    Price::new(amount, CurrencyCode::MXN).display()
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, or an empty one if none is stored yet.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Persist the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart contents fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_contents.html")]
pub struct CartContentsTemplate {
    pub cart: CartView,
}

/// Cart sidebar fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_sidebar.html")]
pub struct CartSidebarTemplate {
    pub cart: CartSidebarView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;

    Ok(CartShowTemplate {
        cart: CartView::from(&cart),
    })
}

/// Add one unit of a product to the cart (HTMX).
///
/// Looks the product up in the catalog, merges it into the session cart,
/// and returns the count badge fragment with an HTMX trigger so the other
/// consumers refresh themselves.
///
/// # Errors
///
/// Returns 404 for an unknown product id, or an error if the session store
/// fails.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);
    let Some(product) = state.catalog().product(&product_id) else {
        return Err(AppError::NotFound(format!("product {product_id}")));
    };

    let mut cart = load_cart(&session).await?;
    cart.add_item(product);
    save_cart(&session, &cart).await?;

    let count = cart.items().iter().map(|line| line.quantity).sum();
    tracing::debug!(product = %product_id, count, "added item to cart");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response())
}

/// Remove a line from the cart entirely (HTMX).
///
/// Deletes the whole line regardless of quantity; a no-op for absent ids.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.remove_item(&ProductId::new(form.product_id));
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartContentsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Empty the cart unconditionally (HTMX).
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartContentsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;
    let count = cart.items().iter().map(|line| line.quantity).sum();

    Ok(CartCountTemplate { count })
}

/// Get cart-page contents fragment (HTMX).
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session))]
pub async fn items(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;

    Ok(CartContentsTemplate {
        cart: CartView::from(&cart),
    })
}

/// Get cart sidebar fragment (HTMX).
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session))]
pub async fn sidebar(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;

    Ok(CartSidebarTemplate {
        cart: CartSidebarView::from(&cart),
    })
}
