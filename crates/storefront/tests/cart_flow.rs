//! Integration tests for the storefront router.
//!
//! These tests drive the real router (routes + session layer + state) with
//! `tower::ServiceExt::oneshot`, carrying the session cookie between
//! requests the way a browser would. They cover the cart flows end to end:
//! add/merge/remove/clear, the HTMX fragments, and the requirement that the
//! sidebar and the cart page always show the same total.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use tower::ServiceExt;

use vaquita_feliz_storefront::{config::StorefrontConfig, middleware, routes, state::AppState};

/// Build the storefront app the way `main` does, minus the listener.
fn app() -> Router {
    let config = StorefrontConfig::default();
    let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
    let state = AppState::new(config, &content_dir).expect("Failed to initialize state");
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state)
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Extract the session cookie (name=value) from a response, if one was set.
fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(ToOwned::to_owned)
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, form: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::from(form.to_owned())).unwrap())
        .await
        .unwrap()
}

// =============================================================================
// Page rendering
// =============================================================================

#[tokio::test]
async fn test_home_page_renders() {
    let app = app();
    let response = get(&app, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("La Vaquita Feliz"));
    assert!(body.contains("Machaca Premium"));
}

#[tokio::test]
async fn test_product_listing_renders() {
    let app = app();
    let response = get(&app, "/productos", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Machaca Premium"));
    assert!(body.contains("$250"));
    assert!(body.contains("Cecina con Chile y Limón"));
    assert!(body.contains("$100"));
}

#[tokio::test]
async fn test_recipe_listing_renders() {
    let app = app();
    let response = get(&app, "/recetas", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Machaca con Huevo"));
    assert!(body.contains("Machaca con Verdura"));
    assert!(body.contains("Machaca con Papa"));
}

#[tokio::test]
async fn test_nosotros_page_renders() {
    let app = app();
    let response = get(&app, "/nosotros", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Nosotros"));
    assert!(body.contains("Francisco Monárrez Félix"));
}

// =============================================================================
// Cart flows
// =============================================================================

#[tokio::test]
async fn test_cart_starts_empty() {
    let app = app();
    let response = get(&app, "/carrito", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Tu carrito está vacío"));
    assert!(body.contains("/productos"));
}

#[tokio::test]
async fn test_add_returns_count_and_trigger() {
    let app = app();
    let response = post_form(&app, "/carrito/add", "product_id=1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );
    assert!(session_cookie(&response).is_some());

    let body = body_string(response).await;
    assert!(body.contains(">1<"));
}

#[tokio::test]
async fn test_add_unknown_product_is_404() {
    let app = app();
    let response = post_form(&app, "/carrito/add", "product_id=999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_machaca_scenario() {
    // empty -> add -> one line, total $250 -> add again -> qty 2, total $500
    // -> remove -> empty, total $0
    let app = app();

    let response = post_form(&app, "/carrito/add", "product_id=1", None).await;
    let cookie = session_cookie(&response).unwrap();

    let page = body_string(get(&app, "/carrito", Some(&cookie)).await).await;
    assert!(page.contains("Machaca Premium x 1"));
    assert!(page.contains("Total: $250"));

    let response = post_form(&app, "/carrito/add", "product_id=1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(get(&app, "/carrito", Some(&cookie)).await).await;
    assert!(page.contains("Machaca Premium x 2"));
    assert!(page.contains("Total: $500"));

    let response = post_form(&app, "/carrito/remove", "product_id=1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );

    let page = body_string(get(&app, "/carrito", Some(&cookie)).await).await;
    assert!(page.contains("Tu carrito está vacío"));

    let count = body_string(get(&app, "/carrito/count", Some(&cookie)).await).await;
    assert!(count.contains(">0<"));
}

#[tokio::test]
async fn test_distinct_products_create_distinct_lines() {
    let app = app();

    let response = post_form(&app, "/carrito/add", "product_id=1", None).await;
    let cookie = session_cookie(&response).unwrap();
    post_form(&app, "/carrito/add", "product_id=2", Some(&cookie)).await;

    let page = body_string(get(&app, "/carrito", Some(&cookie)).await).await;
    assert!(page.contains("Machaca Premium x 1"));
    assert!(page.contains("Cecina con Chile y Limón x 1"));
    assert!(page.contains("Total: $350"));
}

#[tokio::test]
async fn test_sidebar_and_cart_page_show_same_total() {
    let app = app();

    let response = post_form(&app, "/carrito/add", "product_id=1", None).await;
    let cookie = session_cookie(&response).unwrap();
    post_form(&app, "/carrito/add", "product_id=1", Some(&cookie)).await;
    post_form(&app, "/carrito/add", "product_id=2", Some(&cookie)).await;

    let page = body_string(get(&app, "/carrito", Some(&cookie)).await).await;
    let sidebar = body_string(get(&app, "/carrito/sidebar", Some(&cookie)).await).await;

    assert!(page.contains("Total: $600"));
    assert!(sidebar.contains("Total: $600"));
}

#[tokio::test]
async fn test_remove_absent_id_leaves_cart_unchanged() {
    let app = app();

    let response = post_form(&app, "/carrito/add", "product_id=1", None).await;
    let cookie = session_cookie(&response).unwrap();

    let response = post_form(&app, "/carrito/remove", "product_id=2", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(get(&app, "/carrito", Some(&cookie)).await).await;
    assert!(page.contains("Machaca Premium x 1"));
    assert!(page.contains("Total: $250"));
}

#[tokio::test]
async fn test_clear_empties_the_cart() {
    let app = app();

    let response = post_form(&app, "/carrito/add", "product_id=1", None).await;
    let cookie = session_cookie(&response).unwrap();
    post_form(&app, "/carrito/add", "product_id=2", Some(&cookie)).await;

    let response = post_form(&app, "/carrito/clear", "", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );

    let fragment = body_string(get(&app, "/carrito/items", Some(&cookie)).await).await;
    assert!(fragment.contains("Tu carrito está vacío"));

    let count = body_string(get(&app, "/carrito/count", Some(&cookie)).await).await;
    assert!(count.contains(">0<"));
}

#[tokio::test]
async fn test_sidebar_starts_empty_without_session() {
    let app = app();
    let response = get(&app, "/carrito/sidebar", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("El carrito está vacío"));
}
