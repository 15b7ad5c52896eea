//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use vaquita_feliz_core::Product;

use crate::filters;
use crate::state::AppState;

// =============================================================================
// Hero Configuration (Static content)
// =============================================================================

/// Hero section configuration.
#[derive(Clone)]
pub struct HeroConfig {
    pub title: String,
    /// Brand name, highlighted inside the title.
    pub highlight: String,
    pub subtitle: String,
    pub image_path: String,
    pub image_alt: String,
    pub primary_text: String,
    pub primary_url: String,
    pub secondary_text: String,
    pub secondary_url: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Bienvenidos a".to_string(),
            highlight: "La Vaquita Feliz".to_string(),
            subtitle: "Descubre nuestra machaca y carne seca artesanal, elaborada con pasión en Sinaloa.".to_string(),
            image_path: "/static/images/hero-machaca.jpg".to_string(),
            image_alt: "Machaca artesanal".to_string(),
            primary_text: "Ver Productos".to_string(),
            primary_url: "/productos".to_string(),
            secondary_text: "Ver Recetas".to_string(),
            secondary_url: "/recetas".to_string(),
        }
    }
}

// =============================================================================
// Product Views
// =============================================================================

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image_url: product.image_url.clone(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Hero section configuration.
    pub hero: HeroConfig,
    /// Featured products for the grid.
    pub featured_products: Vec<ProductCardView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let featured_products = state
        .catalog()
        .products()
        .iter()
        .map(ProductCardView::from)
        .collect();

    HomeTemplate {
        hero: HeroConfig::default(),
        featured_products,
    }
}
