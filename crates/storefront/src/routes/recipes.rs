//! Recipe route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use vaquita_feliz_core::Recipe;

use crate::filters;
use crate::state::AppState;

/// Recipe display data for templates.
#[derive(Clone)]
pub struct RecipeView {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            image_url: recipe.image_url.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
        }
    }
}

/// Recipe listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "recipes/index.html")]
pub struct RecipesIndexTemplate {
    pub recipes: Vec<RecipeView>,
}

/// Display recipe listing page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let recipes = state
        .catalog()
        .recipes()
        .iter()
        .map(RecipeView::from)
        .collect();

    RecipesIndexTemplate { recipes }
}
