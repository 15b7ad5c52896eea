//! The static product and recipe catalog.
//!
//! Catalog data is read-only: the tables are built once at startup and only
//! ever read afterwards. Rendering components consume them directly; the
//! cart copies what it needs at add time.

use vaquita_feliz_core::{Price, Product, ProductId, Recipe, RecipeId};

/// In-memory catalog of products and recipes.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build the catalog with the built-in tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: builtin_products(),
            recipes: builtin_recipes(),
        }
    }

    /// All products, in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All recipes, in display order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Look up a recipe by id.
    #[must_use]
    pub fn recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == *id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Machaca Premium".to_string(),
            description: "Tradicional machaca de res 100% natural".to_string(),
            price: Price::from_pesos(250),
            image_url: "/static/images/machaca-premium.jpg".to_string(),
        },
        Product {
            id: ProductId::new("2"),
            name: "Cecina con Chile y Limón".to_string(),
            description: "Carne seca sazonada con chile y limón".to_string(),
            price: Price::from_pesos(100),
            image_url: "/static/images/cecina-chile-limon.jpg".to_string(),
        },
    ]
}

fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: RecipeId::new("r1"),
            title: "Machaca con Huevo".to_string(),
            description: "Clásica receta norteña que combina machaca con huevos revueltos"
                .to_string(),
            image_url: "/static/images/receta-machaca-huevo.jpg".to_string(),
            ingredients: vec![
                "2 huevos".to_string(),
                "100g Machaca Premium".to_string(),
                "1/2 cebolla picada".to_string(),
                "Sal y pimienta al gusto".to_string(),
                "Aceite de oliva".to_string(),
            ],
            steps: vec![
                "Calienta aceite en un sartén".to_string(),
                "Agrega la cebolla y sofríe hasta transparente".to_string(),
                "Añade la machaca y cocina por 2 minutos".to_string(),
                "Bate los huevos con sal y pimienta y agrégalos al sartén".to_string(),
                "Revuelve hasta que los huevos estén cocidos".to_string(),
                "Sirve caliente".to_string(),
            ],
        },
        Recipe {
            id: RecipeId::new("r2"),
            title: "Machaca con Verdura".to_string(),
            description: "Una versión saludable con verduras frescas y machaca".to_string(),
            image_url: "/static/images/receta-machaca-verdura.jpg".to_string(),
            ingredients: vec![
                "100g Machaca Premium".to_string(),
                "1/2 cebolla en rodajas".to_string(),
                "1 tomate picado".to_string(),
                "1 pimiento verde en tiras".to_string(),
                "Sal al gusto".to_string(),
                "Aceite".to_string(),
            ],
            steps: vec![
                "Calienta aceite y sofríe la cebolla".to_string(),
                "Agrega el pimiento y el tomate y cocina 3 minutos".to_string(),
                "Incorpora la machaca y mezcla bien".to_string(),
                "Sazona con sal y cocina 2 minutos más".to_string(),
                "Sirve acompañado de tortillas".to_string(),
            ],
        },
        Recipe {
            id: RecipeId::new("r3"),
            title: "Machaca con Papa".to_string(),
            description: "Deliciosas papas guisadas con machaca para un desayuno completo"
                .to_string(),
            image_url: "/static/images/receta-machaca-papa.jpg".to_string(),
            ingredients: vec![
                "100g Machaca Premium".to_string(),
                "2 papas medianas peladas y en cubos".to_string(),
                "1/2 cebolla picada".to_string(),
                "Aceite".to_string(),
                "Sal y pimienta".to_string(),
            ],
            steps: vec![
                "Hierve las papas hasta que estén tiernas y escurre".to_string(),
                "En un sartén con aceite, sofríe la cebolla hasta dorar".to_string(),
                "Añade las papas y la machaca, mezcla bien".to_string(),
                "Sazona con sal y pimienta".to_string(),
                "Cocina 5 minutos más y sirve".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_ids_are_unique() {
        let catalog = Catalog::new();
        for (i, a) in catalog.products().iter().enumerate() {
            for b in catalog.products().iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_recipe_ids_are_unique() {
        let catalog = Catalog::new();
        for (i, a) in catalog.recipes().iter().enumerate() {
            for b in catalog.recipes().iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::new();
        let machaca = catalog.product(&ProductId::new("1"));
        assert!(machaca.is_some_and(|p| p.name == "Machaca Premium"));
        assert!(catalog.product(&ProductId::new("999")).is_none());
    }

    #[test]
    fn test_recipe_lookup() {
        let catalog = Catalog::new();
        let recipe = catalog.recipe(&RecipeId::new("r1"));
        assert!(recipe.is_some_and(|r| r.title == "Machaca con Huevo"));
        assert!(catalog.recipe(&RecipeId::new("zzz")).is_none());
    }

    #[test]
    fn test_prices_are_positive() {
        let catalog = Catalog::new();
        assert!(
            catalog
                .products()
                .iter()
                .all(|p| p.price.amount.is_sign_positive() && !p.price.amount.is_zero())
        );
    }
}
