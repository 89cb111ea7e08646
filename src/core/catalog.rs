use crate::domain::model::{Difficulty, Nutrition, Recipe};
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url};
use std::collections::HashSet;

/// Immutable, validated list of recipes. Built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::new();

        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(invalid(format!("duplicate recipe id '{}'", recipe.id)));
            }
            validate_recipe(recipe)?;
        }

        tracing::debug!("Catalog built with {} recipes", recipes.len());
        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// The built-in sample recipes.
    pub fn sample() -> Self {
        Self {
            recipes: sample_recipes(),
        }
    }
}

fn invalid(message: String) -> RecipeError {
    RecipeError::InvalidCatalog { message }
}

fn validate_recipe(recipe: &Recipe) -> Result<()> {
    let context = |e: RecipeError| invalid(format!("recipe '{}': {}", recipe.id, e));

    validate_non_empty_string("id", &recipe.id).map_err(context)?;
    validate_non_empty_string("name", &recipe.name).map_err(context)?;

    if recipe.ingredients.is_empty() {
        return Err(invalid(format!("recipe '{}' has no ingredients", recipe.id)));
    }
    if recipe.instructions.is_empty() {
        return Err(invalid(format!("recipe '{}' has no instructions", recipe.id)));
    }
    if recipe.cooking_time == 0 {
        return Err(invalid(format!("recipe '{}' has zero cooking time", recipe.id)));
    }
    if recipe.servings == 0 {
        return Err(invalid(format!("recipe '{}' has zero servings", recipe.id)));
    }

    validate_url("imageUrl", &recipe.image_url).map_err(context)?;
    validate_range("rating", recipe.rating, 0.0, 5.0).map_err(context)?;

    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            name: "Mediterranean Quinoa Bowl".to_string(),
            description: "A healthy and filling bowl packed with protein and fresh vegetables"
                .to_string(),
            ingredients: strings(&[
                "quinoa",
                "cherry tomatoes",
                "cucumber",
                "feta cheese",
                "olive oil",
            ]),
            instructions: strings(&[
                "Cook quinoa according to package instructions",
                "Chop vegetables",
                "Combine all ingredients in a bowl",
                "Drizzle with olive oil and season",
            ]),
            cooking_time: 25,
            difficulty: Difficulty::Easy,
            servings: 2,
            nutrition: Nutrition {
                calories: 420.0,
                protein: 15.0,
                carbs: 52.0,
                fat: 18.0,
            },
            dietary_tags: strings(&["vegetarian", "gluten-free"]),
            image_url: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?auto=format&fit=crop&q=80".to_string(),
            rating: 4.5,
        },
        Recipe {
            id: "2".to_string(),
            name: "Spicy Thai Basil Chicken".to_string(),
            description: "A flavorful stir-fry with aromatic Thai basil and chili".to_string(),
            ingredients: strings(&[
                "chicken breast",
                "thai basil",
                "garlic",
                "chili",
                "soy sauce",
                "oyster sauce",
            ]),
            instructions: strings(&[
                "Slice chicken into bite-sized pieces",
                "Stir-fry garlic and chili",
                "Add chicken and sauces",
                "Finish with Thai basil",
            ]),
            cooking_time: 20,
            difficulty: Difficulty::Medium,
            servings: 4,
            nutrition: Nutrition {
                calories: 380.0,
                protein: 35.0,
                carbs: 8.0,
                fat: 22.0,
            },
            dietary_tags: strings(&["dairy-free"]),
            image_url: "https://images.unsplash.com/photo-1564671165093-20688ff1fffa?auto=format&fit=crop&q=80".to_string(),
            rating: 4.8,
        },
        Recipe {
            id: "3".to_string(),
            name: "Vegan Lentil Curry".to_string(),
            description: "Hearty and warming curry with red lentils and coconut milk".to_string(),
            ingredients: strings(&[
                "red lentils",
                "coconut milk",
                "curry powder",
                "onion",
                "garlic",
                "tomatoes",
            ]),
            instructions: strings(&[
                "Sauté onions and garlic",
                "Add spices and toast",
                "Add lentils and coconut milk",
                "Simmer until lentils are tender",
            ]),
            cooking_time: 35,
            difficulty: Difficulty::Easy,
            servings: 6,
            nutrition: Nutrition {
                calories: 320.0,
                protein: 12.0,
                carbs: 45.0,
                fat: 14.0,
            },
            dietary_tags: strings(&["vegan", "gluten-free", "dairy-free"]),
            image_url: "https://images.unsplash.com/photo-1546833999-b9f581a1996d?auto=format&fit=crop&q=80".to_string(),
            rating: 4.6,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let sample = Catalog::sample();
        let rebuilt = Catalog::from_recipes(sample.recipes().to_vec()).unwrap();

        assert_eq!(rebuilt.len(), 3);
        assert_eq!(rebuilt.get("2").unwrap().name, "Spicy Thai Basil Chicken");
        assert!(rebuilt.get("4").is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut recipes = sample_recipes();
        recipes[2].id = "1".to_string();

        let err = Catalog::from_recipes(recipes).unwrap_err();
        assert!(matches!(err, RecipeError::InvalidCatalog { .. }));
        assert!(err.to_string().contains("duplicate recipe id '1'"));
    }

    #[test]
    fn test_recipe_without_ingredients_is_rejected() {
        let mut recipes = sample_recipes();
        recipes[0].ingredients.clear();

        assert!(Catalog::from_recipes(recipes).is_err());
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        let mut recipes = sample_recipes();
        recipes[1].rating = 7.0;

        let err = Catalog::from_recipes(recipes).unwrap_err();
        assert!(err.to_string().contains("recipe '2'"));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        assert!(Catalog::from_recipes(Vec::new()).unwrap().is_empty());
    }
}
