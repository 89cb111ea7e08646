use crate::domain::model::{FavoriteIds, Recipe};
use std::fmt::Write;

fn star(is_favorite: bool) -> &'static str {
    if is_favorite {
        "★"
    } else {
        "☆"
    }
}

/// Collapsed card: the summary line block shown in lists.
pub fn render_card(recipe: &Recipe, is_favorite: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}] {}",
        star(is_favorite),
        recipe.id,
        recipe.name
    );
    let _ = writeln!(out, "    {}", recipe.description);
    let _ = writeln!(
        out,
        "    ⏱ {} min · {} · serves {} · rating {:.1}",
        recipe.cooking_time, recipe.difficulty, recipe.servings, recipe.rating
    );
    if !recipe.dietary_tags.is_empty() {
        let _ = writeln!(out, "    tags: {}", recipe.dietary_tags.join(", "));
    }
    out
}

/// Expanded card with ingredients, numbered steps and nutrition.
pub fn render_expanded(recipe: &Recipe, is_favorite: bool) -> String {
    let mut out = render_card(recipe, is_favorite);

    let _ = writeln!(out, "    Ingredients:");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "      - {}", ingredient);
    }

    let _ = writeln!(out, "    Instructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "      {}. {}", i + 1, step);
    }

    let n = &recipe.nutrition;
    let _ = writeln!(
        out,
        "    Nutrition: {} kcal · protein {}g · carbs {}g · fat {}g",
        n.calories, n.protein, n.carbs, n.fat
    );
    let _ = writeln!(out, "    Image: {}", recipe.image_url);
    out
}

pub fn render_list(recipes: &[Recipe], favorites: &FavoriteIds) -> String {
    if recipes.is_empty() {
        return "No recipes to show.\n".to_string();
    }

    recipes
        .iter()
        .map(|r| render_card(r, favorites.contains(&r.id)))
        .collect::<Vec<_>>()
        .join("\n")
}
