use crate::domain::model::Recipe;

/// Minimum number of a recipe's ingredients that must be matched for the
/// recipe to show up in search results.
pub const MATCH_THRESHOLD: usize = 2;

/// Splits comma-separated ingredient text into trimmed names. Blank segments
/// are kept, and an empty name is contained in every ingredient.
pub fn parse_ingredient_list(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_string()).collect()
}

/// Number of `recipe` ingredients that contain at least one of the user's
/// ingredients (trimmed, case-insensitive). Each recipe ingredient counts once.
pub fn match_count<S: AsRef<str>>(recipe: &Recipe, user_ingredients: &[S]) -> usize {
    let needles: Vec<String> = user_ingredients
        .iter()
        .map(|i| i.as_ref().trim().to_lowercase())
        .collect();

    recipe
        .ingredients
        .iter()
        .filter(|ingredient| {
            let haystack = ingredient.to_lowercase();
            needles.iter().any(|needle| haystack.contains(needle.as_str()))
        })
        .count()
}

/// Catalog entries sharing at least [`MATCH_THRESHOLD`] ingredients with the
/// user's list, in catalog order.
pub fn match_recipes<S: AsRef<str>>(catalog: &[Recipe], user_ingredients: &[S]) -> Vec<Recipe> {
    catalog
        .iter()
        .filter(|recipe| match_count(recipe, user_ingredients) >= MATCH_THRESHOLD)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_salad_vegetables_match_quinoa_bowl_only() {
        let catalog = Catalog::sample();
        let input = parse_ingredient_list("tomatoes, cucumber, lettuce");

        let matches = match_recipes(catalog.recipes(), &input);

        assert_eq!(ids(&matches), vec!["1"]);
    }

    #[test]
    fn test_single_shared_ingredient_is_below_threshold() {
        let catalog = Catalog::sample();
        // Lentil curry has "tomatoes" but nothing else from this list.
        let curry = catalog.get("3").unwrap();
        assert_eq!(match_count(curry, &["tomatoes", "cucumber", "lettuce"]), 1);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_trims_user_input() {
        let catalog = Catalog::sample();
        let matches = match_recipes(catalog.recipes(), &["  GARLIC ", "Chicken"]);

        assert_eq!(ids(&matches), vec!["2"]);
    }

    #[test]
    fn test_catalog_ingredient_counts_once_for_many_user_ingredients() {
        let catalog = Catalog::sample();
        let bowl = catalog.get("1").unwrap();
        // Both user entries hit "cherry tomatoes" and nothing else.
        assert_eq!(match_count(bowl, &["cherry", "tomatoes"]), 1);
    }

    #[test]
    fn test_result_preserves_catalog_order() {
        let catalog = Catalog::sample();
        let matches = match_recipes(catalog.recipes(), &["garlic", "chili", "onion"]);

        assert_eq!(ids(&matches), vec!["2", "3"]);
    }

    #[test]
    fn test_empty_user_list_matches_nothing() {
        let catalog = Catalog::sample();
        let empty: Vec<String> = Vec::new();
        assert!(match_recipes(catalog.recipes(), &empty).is_empty());
    }

    #[test]
    fn test_no_match_is_empty_result() {
        let catalog = Catalog::sample();
        assert!(match_recipes(catalog.recipes(), &["chocolate", "flour"]).is_empty());
    }

    #[test]
    fn test_parse_ingredient_list_keeps_blank_segments() {
        assert_eq!(
            parse_ingredient_list(" tomatoes ,, cucumber,  "),
            vec!["tomatoes", "", "cucumber", ""]
        );
    }

    #[test]
    fn test_trailing_comma_matches_every_recipe() {
        let catalog = Catalog::sample();
        let input = parse_ingredient_list("garlic,");

        let matches = match_recipes(catalog.recipes(), &input);

        assert_eq!(ids(&matches), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_single_ingredient_recipe_never_matches() {
        let mut toast = Catalog::sample().get("1").unwrap().clone();
        toast.id = "9".to_string();
        toast.name = "Butter".to_string();
        toast.ingredients = vec!["butter".to_string()];
        let catalog = Catalog::from_recipes(vec![toast]).unwrap();

        assert_eq!(match_count(&catalog.recipes()[0], &["butter", "salt"]), 1);
        assert!(match_recipes(catalog.recipes(), &["butter", "salt"]).is_empty());
    }
}
