use crate::domain::model::{FilterCriteria, Recipe};

fn satisfies(recipe: &Recipe, criteria: &FilterCriteria) -> bool {
    if let Some(difficulty) = criteria.difficulty {
        if recipe.difficulty != difficulty {
            return false;
        }
    }

    if let Some(max_time) = criteria.max_cooking_time.filter(|t| *t > 0) {
        if recipe.cooking_time > max_time {
            return false;
        }
    }

    // AND across tags, exact string comparison
    criteria.dietary.iter().all(|tag| recipe.has_tag(tag))
}

/// Entries satisfying every present criterion, in catalog order. Callers pass
/// the full catalog; earlier search or filter results are never narrowed.
pub fn apply_filters(catalog: &[Recipe], criteria: &FilterCriteria) -> Vec<Recipe> {
    catalog
        .iter()
        .filter(|recipe| satisfies(recipe, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::domain::model::Difficulty;

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_full_catalog() {
        let catalog = Catalog::sample();
        let result = apply_filters(catalog.recipes(), &FilterCriteria::default());
        assert_eq!(result, catalog.recipes().to_vec());
    }

    #[test]
    fn test_difficulty_easy() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria {
            difficulty: Some(Difficulty::Easy),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.recipes(), &criteria)), vec!["1", "3"]);
    }

    #[test]
    fn test_dietary_vegan() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria {
            dietary: vec!["vegan".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.recipes(), &criteria)), vec!["3"]);
    }

    #[test]
    fn test_dietary_tags_are_anded() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria {
            dietary: vec!["gluten-free".to_string(), "dairy-free".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.recipes(), &criteria)), vec!["3"]);
    }

    #[test]
    fn test_max_cooking_time_is_inclusive() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria {
            max_cooking_time: Some(25),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.recipes(), &criteria)), vec!["1", "2"]);
    }

    #[test]
    fn test_zero_cooking_time_is_no_op() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria {
            max_cooking_time: Some(0),
            ..Default::default()
        };
        assert_eq!(apply_filters(catalog.recipes(), &criteria).len(), 3);
    }

    #[test]
    fn test_criteria_intersect() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria {
            difficulty: Some(Difficulty::Easy),
            max_cooking_time: Some(30),
            dietary: vec!["gluten-free".to_string()],
        };
        assert_eq!(ids(&apply_filters(catalog.recipes(), &criteria)), vec!["1"]);
    }

    #[test]
    fn test_unknown_tag_filters_everything_out() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria {
            dietary: vec!["Vegan".to_string()],
            ..Default::default()
        };
        assert!(apply_filters(catalog.recipes(), &criteria).is_empty());
    }
}
