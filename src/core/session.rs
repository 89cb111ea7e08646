use crate::core::catalog::Catalog;
use crate::core::filter::apply_filters;
use crate::core::matcher::{match_recipes, parse_ingredient_list};
use crate::domain::model::{FavoriteIds, FilterCriteria, ImageInput, Notification, Recipe};
use crate::domain::ports::{IngredientRecognizer, Notifier};
use crate::utils::error::{RecipeError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

const MSG_EMPTY_INGREDIENTS: &str = "Please enter some ingredients first!";
const MSG_NO_MATCHES: &str = "No matching recipes found. Try different ingredients!";
const MSG_FILTERS_APPLIED: &str = "Filters applied!";
const MSG_FAVORITES_UPDATED: &str = "Recipe favorites updated!";
const MSG_IMAGE_UPLOADED: &str = "Image uploaded! Processing ingredients...";
const MSG_IMAGE_FAILED: &str = "Error processing image. Please try again.";
const MSG_SCAN_BUSY: &str = "Still processing the previous image, please wait.";

/// Everything the presentation layer shows. Each field is replaced wholesale
/// through its setter.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    recipes: Vec<Recipe>,
    favorites: FavoriteIds,
    ingredients: String,
    active_filters: FilterCriteria,
    loading: bool,
}

impl SessionState {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            recipes: catalog.recipes().to_vec(),
            favorites: FavoriteIds::new(),
            ingredients: String::new(),
            active_filters: FilterCriteria::default(),
            loading: false,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn favorites(&self) -> &FavoriteIds {
        &self.favorites
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn active_filters(&self) -> &FilterCriteria {
        &self.active_filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
    }

    pub fn set_favorites(&mut self, favorites: FavoriteIds) {
        self.favorites = favorites;
    }

    pub fn set_ingredients(&mut self, ingredients: impl Into<String>) {
        self.ingredients = ingredients.into();
    }

    pub fn set_active_filters(&mut self, criteria: FilterCriteria) {
        self.active_filters = criteria;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Matched(usize),
    NoMatches,
}

/// Clears the in-flight flag however the scan ends.
struct ScanGuard<'a>(&'a AtomicBool);

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Application object: owns the catalog, the collaborators and the session
/// state, and handles the user's events.
pub struct RecipeFinder<R: IngredientRecognizer, N: Notifier> {
    catalog: Arc<Catalog>,
    recognizer: R,
    notifier: N,
    state: Mutex<SessionState>,
    scanning: AtomicBool,
}

impl<R: IngredientRecognizer, N: Notifier> RecipeFinder<R, N> {
    pub fn new(catalog: Catalog, recognizer: R, notifier: N) -> Self {
        let state = SessionState::new(&catalog);
        Self {
            catalog: Arc::new(catalog),
            recognizer,
            notifier,
            state: Mutex::new(state),
            scanning: AtomicBool::new(false),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning.load(Ordering::Acquire)
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Text-changed event.
    pub async fn set_ingredients(&self, text: &str) {
        self.state.lock().await.set_ingredients(text);
    }

    /// Matches the current ingredient text against the full catalog.
    pub async fn search(&self) -> Result<SearchOutcome> {
        if self.is_scanning() {
            tracing::warn!("Search rejected while an image is being processed");
            self.notifier.notify(Notification::error(MSG_SCAN_BUSY));
            return Err(RecipeError::OperationInProgress {
                operation: "image analysis".to_string(),
            });
        }

        let mut state = self.state.lock().await;

        if state.ingredients().trim().is_empty() {
            tracing::warn!("Search rejected: no ingredients entered");
            self.notifier.notify(Notification::error(MSG_EMPTY_INGREDIENTS));
            return Err(RecipeError::EmptyIngredients);
        }

        let ingredient_list = parse_ingredient_list(state.ingredients());
        Ok(self.show_matches(&mut state, &ingredient_list))
    }

    fn show_matches(&self, state: &mut SessionState, ingredient_list: &[String]) -> SearchOutcome {
        tracing::info!("Searching recipes for: {}", ingredient_list.join(", "));

        let matches = match_recipes(self.catalog.recipes(), ingredient_list);
        let count = matches.len();
        state.set_recipes(matches);

        if count > 0 {
            tracing::info!("Found {} matching recipes", count);
            self.notifier.notify(Notification::success(format!(
                "Found {} matching recipes!",
                count
            )));
            SearchOutcome::Matched(count)
        } else {
            tracing::info!("No recipes reached the match threshold");
            self.notifier.notify(Notification::info(MSG_NO_MATCHES));
            SearchOutcome::NoMatches
        }
    }

    /// Replaces the active criteria and filters the full catalog. Returns the
    /// number of recipes left.
    pub async fn apply_filters(&self, criteria: FilterCriteria) -> usize {
        tracing::debug!("Applying filters: {:?}", criteria);

        let filtered = apply_filters(self.catalog.recipes(), &criteria);
        let count = filtered.len();

        let mut state = self.state.lock().await;
        state.set_active_filters(criteria);
        state.set_recipes(filtered);

        tracing::info!("Filters left {} of {} recipes", count, self.catalog.len());
        self.notifier.notify(Notification::success(MSG_FILTERS_APPLIED));
        count
    }

    /// Returns whether `id` is a favorite afterwards.
    pub async fn toggle_favorite(&self, id: &str) -> bool {
        let mut state = self.state.lock().await;
        let favorites = state.favorites().toggled(id);
        let now_favorite = favorites.contains(id);
        state.set_favorites(favorites);

        tracing::debug!("Favorite {} -> {}", id, now_favorite);
        self.notifier.notify(Notification::success(MSG_FAVORITES_UPDATED));
        now_favorite
    }

    /// Catalog entries that are favorited, in favorite order.
    pub async fn favorite_recipes(&self) -> Vec<Recipe> {
        let state = self.state.lock().await;
        state
            .favorites()
            .ids()
            .iter()
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect()
    }

    /// Back to the full catalog with no filters.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.set_active_filters(FilterCriteria::default());
        state.set_recipes(self.catalog.recipes().to_vec());
        tracing::debug!("Session reset to full catalog");
    }

    /// Runs the recognizer on `image`, puts the detected ingredients into the
    /// text field and searches with them. Only one scan may run at a time.
    pub async fn scan_image(&self, image: &ImageInput) -> Result<SearchOutcome> {
        if self
            .scanning
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Rejected scan of {}: another scan is running", image.file_name);
            self.notifier.notify(Notification::error(MSG_SCAN_BUSY));
            return Err(RecipeError::OperationInProgress {
                operation: "image analysis".to_string(),
            });
        }
        let _guard = ScanGuard(&self.scanning);

        tracing::info!(
            "Processing image {} ({} bytes)",
            image.file_name,
            image.bytes.len()
        );
        self.notifier.notify(Notification::success(MSG_IMAGE_UPLOADED));
        self.state.lock().await.set_loading(true);

        let detected = self.recognizer.recognize(image).await;

        let mut state = self.state.lock().await;
        state.set_loading(false);

        match detected {
            Ok(ingredients) => {
                tracing::debug!("Detected ingredients: {:?}", ingredients);
                state.set_ingredients(ingredients.join(", "));
                Ok(self.show_matches(&mut state, &ingredients))
            }
            Err(e) => {
                tracing::error!("Image processing failed: {}", e);
                self.notifier.notify(Notification::error(MSG_IMAGE_FAILED));
                Err(match e {
                    RecipeError::RecognitionError { .. } => e,
                    other => RecipeError::RecognitionError {
                        message: other.to_string(),
                    },
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Difficulty, NotificationLevel};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct RecordingNotifier {
        seen: StdMutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn last(&self) -> Option<Notification> {
            self.seen.lock().unwrap().last().cloned()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    struct FixedRecognizer(Vec<String>);

    #[async_trait]
    impl IngredientRecognizer for FixedRecognizer {
        async fn recognize(&self, _image: &ImageInput) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    fn finder(detected: &[&str]) -> RecipeFinder<FixedRecognizer, RecordingNotifier> {
        RecipeFinder::new(
            Catalog::sample(),
            FixedRecognizer(detected.iter().map(|s| s.to_string()).collect()),
            RecordingNotifier::default(),
        )
    }

    #[tokio::test]
    async fn test_new_session_shows_full_catalog() {
        let finder = finder(&[]);
        let state = finder.snapshot().await;

        assert_eq!(state.recipes().len(), 3);
        assert!(state.favorites().is_empty());
        assert!(state.ingredients().is_empty());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_search_replaces_recipe_list() {
        let finder = finder(&[]);
        finder.set_ingredients("tomatoes, cucumber, lettuce").await;

        let outcome = finder.search().await.unwrap();

        assert_eq!(outcome, SearchOutcome::Matched(1));
        assert_eq!(finder.snapshot().await.recipes()[0].id, "1");
        let last = finder.notifier().last().unwrap();
        assert_eq!(last.level, NotificationLevel::Success);
        assert_eq!(last.message, "Found 1 matching recipes!");
    }

    #[tokio::test]
    async fn test_whitespace_search_is_rejected_without_state_change() {
        let finder = finder(&[]);
        finder
            .apply_filters(FilterCriteria {
                difficulty: Some(Difficulty::Medium),
                ..Default::default()
            })
            .await;
        let before = finder.snapshot().await;

        finder.set_ingredients("   ").await;
        let err = finder.search().await.unwrap_err();

        assert!(matches!(err, RecipeError::EmptyIngredients));
        assert_eq!(finder.snapshot().await.recipes(), before.recipes());
        assert_eq!(finder.notifier().last().unwrap().level, NotificationLevel::Error);
    }

    #[tokio::test]
    async fn test_no_matches_empties_list_with_info_message() {
        let finder = finder(&[]);
        finder.set_ingredients("chocolate, flour").await;

        assert_eq!(finder.search().await.unwrap(), SearchOutcome::NoMatches);
        assert!(finder.snapshot().await.recipes().is_empty());
        assert_eq!(finder.notifier().last().unwrap().level, NotificationLevel::Info);
    }

    #[tokio::test]
    async fn test_trailing_comma_search_matches_whole_catalog() {
        let finder = finder(&[]);
        finder.set_ingredients("garlic,").await;

        assert_eq!(finder.search().await.unwrap(), SearchOutcome::Matched(3));
        let ids: Vec<String> = finder
            .snapshot()
            .await
            .recipes()
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_filters_ignore_previous_search() {
        let finder = finder(&[]);
        finder.set_ingredients("garlic, chili").await;
        finder.search().await.unwrap();
        assert_eq!(finder.snapshot().await.recipes().len(), 1);

        let count = finder
            .apply_filters(FilterCriteria {
                dietary: vec!["dairy-free".to_string()],
                ..Default::default()
            })
            .await;

        assert_eq!(count, 2);
        assert_eq!(finder.notifier().last().unwrap().message, "Filters applied!");
    }

    #[tokio::test]
    async fn test_toggle_favorite_and_list_favorites() {
        let finder = finder(&[]);

        assert!(finder.toggle_favorite("3").await);
        assert!(finder.toggle_favorite("1").await);
        assert!(!finder.toggle_favorite("3").await);
        assert!(finder.toggle_favorite("3").await);

        let names: Vec<String> = finder
            .favorite_recipes()
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(names, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_scan_sets_ingredient_text_and_matches() {
        let finder = finder(&["tomatoes", "cucumber", "lettuce"]);
        let image = ImageInput::new("fridge.jpg", vec![0xFF, 0xD8]);

        let outcome = finder.scan_image(&image).await.unwrap();

        assert_eq!(outcome, SearchOutcome::Matched(1));
        let state = finder.snapshot().await;
        assert_eq!(state.ingredients(), "tomatoes, cucumber, lettuce");
        assert!(!state.is_loading());
        assert!(!finder.is_scanning());
    }

    #[tokio::test]
    async fn test_reset_restores_catalog_and_clears_filters() {
        let finder = finder(&[]);
        finder
            .apply_filters(FilterCriteria {
                dietary: vec!["vegan".to_string()],
                ..Default::default()
            })
            .await;

        finder.reset().await;

        let state = finder.snapshot().await;
        assert_eq!(state.recipes().len(), 3);
        assert!(state.active_filters().is_empty());
    }
}
