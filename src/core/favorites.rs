use crate::domain::model::FavoriteIds;

/// Removes `id` if present, otherwise appends it. Remaining ids keep their
/// relative order.
pub fn toggle_favorite(current: &[String], id: &str) -> Vec<String> {
    if current.iter().any(|fid| fid == id) {
        current.iter().filter(|fid| *fid != id).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(id.to_string());
        next
    }
}

impl FavoriteIds {
    pub fn toggled(&self, id: &str) -> FavoriteIds {
        FavoriteIds::from(toggle_favorite(self.ids(), id))
    }
}
