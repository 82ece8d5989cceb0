//! Catalogue State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the card grid
//! tracks `animes`, each card tracks only `pager`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::AnimeSummary;
use crate::pager::Pager;

/// Catalogue page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct CatalogueState {
    /// Cards of the latest successful fetch, in server order
    pub animes: Vec<AnimeSummary>,
    /// Visibility window over `animes`
    pub pager: Pager,
    /// Bumped for every fetch issued; stale responses compare against it
    pub generation: u32,
}

impl CatalogueState {
    pub fn new(page_size: usize) -> Self {
        Self {
            animes: Vec::new(),
            pager: Pager::new(page_size, 0),
            generation: 0,
        }
    }
}

/// Type alias for the store
pub type CatalogueStore = Store<CatalogueState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered set and show its first page
pub fn store_replace_animes(store: &CatalogueStore, animes: Vec<AnimeSummary>) {
    let total = animes.len();
    *store.animes().write() = animes;
    store.pager().write().reset(total);
}

/// Empty the container ahead of a filtered fetch
pub fn store_clear_animes(store: &CatalogueStore) {
    store.animes().write().clear();
    store.pager().write().reset(0);
}

/// Reveal the next page; no-op on the last one
pub fn store_load_more(store: &CatalogueStore) -> bool {
    if store.pager().read_untracked().is_last_page() {
        return false;
    }
    store.pager().write().advance()
}

pub fn store_rewind(store: &CatalogueStore) {
    store.pager().write().rewind();
}

/// Start a new fetch and return its ticket
pub fn store_next_generation(store: &CatalogueStore) -> u32 {
    let field = store.generation();
    let mut generation = field.write();
    *generation = generation.wrapping_add(1);
    *generation
}

/// Whether `ticket` still belongs to the latest fetch
pub fn store_is_current(store: &CatalogueStore, ticket: u32) -> bool {
    *store.generation().read_untracked() == ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anime(id: u64) -> AnimeSummary {
        AnimeSummary {
            id,
            title: format!("Anime {}", id),
            synopsis: None,
            image: None,
        }
    }

    fn store_with(page_size: usize) -> CatalogueStore {
        Owner::new().set();
        Store::new(CatalogueState::new(page_size))
    }

    #[test]
    fn newer_fetch_makes_older_ticket_stale() {
        let store = store_with(12);
        let first = store_next_generation(&store);
        let second = store_next_generation(&store);
        assert_ne!(first, second);
        assert!(!store_is_current(&store, first));
        assert!(store_is_current(&store, second));
    }

    #[test]
    fn replace_shows_first_page_of_new_set() {
        let store = store_with(12);
        store_replace_animes(&store, (1..=30).map(anime).collect());

        assert_eq!(store.animes().read_untracked().len(), 30);
        let pager = *store.pager().read_untracked();
        assert_eq!(pager.total_items(), 30);
        assert_eq!(pager.visible_count(), 12);
        assert!(!pager.is_last_page());
    }

    #[test]
    fn load_more_stops_at_last_page() {
        let store = store_with(12);
        store_replace_animes(&store, (1..=30).map(anime).collect());

        assert!(store_load_more(&store));
        assert!(store_load_more(&store));
        assert!(!store_load_more(&store));
        let pager = *store.pager().read_untracked();
        assert_eq!(pager.visible_count(), 30);
        assert!(pager.is_last_page());
    }

    #[test]
    fn clear_leaves_no_pages() {
        let store = store_with(12);
        store_replace_animes(&store, (1..=5).map(anime).collect());
        store_clear_animes(&store);

        assert!(store.animes().read_untracked().is_empty());
        let pager = *store.pager().read_untracked();
        assert_eq!(pager.total_pages(), 0);
        assert_eq!(pager.visible_count(), 0);
        assert!(pager.is_last_page());
        assert!(!store_load_more(&store));
    }

    #[test]
    fn rewind_returns_to_first_window() {
        let store = store_with(12);
        store_replace_animes(&store, (1..=30).map(anime).collect());
        store_load_more(&store);
        store_rewind(&store);
        assert_eq!(store.pager().read_untracked().visible_count(), 12);
    }
}
