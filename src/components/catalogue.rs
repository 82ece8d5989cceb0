//! Catalogue Browser
//!
//! Fetches the anime list (filtered or not), renders the cards into
//! `#anime-container` and pages through them with `#load-more`. Every
//! matching anime is fetched up front; "load more" only reveals cards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use web_sys::{Element, HtmlButtonElement};

use crate::api;
use crate::components::AnimeCard;
use crate::console;
use crate::dom;
use crate::models::AnimeFilter;
use crate::store::{
    store_clear_animes, store_is_current, store_load_more, store_next_generation,
    store_replace_animes, store_rewind, CatalogueState, CatalogueStateStoreFields, CatalogueStore,
};

const TAG: &str = "CATALOGUE";

pub const CONTAINER_ID: &str = "anime-container";
const SEARCH_FORM_ID: &str = "search-form";
const LOAD_MORE_ID: &str = "load-more";
const TITLE_INPUT_ID: &str = "title-input";
const SUBTYPE_INPUT_ID: &str = "subtype-input";
const SORT_BY_INPUT_ID: &str = "sort-by-input";
const STATUS_INPUT_ID: &str = "status-input";

/// Current values of the search form
fn read_filter() -> AnimeFilter {
    AnimeFilter {
        title: dom::field_value(TITLE_INPUT_ID),
        subtype: dom::field_value(SUBTYPE_INPUT_ID),
        sort_by: dom::field_value(SORT_BY_INPUT_ID),
        status: dom::field_value(STATUS_INPUT_ID),
    }
}

/// Fetch and render. An empty filter loads the whole catalogue.
fn load_animes(store: CatalogueStore, filter: AnimeFilter) {
    let ticket = store_next_generation(&store);
    if !filter.is_empty() {
        store_clear_animes(&store);
    }

    spawn_local(async move {
        match api::list_animes(&filter).await {
            Ok(animes) => {
                if !store_is_current(&store, ticket) {
                    console::debug(TAG, &format!("Dropping stale response #{}", ticket));
                    return;
                }
                console::debug(TAG, &format!("Loaded {} animes", animes.len()));
                store_replace_animes(&store, animes);
            }
            Err(err) => console::error(TAG, &format!("Failed to load animes: {}", err)),
        }
    });
}

/// Catalogue page controller; mount it into `#anime-container`
#[component]
pub fn CatalogueBrowser(page_size: usize) -> impl IntoView {
    let store = Store::new(CatalogueState::new(page_size));

    if let Some(button) = dom::by_id::<HtmlButtonElement>(LOAD_MORE_ID) {
        let target = button.clone();
        Effect::new(move |_| {
            target.set_disabled(store.pager().read().is_last_page());
        });
        dom::on(&button, "click", move |_| {
            store_load_more(&store);
        });
    }

    if let Some(form) = dom::by_id::<Element>(SEARCH_FORM_ID) {
        dom::on(&form, "submit", move |ev| {
            ev.prevent_default();
            store_rewind(&store);
            load_animes(store, read_filter());
        });
    }

    // Initial load
    load_animes(store, AnimeFilter::default());

    view! { <AnimeGrid store=store /> }
}

/// Cards in server order; only the pager's window is displayed
#[component]
fn AnimeGrid(store: CatalogueStore) -> impl IntoView {
    view! {
        <For
            each=move || store.animes().get().into_iter().enumerate()
            key=|(index, anime)| (*index, anime.id)
            children=move |(index, anime)| {
                let visible = Signal::derive(move || store.pager().read().is_visible(index));
                view! { <AnimeCard anime=anime visible=visible /> }
            }
        />
    }
}
