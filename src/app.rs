//! Page Boot
//!
//! Every page loads the same module; each behaviour starts only when its
//! DOM hosts are present.

use leptos::mount::{mount_to, mount_to_body};
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::components::{
    advanced_search, carousel, navbar, rating_form, synopsis, watchlist_pager, watchlist_toggle,
    CatalogueBrowser, CommentEditDialog, CATALOGUE_CONTAINER_ID, COMMENT_HOST_SELECTOR,
};
use crate::config::SiteConfig;
use crate::console;
use crate::dom;

const TAG: &str = "APP";

/// Wire up whatever the current page contains
pub fn boot() {
    let config = SiteConfig::load();
    console::set_debug(config.debug);

    let mut started: Vec<&str> = Vec::new();

    if navbar::mount() {
        started.push("navbar");
    }

    // The catalogue and the watchlist both use `#load-more`; the catalogue wins
    if let Some(container) = dom::by_id::<HtmlElement>(CATALOGUE_CONTAINER_ID) {
        let page_size = config.catalogue_page_size;
        mount_to(container, move || view! { <CatalogueBrowser page_size=page_size /> }).forget();
        started.push("catalogue");
    } else if watchlist_pager::mount(config.watchlist_page_size) {
        started.push("watchlist pager");
    }

    if advanced_search::mount() {
        started.push("advanced search");
    }

    if watchlist_toggle::mount(&config.login_path) {
        started.push("watchlist toggle");
    }

    if dom::query_one::<web_sys::Element>(COMMENT_HOST_SELECTOR).is_some() {
        mount_to_body(CommentEditDialog);
        started.push("comment editor");
    }

    if rating_form::mount() {
        started.push("rating form");
    }

    let sliders = carousel::mount(&config.carousel);
    if sliders > 0 {
        started.push("carousel");
    }

    let shortened = synopsis::mount(&config);
    if shortened > 0 {
        console::debug(TAG, &format!("Shortened {} synopses", shortened));
        started.push("synopsis");
    }

    console::debug(TAG, &format!("Started: {}", started.join(", ")));
}
