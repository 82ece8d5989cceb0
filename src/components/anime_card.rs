//! Anime Card Component
//!
//! One catalogue entry linking to the anime's detail page.

use leptos::prelude::*;

use crate::models::AnimeSummary;

/// Catalogue card, hidden unless `visible`
#[component]
pub fn AnimeCard(
    anime: AnimeSummary,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    let href = format!("/animes/{}", anime.id);
    let image = anime.image.unwrap_or_default();
    let synopsis = anime.synopsis.unwrap_or_default();

    view! {
        <div
            class="anime-card"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <a href=href>
                <img src=image alt="Image Anime" />
                <div class="anime-card-content">
                    <h3>{anime.title}</h3>
                    <p>{synopsis}</p>
                </div>
            </a>
        </div>
    }
}
