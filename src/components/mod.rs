//! UI Components
//!
//! One module per page behaviour. Leptos components render what this
//! crate owns (catalogue cards, comment dialog); the rest binds listeners
//! to server-rendered markup.

mod anime_card;
mod catalogue;
mod comment_editor;
pub mod advanced_search;
pub mod carousel;
pub mod navbar;
pub mod rating_form;
pub mod synopsis;
pub mod watchlist_pager;
pub mod watchlist_toggle;

pub use anime_card::AnimeCard;
pub use catalogue::{CatalogueBrowser, CONTAINER_ID as CATALOGUE_CONTAINER_ID};
pub use comment_editor::{CommentEditDialog, HOST_SELECTOR as COMMENT_HOST_SELECTOR};
