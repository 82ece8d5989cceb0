//! Kitsu Catalogue Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod console;
mod dom;
mod error;
mod models;
mod pager;
mod store;
mod truncate;

fn main() {
    console_error_panic_hook::set_once();
    app::boot();
}
