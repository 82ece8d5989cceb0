//! Console Logging
//!
//! Thin wrappers over `web_sys::console` that prefix every line with a
//! bracketed component tag, e.g. `[WATCHLIST] Anime added to watchlist`.

use std::cell::Cell;

thread_local! {
    static DEBUG: Cell<bool> = const { Cell::new(false) };
}

/// Enable or disable `debug` lines for the rest of the page lifetime
pub fn set_debug(enabled: bool) {
    DEBUG.with(|flag| flag.set(enabled));
}

fn line(tag: &str, msg: &str) -> String {
    format!("[{}] {}", tag, msg)
}

pub fn info(tag: &str, msg: &str) {
    web_sys::console::log_1(&line(tag, msg).into());
}

pub fn warn(tag: &str, msg: &str) {
    web_sys::console::warn_1(&line(tag, msg).into());
}

pub fn error(tag: &str, msg: &str) {
    web_sys::console::error_1(&line(tag, msg).into());
}

pub fn debug(tag: &str, msg: &str) {
    if DEBUG.with(|flag| flag.get()) {
        web_sys::console::debug_1(&line(tag, msg).into());
    }
}
