//! Advanced Search Toggle
//!
//! `#advanced-search-toggle` shows or hides the `#advanced-search` panel.

use web_sys::{Element, HtmlElement};

use crate::dom;

const TOGGLE_ID: &str = "advanced-search-toggle";
const PANEL_ID: &str = "advanced-search";

fn is_shown(panel: &HtmlElement) -> bool {
    web_sys::window()
        .and_then(|win| win.get_computed_style(panel).ok().flatten())
        .and_then(|style| style.get_property_value("display").ok())
        .map(|display| display != "none")
        .unwrap_or(true)
}

pub fn mount() -> bool {
    let (Some(toggle), Some(panel)) = (
        dom::by_id::<Element>(TOGGLE_ID),
        dom::by_id::<HtmlElement>(PANEL_ID),
    ) else {
        return false;
    };
    dom::on(&toggle, "click", move |ev| {
        ev.prevent_default();
        dom::set_visible(&panel, !is_shown(&panel));
    });
    true
}
