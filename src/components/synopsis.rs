//! Synopsis Toggle
//!
//! Shortens long `.slide-synopsis` texts on the home page and turns the
//! slide's details link into a show more / show less switch.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::SiteConfig;
use crate::dom;
use crate::truncate::{SynopsisToggle, Truncated};

const SLIDE_SELECTOR: &str = ".slide";
const SYNOPSIS_SELECTOR: &str = ".slide-synopsis";
const DETAILS_LINK_SELECTOR: &str = ".slide-details-link";

fn label<'a>(toggle: &SynopsisToggle, config: &'a SiteConfig) -> &'a str {
    if toggle.is_expanded() {
        &config.collapse_label
    } else {
        &config.details_label
    }
}

fn bind_slide(slide: &Element, config: &SiteConfig) -> bool {
    let Some(synopsis) = slide
        .query_selector(SYNOPSIS_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    let Some(truncated) = Truncated::split(&synopsis.inner_text(), config.synopsis_limit) else {
        return false;
    };

    let toggle = SynopsisToggle::new(truncated);
    synopsis.set_inner_text(&toggle.text());

    let Some(link) = slide.query_selector(DETAILS_LINK_SELECTOR).ok().flatten() else {
        return true;
    };

    let toggle = Rc::new(RefCell::new(toggle));
    let config = config.clone();
    let target = link.clone();
    dom::on(&link, "click", move |ev| {
        ev.prevent_default();
        let mut toggle = toggle.borrow_mut();
        toggle.toggle();
        synopsis.set_inner_text(&toggle.text());
        target.set_text_content(Some(label(&toggle, &config)));
    });
    true
}

/// Truncate every long synopsis; returns how many were shortened
pub fn mount(config: &SiteConfig) -> usize {
    dom::query_all::<Element>(SLIDE_SELECTOR)
        .iter()
        .filter(|slide| bind_slide(slide, config))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_state() {
        let config = SiteConfig::default();
        let text = "x".repeat(120);
        let mut toggle = SynopsisToggle::new(Truncated::split(&text, 100).unwrap());
        assert_eq!(label(&toggle, &config), "Details >>");
        toggle.toggle();
        assert_eq!(label(&toggle, &config), "<< Collapse");
        toggle.toggle();
        assert_eq!(label(&toggle, &config), "Details >>");
    }
}
