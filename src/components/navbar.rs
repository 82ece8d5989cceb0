//! Mobile Navbar Auto-hide
//!
//! Slides `#navbar-mobile` out of view while scrolling down and brings it
//! back on any upward (or zero) scroll.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;

use crate::console;
use crate::dom;

const TAG: &str = "NAVBAR";

const NAVBAR_ID: &str = "navbar-mobile";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarPosition {
    Shown,
    Hidden,
}

impl NavbarPosition {
    fn transform(&self) -> &'static str {
        match self {
            NavbarPosition::Shown => "translateY(0)",
            NavbarPosition::Hidden => "translateY(100%)",
        }
    }
}

/// Last observed vertical offset
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn observe(&mut self, offset: f64) -> NavbarPosition {
        let position = if offset > self.last_offset {
            NavbarPosition::Hidden
        } else {
            NavbarPosition::Shown
        };
        self.last_offset = offset;
        position
    }
}

/// Bind the scroll listener if the page has a mobile navbar
pub fn mount() -> bool {
    let Some(navbar) = dom::by_id::<HtmlElement>(NAVBAR_ID) else {
        return false;
    };
    let Some(win) = web_sys::window() else {
        return false;
    };

    let tracker = Rc::new(RefCell::new(ScrollTracker::default()));
    let source = win.clone();
    dom::on(&win, "scroll", move |_| {
        let offset = source.scroll_y().unwrap_or(0.0);
        let position = tracker.borrow_mut().observe(offset);
        if let Err(err) = navbar.style().set_property("transform", position.transform()) {
            console::error(TAG, &format!("Failed to move navbar: {:?}", err));
        }
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_on_downward_scroll() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.observe(40.0), NavbarPosition::Hidden);
        assert_eq!(tracker.observe(120.0), NavbarPosition::Hidden);
    }

    #[test]
    fn shows_on_upward_or_stationary_scroll() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(300.0);
        assert_eq!(tracker.observe(250.0), NavbarPosition::Shown);
        assert_eq!(tracker.observe(250.0), NavbarPosition::Shown);
        assert_eq!(tracker.observe(260.0), NavbarPosition::Hidden);
    }

    #[test]
    fn starts_from_the_top() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.observe(0.0), NavbarPosition::Shown);
    }

    #[test]
    fn transforms() {
        assert_eq!(NavbarPosition::Hidden.transform(), "translateY(100%)");
        assert_eq!(NavbarPosition::Shown.transform(), "translateY(0)");
    }
}
