//! Watchlist Pager
//!
//! "Load more" over the server-rendered `.anime-card` list of the watchlist
//! page. The card set is captured once at mount; nothing is fetched.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlButtonElement, HtmlElement};

use crate::console;
use crate::dom;
use crate::pager::Pager;

const TAG: &str = "WATCHLIST_PAGER";

const CARD_SELECTOR: &str = ".anime-card";
const LOAD_MORE_ID: &str = "load-more";

struct WatchlistPager {
    cards: Vec<HtmlElement>,
    pager: Pager,
    load_more: HtmlButtonElement,
}

impl WatchlistPager {
    fn new(cards: Vec<HtmlElement>, page_size: usize, load_more: HtmlButtonElement) -> Self {
        let pager = Pager::new(page_size, cards.len());
        Self { cards, pager, load_more }
    }

    fn render(&self) {
        for (index, card) in self.cards.iter().enumerate() {
            dom::set_visible(card, self.pager.is_visible(index));
        }
        self.load_more.set_disabled(self.pager.is_last_page());
    }

    fn load_more(&mut self) {
        if self.pager.advance() {
            self.render();
        }
    }
}

/// Bind the pager if the page has a `#load-more` control
pub fn mount(page_size: usize) -> bool {
    let Some(button) = dom::by_id::<HtmlButtonElement>(LOAD_MORE_ID) else {
        return false;
    };
    let cards = dom::query_all::<HtmlElement>(CARD_SELECTOR);
    let pager = WatchlistPager::new(cards, page_size, button.clone());
    console::debug(
        TAG,
        &format!("{} cards over {} pages", pager.pager.total_items(), pager.pager.total_pages()),
    );
    pager.render();

    let pager = Rc::new(RefCell::new(pager));
    dom::on(&button, "click", move |_| {
        pager.borrow_mut().load_more();
    });
    true
}
