//! Watchlist Toggle
//!
//! Heart button on the anime page. Its `red` class mirrors the server-side
//! watchlist membership and is only changed after a successful response.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::task::spawn_local;
use web_sys::HtmlElement;

use crate::api;
use crate::console;
use crate::dom;

const TAG: &str = "WATCHLIST";

const BUTTON_SELECTOR: &str = ".heart-button";
const MARKED_CLASS: &str = "red";

/// What a click should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// No session, go log in
    Redirect,
    Add,
    Remove,
    /// A request is already in flight
    Ignore,
}

/// Marked flag plus an in-flight guard against double submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeartState {
    marked: bool,
    in_flight: bool,
    toggled: bool,
}

impl HeartState {
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    #[cfg(test)]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Initial membership lookup; ignored once a toggle has been issued
    pub fn load(&mut self, marked: bool) {
        if !self.toggled {
            self.marked = marked;
        }
    }

    pub fn click(&mut self, has_session: bool) -> ToggleAction {
        if !has_session {
            return ToggleAction::Redirect;
        }
        if self.in_flight {
            return ToggleAction::Ignore;
        }
        self.in_flight = true;
        self.toggled = true;
        if self.marked {
            ToggleAction::Remove
        } else {
            ToggleAction::Add
        }
    }

    /// Request finished; only a success changes the mark
    pub fn complete(&mut self, action: ToggleAction, ok: bool) {
        self.in_flight = false;
        if ok {
            match action {
                ToggleAction::Add => self.marked = true,
                ToggleAction::Remove => self.marked = false,
                ToggleAction::Redirect | ToggleAction::Ignore => {}
            }
        }
    }
}

fn render(button: &HtmlElement, state: &HeartState) {
    if let Err(err) = button.class_list().toggle_with_force(MARKED_CLASS, state.is_marked()) {
        console::error(TAG, &format!("Failed to update heart button: {:?}", err));
    }
}

fn redirect_to_login(login_path: &str) {
    let Some(win) = web_sys::window() else { return };
    if let Err(err) = win.location().set_href(login_path) {
        console::error(TAG, &format!("Failed to redirect to login: {:?}", err));
    }
}

/// Bind the heart button if the page has one
pub fn mount(login_path: &str) -> bool {
    let Some(button) = dom::query_one::<HtmlElement>(BUTTON_SELECTOR) else {
        return false;
    };
    let Some(anime_id) = dom::data_attr(&button, "anime-id") else {
        console::warn(TAG, "Heart button has no data-anime-id");
        return false;
    };
    let user_id = dom::data_attr(&button, "user-id");
    let state = Rc::new(RefCell::new(HeartState::default()));

    if let Some(user_id) = user_id.clone() {
        let button = button.clone();
        let state = state.clone();
        let anime_id = anime_id.clone();
        spawn_local(async move {
            match api::is_in_watchlist(&user_id, &anime_id).await {
                Ok(marked) => {
                    state.borrow_mut().load(marked);
                    render(&button, &state.borrow());
                }
                Err(err) => console::error(TAG, &format!("Failed to read watchlist state: {}", err)),
            }
        });
    }

    let login_path = login_path.to_string();
    let target = button.clone();
    dom::on(&button, "click", move |_| {
        let action = state.borrow_mut().click(user_id.is_some());
        let user_id = match (action, &user_id) {
            (ToggleAction::Redirect, _) | (_, None) => {
                redirect_to_login(&login_path);
                return;
            }
            (ToggleAction::Ignore, _) => {
                console::debug(TAG, "Request already in flight, ignoring click");
                return;
            }
            (_, Some(user_id)) => user_id.clone(),
        };

        let button = target.clone();
        let state = state.clone();
        let anime_id = anime_id.clone();
        spawn_local(async move {
            let result = match action {
                ToggleAction::Remove => api::remove_anime(&user_id, &anime_id).await,
                _ => api::add_anime(&user_id, &anime_id).await,
            };
            match &result {
                Ok(()) if action == ToggleAction::Remove => console::info(TAG, "Anime removed from watchlist"),
                Ok(()) => console::info(TAG, "Anime added to watchlist"),
                Err(err) if action == ToggleAction::Remove => {
                    console::error(TAG, &format!("Failed to remove anime from watchlist: {}", err))
                }
                Err(err) => console::error(TAG, &format!("Failed to add anime to watchlist: {}", err)),
            }
            state.borrow_mut().complete(action, result.is_ok());
            render(&button, &state.borrow());
        });
    });

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_click_redirects() {
        let mut state = HeartState::default();
        assert_eq!(state.click(false), ToggleAction::Redirect);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn click_follows_the_mark() {
        let mut state = HeartState::default();
        assert_eq!(state.click(true), ToggleAction::Add);
        state.complete(ToggleAction::Add, true);
        assert!(state.is_marked());

        assert_eq!(state.click(true), ToggleAction::Remove);
        state.complete(ToggleAction::Remove, true);
        assert!(!state.is_marked());
    }

    #[test]
    fn failure_leaves_the_mark() {
        let mut state = HeartState::default();
        state.load(true);
        let action = state.click(true);
        assert_eq!(action, ToggleAction::Remove);
        state.complete(action, false);
        assert!(state.is_marked());
        assert!(!state.is_in_flight());
    }

    #[test]
    fn second_click_while_pending_is_ignored() {
        let mut state = HeartState::default();
        let first = state.click(true);
        assert_eq!(first, ToggleAction::Add);
        assert_eq!(state.click(true), ToggleAction::Ignore);
        state.complete(first, true);
        assert!(state.is_marked());
        assert_eq!(state.click(true), ToggleAction::Remove);
    }

    #[test]
    fn mark_equals_last_completed_success() {
        let mut state = HeartState::default();
        let outcomes = [true, true, false, true, false, false, true];
        let mut expected = false;
        for ok in outcomes {
            let action = state.click(true);
            state.complete(action, ok);
            if ok {
                expected = action == ToggleAction::Add;
            }
            assert_eq!(state.is_marked(), expected);
        }
    }

    #[test]
    fn late_lookup_does_not_override_a_toggle() {
        let mut state = HeartState::default();
        let action = state.click(true);
        state.complete(action, true);
        state.load(false);
        assert!(state.is_marked());
    }
}
