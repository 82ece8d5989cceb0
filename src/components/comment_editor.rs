//! Comment Editor
//!
//! Modal dialog for editing a comment in place, plus comment deletion.
//! Triggers are picked up by one delegated click listener, so any
//! `.edit-comment-button` / `.delete-comment-button` carrying
//! `data-comment-id` and `data-anime-id` works, including ones rendered
//! after boot on a page that had comments or triggers at boot.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Element, HtmlElement};

use crate::api;
use crate::console;
use crate::dom;

const TAG: &str = "COMMENT";

const EDIT_TRIGGER: &str = ".edit-comment-button";
const DELETE_TRIGGER: &str = ".delete-comment-button";
const COMMENT_CLASS: &str = ".comment";
const CONTENT_CLASS: &str = ".comment-content";

/// Present on any page that needs the dialog
pub const HOST_SELECTOR: &str = ".comment, .edit-comment-button, .delete-comment-button";

/// The comment a trigger refers to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentTarget {
    pub comment_id: String,
    pub anime_id: String,
}

impl CommentTarget {
    pub fn from_element(el: &Element) -> Option<Self> {
        Some(Self {
            comment_id: dom::data_attr(el, "comment-id")?,
            anime_id: dom::data_attr(el, "anime-id")?,
        })
    }

    /// The displayed `.comment` block
    fn comment_selector(&self) -> String {
        dom::attr_selector(COMMENT_CLASS, "data-comment-id", &self.comment_id)
    }

    fn content_selector(&self) -> String {
        format!("{} {}", self.comment_selector(), CONTENT_CLASS)
    }
}

fn current_text(target: &CommentTarget) -> String {
    dom::query_one::<HtmlElement>(&target.content_selector())
        .map(|el| el.inner_text())
        .unwrap_or_default()
}

fn patch_content(target: &CommentTarget, content: &str) {
    match dom::query_one::<HtmlElement>(&target.content_selector()) {
        Some(el) => el.set_inner_text(content),
        None => console::warn(TAG, &format!("Comment {} is no longer displayed", target.comment_id)),
    }
}

/// Delete on the server, then drop the comment block
pub fn delete_comment(target: CommentTarget) {
    spawn_local(async move {
        match api::delete_comment(&target.anime_id, &target.comment_id).await {
            Ok(()) => {
                if let Some(el) = dom::query_one::<Element>(&target.comment_selector()) {
                    el.remove();
                }
                console::info(TAG, "Comment deleted");
            }
            Err(err) => console::error(
                TAG,
                &format!("Failed to delete comment {}: {}", target.comment_id, err),
            ),
        }
    });
}

/// Edit dialog, mounted once per page
#[component]
pub fn CommentEditDialog() -> impl IntoView {
    let (editing, set_editing) = signal::<Option<CommentTarget>>(None);
    let (draft, set_draft) = signal(String::new());
    let (saving, set_saving) = signal(false);

    if let Some(doc) = dom::document() {
        dom::on(&doc, "click", move |ev| {
            let Some(el) = dom::event_element(&ev) else { return };

            if let Some(trigger) = el.closest(EDIT_TRIGGER).ok().flatten() {
                ev.prevent_default();
                match CommentTarget::from_element(&trigger) {
                    Some(target) => {
                        set_draft.set(current_text(&target));
                        set_editing.set(Some(target));
                    }
                    None => console::warn(TAG, "Edit button is missing its comment/anime ids"),
                }
            } else if let Some(trigger) = el.closest(DELETE_TRIGGER).ok().flatten() {
                ev.prevent_default();
                match CommentTarget::from_element(&trigger) {
                    Some(target) => delete_comment(target),
                    None => console::warn(TAG, "Delete button is missing its comment/anime ids"),
                }
            }
        });
    }

    // Failure keeps the dialog open with the draft intact
    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let Some(target) = editing.get_untracked() else { return };
        let content = draft.get_untracked();
        set_saving.set(true);

        spawn_local(async move {
            match api::update_comment(&target.anime_id, &target.comment_id, &content).await {
                Ok(()) => {
                    patch_content(&target, &content);
                    console::info(TAG, "Comment updated");
                    set_editing.update(|current| {
                        if current.as_ref() == Some(&target) {
                            *current = None;
                        }
                    });
                }
                Err(err) => console::error(
                    TAG,
                    &format!("Failed to edit comment {}: {}", target.comment_id, err),
                ),
            }
            set_saving.set(false);
        });
    };

    let close = move |_| set_editing.set(None);

    view! {
        <Show when=move || editing.get().is_some()>
            <div class="comment-dialog-overlay" on:click=close></div>
            <div class="comment-dialog" role="dialog" aria-modal="true">
                <div class="comment-dialog-header">
                    <span class="comment-dialog-title">"Edit comment"</span>
                    <button type="button" class="close-btn" on:click=close>"×"</button>
                </div>
                <textarea
                    class="comment-dialog-input"
                    name="content"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                ></textarea>
                <div class="comment-dialog-buttons">
                    <button
                        type="button"
                        class="comment-dialog-save"
                        prop:disabled=move || saving.get()
                        on:click=save
                    >
                        "Save"
                    </button>
                    <button type="button" class="comment-dialog-cancel" on:click=close>
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> CommentTarget {
        CommentTarget { comment_id: "42".into(), anime_id: "7".into() }
    }

    #[test]
    fn selects_the_displayed_comment() {
        assert_eq!(target().comment_selector(), r#".comment[data-comment-id="42"]"#);
        assert_eq!(
            target().content_selector(),
            r#".comment[data-comment-id="42"] .comment-content"#
        );
    }

    #[test]
    fn host_selector_covers_comments_and_triggers() {
        let hosts: Vec<&str> = HOST_SELECTOR.split(", ").collect();
        assert!(hosts.contains(&COMMENT_CLASS));
        assert!(hosts.contains(&EDIT_TRIGGER));
        assert!(hosts.contains(&DELETE_TRIGGER));
    }

    #[test]
    fn edit_request_for_target() {
        let t = target();
        let req = api::update_comment_request(&t.anime_id, &t.comment_id, "Great show").unwrap();
        assert_eq!(req.method, api::Method::Put);
        assert_eq!(req.path, "/api/animes/7/comments/42");
        assert_eq!(req.body.as_deref(), Some(r#"{"content":"Great show"}"#));
    }
}
