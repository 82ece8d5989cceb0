//! Rating Form
//!
//! Submits `#ratingForm` as soon as a rating radio is picked.

use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::console;
use crate::dom;

const TAG: &str = "RATING";

const FORM_ID: &str = "ratingForm";
const RATING_INPUTS: &str = "input[name=\"selectedRating\"]";

pub fn mount() -> bool {
    let Some(form) = dom::by_id::<HtmlFormElement>(FORM_ID) else {
        return false;
    };
    for input in dom::query_all_in::<HtmlInputElement>(&form, RATING_INPUTS) {
        let form = form.clone();
        dom::on(&input, "change", move |_| {
            if let Err(err) = form.submit() {
                console::error(TAG, &format!("Failed to submit rating: {:?}", err));
            }
        });
    }
    true
}
