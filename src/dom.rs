//! DOM Helpers
//!
//! Lookups and listener wiring against the server-rendered markup.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement};

use crate::console;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Element by id, cast to the requested type
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// First element matching `selector`, cast to the requested type
pub fn query_one<T: JsCast>(selector: &str) -> Option<T> {
    document()?.query_selector(selector).ok()??.dyn_into::<T>().ok()
}

/// All elements matching `selector` in document order
pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    match document().and_then(|doc| doc.query_selector_all(selector).ok()) {
        Some(list) => collect_nodes(&list),
        None => Vec::new(),
    }
}

/// All descendants of `root` matching `selector`
pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    match root.query_selector_all(selector) {
        Ok(list) => collect_nodes(&list),
        Err(_) => Vec::new(),
    }
}

fn collect_nodes<T: JsCast>(list: &web_sys::NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Value of `data-{name}`, `None` when missing or blank
pub fn data_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", name))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Current value of a form control (`<input>`, `<select>` or `<textarea>`) by id
pub fn field_value(id: &str) -> String {
    let Some(el) = by_id::<Element>(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        return select.value();
    }
    if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

pub fn set_visible(el: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    if let Err(err) = el.style().set_property("display", display) {
        console::error("DOM", &format!("Failed to set display: {:?}", err));
    }
}

/// Attach a listener that lives as long as the page
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        console::error("DOM", &format!("Failed to bind '{}' listener: {:?}", event, err));
    }
    closure.forget();
}

/// The element an event was dispatched on
pub fn event_element(ev: &web_sys::Event) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

/// CSS attribute selector for a value read from markup
pub fn attr_selector(base: &str, attr: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("{}[{}=\"{}\"]", base, attr, escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_selector_quotes_value() {
        assert_eq!(
            attr_selector(".comment", "data-comment-id", "42"),
            r#".comment[data-comment-id="42"]"#
        );
    }

    #[test]
    fn attr_selector_escapes_quotes() {
        assert_eq!(
            attr_selector(".comment", "data-comment-id", r#"4"2"#),
            r#".comment[data-comment-id="4\"2"]"#
        );
    }
}
