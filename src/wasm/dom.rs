use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoHost("window"))
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoHost("document"))
}

/// Milliseconds on the page's high-resolution clock.
pub fn now() -> Result<f64, UiError> {
    Ok(window()?
        .performance()
        .ok_or(UiError::NoHost("performance"))?
        .now())
}

/// Element that must exist for the calling component to work.
pub fn by_id(id: &'static str) -> Result<HtmlElement, UiError> {
    optional_by_id(id)?.ok_or(UiError::MissingElement(id))
}

/// Element whose absence just disables the calling component.
pub fn optional_by_id(id: &'static str) -> Result<Option<HtmlElement>, UiError> {
    document()?
        .get_element_by_id(id)
        .map(|el| {
            el.dyn_into::<HtmlElement>().map_err(|_| UiError::WrongElement {
                id,
                expected: "HtmlElement",
            })
        })
        .transpose()
}

/// All HTML elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>, UiError> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Viewport size in CSS px.
pub fn viewport() -> Result<(f64, f64), UiError> {
    let w = window()?;
    let width = w.inner_width()?.as_f64().unwrap_or(0.0);
    let height = w.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

/// Nearest ancestor-or-self of an event target matching `selector`.
pub fn closest(target: Option<web_sys::EventTarget>, selector: &str) -> Option<HtmlElement> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}
