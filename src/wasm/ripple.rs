use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use super::animate::{Animator, OnComplete};
use super::dom;
use super::listener::EventListener;
use crate::config::{classes, RippleConfig};
use crate::error::UiError;
use crate::tween::{Property, Track, Tween};

/// Click ripple on skill items, delegated from the document.
pub struct Ripple {
    _click: EventListener,
}

pub fn init(animator: &Animator, config: &RippleConfig) -> Result<Ripple, UiError> {
    let tween = Tween::new(config.duration_ms)
        .easing(config.easing)
        .track(Track::values(Property::Opacity, &config.opacity))
        .track(Track::values(Property::Scale, &config.scale));
    let animator = animator.clone();
    let selector = format!(".{}", classes::SKILL_ITEM);

    let document = dom::document()?;
    let click = EventListener::new(&document, "click", move |e: Event| {
        let Some(item) = dom::closest(e.target(), &selector) else {
            return;
        };
        if let Err(e) = spawn(&animator, &item, &tween) {
            log::warn!("ripple: {e}");
        }
    })?;

    Ok(Ripple { _click: click })
}

/// Append one overlay to `item` and animate it out of existence.
fn spawn(animator: &Animator, item: &HtmlElement, tween: &Tween) -> Result<(), UiError> {
    let overlay: HtmlElement = dom::document()?
        .create_element("div")?
        .dyn_into()
        .map_err(|_| UiError::NoHost("div element"))?;
    overlay.set_class_name(classes::RIPPLE);
    item.style().set_property("position", "relative")?;
    item.append_child(&overlay)?;

    let done: OnComplete = {
        let animator = animator.clone();
        let overlay = overlay.clone();
        Box::new(move || {
            animator.release(&overlay);
            overlay.remove();
        })
    };
    animator.animate(&overlay, tween, Some(done))
}
