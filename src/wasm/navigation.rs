use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::dom;
use super::listener::EventListener;
use crate::config::{classes, ids, NavConfig};
use crate::error::UiError;
use crate::nav;

/// Navbar elevation, mobile menu toggle and smooth in-page links.
pub struct Navigation {
    _listeners: Vec<EventListener>,
}

pub fn init(config: &NavConfig) -> Result<Navigation, UiError> {
    let window = dom::window()?;
    let navbar = dom::by_id(ids::NAVBAR)?;
    let menu_btn = dom::by_id(ids::MOBILE_MENU_BTN)?;
    let menu = dom::by_id(ids::MOBILE_MENU)?;

    let mut listeners = Vec::new();

    let threshold = config.elevate_after;
    let scroll_window = window.clone();
    listeners.push(EventListener::new(&window, "scroll", move |_| {
        let y = scroll_window.scroll_y().unwrap_or(0.0);
        let list = navbar.class_list();
        let _ = if nav::is_elevated(y, threshold) {
            list.add_1(classes::ELEVATED)
        } else {
            list.remove_1(classes::ELEVATED)
        };
    })?);

    listeners.push(EventListener::new(&menu_btn, "click", move |_| {
        let _ = menu.class_list().toggle(classes::HIDDEN);
    })?);

    for anchor in dom::query_all(r##"a[href^="#"]"##)? {
        let link = anchor.clone();
        listeners.push(EventListener::new(&anchor, "click", move |e| {
            e.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = nav::fragment_selector(&href) else {
                return;
            };
            let target = dom::document()
                .ok()
                .and_then(|d| d.query_selector(selector).ok().flatten());
            if let Some(target) = target {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        })?);
    }

    log::info!("navigation wired ({} listeners)", listeners.len());
    Ok(Navigation {
        _listeners: listeners,
    })
}
