use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use super::timer::Timeout;
use crate::config::{classes, RevealConfig};
use crate::error::UiError;

/// Card reveal on first intersection plus the one-time badge bounce stagger.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
    _badges: Vec<Timeout>,
}

pub fn init(config: &RevealConfig) -> Result<ScrollReveal, UiError> {
    let callback = Closure::wrap(Box::new(|entries: Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(classes::REVEALED);
            }
        }
    }) as Box<dyn FnMut(Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let cards = dom::query_all(&format!(".{}", classes::CARD))?;
    for card in &cards {
        observer.observe(card);
    }

    let badges = dom::query_all(&format!(".{}", classes::BADGE))?
        .into_iter()
        .enumerate()
        .map(|(i, badge)| {
            let delay = u32::try_from(i)
                .unwrap_or(u32::MAX)
                .saturating_mul(config.badge_stagger_ms);
            Timeout::new(delay, move || {
                let _ = badge.class_list().add_1(classes::BOUNCE);
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "scroll reveal: observing {} cards, {} badges queued",
        cards.len(),
        badges.len()
    );
    Ok(ScrollReveal {
        observer,
        _callback: callback,
        _badges: badges,
    })
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
