use super::animate::Animator;
use super::dom;
use super::listener::EventListener;
use crate::config::{classes, EntranceConfig};
use crate::error::UiError;
use crate::tween::{stagger, Property, Track, Tween};

/// Staggered card entrance plus hover scaling on skill items.
pub struct Entrance {
    _hover: Vec<EventListener>,
}

pub fn init(animator: &Animator, config: &EntranceConfig) -> Result<Entrance, UiError> {
    let cards = dom::query_all(&format!(".{}", classes::CARD))?;
    for (i, card) in cards.iter().enumerate() {
        let tween = Tween::new(config.card_duration_ms)
            .easing(config.card_easing)
            .delay(stagger(i, config.card_stagger_ms))
            .track(Track::values(Property::TranslateY, &[config.card_offset_px, 0.0]))
            .track(Track::values(Property::Opacity, &[0.0, 1.0]));
        animator.animate(card, &tween, None)?;
    }

    let hover = |scale: f64| {
        Tween::new(config.hover_duration_ms)
            .easing(config.hover_easing)
            .track(Track::to(Property::Scale, scale))
    };

    let mut listeners = Vec::new();
    for item in dom::query_all(&format!(".{}", classes::SKILL_ITEM))? {
        for (kind, tween) in [("mouseenter", hover(config.hover_scale)), ("mouseleave", hover(1.0))] {
            let animator = animator.clone();
            let target = item.clone();
            listeners.push(EventListener::new(&item, kind, move |_| {
                if let Err(e) = animator.animate(&target, &tween, None) {
                    log::warn!("skill hover: {e}");
                }
            })?);
        }
    }

    log::info!(
        "entrance: {} cards, {} hover listeners",
        cards.len(),
        listeners.len()
    );
    Ok(Entrance { _hover: listeners })
}
