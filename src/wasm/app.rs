use std::cell::{Cell, RefCell};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, PageTransitionEvent};

use super::animate::Animator;
use super::chart::SkillsChart;
use super::dom;
use super::entrance::Entrance;
use super::navigation::Navigation;
use super::particles::ParticleBackground;
use super::reveal::ScrollReveal;
use super::ripple::Ripple;
use super::typing::Typing;
use super::{chart, entrance, navigation, particles, reveal, ripple, typing};
use crate::config::{ids, PortfolioConfig};
use crate::error::UiError;

thread_local! {
    static MOUNTED: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
    static HIDE_HOOKED: Cell<bool> = const { Cell::new(false) };
}

/// Every live page behavior. Dropping it tears all of them down.
pub struct Portfolio {
    animator: Animator,
    _navigation: Option<Navigation>,
    _entrance: Option<Entrance>,
    _chart: Option<SkillsChart>,
    _particles: Option<ParticleBackground>,
    _typing: Option<Typing>,
    _reveal: Option<ScrollReveal>,
    _ripple: Option<Ripple>,
}

impl Portfolio {
    /// Run each initializer in page order. One failing does not stop the rest.
    pub fn start(config: &PortfolioConfig) -> Self {
        let animator = Animator::new();
        Self {
            _navigation: settle("navigation", navigation::init(&config.nav)),
            _entrance: settle("entrance", entrance::init(&animator, &config.entrance)),
            _chart: settle("chart", chart::init(&config.chart)).flatten(),
            _particles: settle("particles", particles::init(&config.particles)).flatten(),
            _typing: settle("typing", typing::init(&config.typing)).flatten(),
            _reveal: settle("reveal", reveal::init(&config.reveal)),
            _ripple: settle("ripple", ripple::init(&animator, &config.ripple)),
            animator,
        }
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.animator.shutdown();
    }
}

fn settle<T>(step: &str, result: Result<T, UiError>) -> Option<T> {
    result
        .map_err(|e| log::error!("{step} not started: {e}"))
        .ok()
}

/// Page-supplied overrides from `<script type="application/json" id="fx-config">`.
fn page_config() -> PortfolioConfig {
    let src = dom::optional_by_id(ids::FX_CONFIG)
        .ok()
        .flatten()
        .and_then(|el| el.text_content());
    match src.map(|s| PortfolioConfig::from_json(&s)) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::error!("ignoring #{}: {e}", ids::FX_CONFIG);
            PortfolioConfig::default()
        }
        None => PortfolioConfig::default(),
    }
}

/// The old instance is gone before the new one reads the page, so restored
/// text and disposed charts are what the new one sees.
fn install() {
    unmount();
    let portfolio = Portfolio::start(&page_config());
    MOUNTED.with(|m| *m.borrow_mut() = Some(portfolio));
}

/// Tear down on a real unload. A page entering the back/forward cache keeps
/// its effects for when it is shown again.
fn hook_pagehide(window: &web_sys::Window) -> Result<(), UiError> {
    if HIDE_HOOKED.with(Cell::get) {
        return Ok(());
    }
    let on_hide = Closure::wrap(Box::new(|e: Event| {
        let persisted = e
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        if !persisted {
            unmount();
        }
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())?;
    on_hide.forget();
    HIDE_HOOKED.with(|h| h.set(true));
    Ok(())
}

pub fn mount() -> Result<(), UiError> {
    let window = dom::window()?;
    let document = dom::document()?;
    hook_pagehide(&window)?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once(install);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        install();
    }
    Ok(())
}

pub fn unmount() {
    let previous = MOUNTED.with(|m| m.borrow_mut().take());
    if previous.is_some() {
        log::info!("tearing down page effects");
    }
    drop(previous);
}
