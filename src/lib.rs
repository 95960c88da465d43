#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Visual behavior for the portfolio page: navbar state, entrance and hover
//! tweens, the skills radar chart, the particle backdrop, the hero typewriter,
//! scroll reveals and click ripples.
//!
//! Everything that does not touch the DOM builds on the host so it can be
//! tested with plain `cargo test`.

pub mod chart;
pub mod config;
pub mod easing;
pub mod error;
pub mod nav;
pub mod particles;
pub mod tween;
pub mod typewriter;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod animate;
    pub mod app;
    pub mod chart;
    pub mod dom;
    pub mod entrance;
    pub mod listener;
    mod logger;
    pub mod navigation;
    pub mod particles;
    pub mod reveal;
    pub mod ripple;
    pub mod timer;
    pub mod typing;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        logger::init(log::LevelFilter::Info);
        Ok(())
    }

    /// Wire every page behavior. Waits for `DOMContentLoaded` if the document is
    /// still parsing.
    #[wasm_bindgen]
    pub fn mount() -> Result<(), JsValue> {
        app::mount()?;
        Ok(())
    }

    /// Stop every timer, frame loop, observer and listener the page owns.
    #[wasm_bindgen]
    pub fn teardown() {
        app::unmount();
    }
}
