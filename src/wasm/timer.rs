use wasm_bindgen::{closure::Closure, JsCast};

use super::dom;
use crate::error::UiError;

/// A pending `setTimeout`. Dropping it cancels the callback if it has not run yet.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(delay_ms: u32, f: F) -> Result<Self, UiError>
    where
        F: FnOnce() + 'static,
    {
        let callback = Closure::once(f);
        let id = dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Ok(w) = dom::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}
