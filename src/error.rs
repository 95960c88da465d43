use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure while wiring a component to the page.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("element #{0} not found")]
    MissingElement(&'static str),

    #[error("element #{id} is not a {expected}")]
    WrongElement {
        id: &'static str,
        expected: &'static str,
    },

    #[error("no {0} in this context")]
    NoHost(&'static str),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(msg) => UiError::Js(msg),
            None => UiError::Js(format!("{value:?}")),
        }
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
