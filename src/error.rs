//! Error type for binding and driving the market form.

use std::fmt;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// No element with this id (or form with this name) exists on the page.
    MissingElement(String),
    /// The element exists but is not the kind the helper needs.
    WrongElementKind {
        id: String,
        expected: &'static str,
    },
    /// The ids config handed over from JavaScript could not be read.
    InvalidConfig(String),
    /// A DOM call threw.
    Js(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingElement(id) => write!(f, "No element found for '{}'", id),
            FormError::WrongElementKind { id, expected } => {
                write!(f, "Element '{}' is not a {}", id, expected)
            }
            FormError::InvalidConfig(reason) => write!(f, "Invalid form config: {}", reason),
            FormError::Js(message) => write!(f, "DOM call failed: {}", message),
        }
    }
}

impl std::error::Error for FormError {}

impl From<JsValue> for FormError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        FormError::Js(message)
    }
}

impl From<FormError> for JsValue {
    fn from(err: FormError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
