//! Client-side helpers for the market create and edit forms.
//!
//! The pages load this crate as WebAssembly and call
//! `installMarketFormHelpers()`, which binds the endless checkbox, the
//! `max_rounds` input and its container, and the form itself. From then on
//! the `max_rounds` field is hidden while the market is endless, and
//! `submitForm()` fills in a placeholder round count before submitting.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod dom;
pub mod error;
pub mod helpers;
pub mod page;
pub mod upper_limit;

pub use error::FormError;
pub use helpers::{adjust_max_rounds_visibility, MarketFormHelpers};
pub use page::{bind_document, install, FormIds, MarketFormHandle};
pub use upper_limit::UpperLimit;

#[wasm_bindgen(start)]
pub fn start() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
}
