//! Browser wiring: bind the market form once and expose it to the page.

use crate::config::{
    ENDLESS_CHANGE_EVENT, ENDLESS_CHECKBOX_ID, MARKET_FORM_NAME, MAX_ROUNDS_CONTAINER_ID,
    MAX_ROUNDS_INPUT_ID, UPPER_LIMIT_DATA_ATTRIBUTE,
};
use crate::error::FormError;
use crate::helpers::MarketFormHelpers;
use crate::upper_limit::UpperLimit;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

/// Helpers bound to real page elements.
pub type BrowserFormHelpers =
    MarketFormHelpers<HtmlInputElement, HtmlInputElement, HtmlElement, HtmlFormElement>;

/// Where to find the market form's elements.
///
/// Every field defaults to what the market templates render, so pages can
/// pass `undefined` from JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormIds {
    pub endless: String,
    pub max_rounds: String,
    pub max_rounds_container: String,
    pub form_name: String,
    /// Id of a `<script type="application/json">` bootstrap element. When
    /// unset the upper limit is read from the form's data attribute.
    pub upper_limit_bootstrap: Option<String>,
}

impl Default for FormIds {
    fn default() -> Self {
        Self {
            endless: ENDLESS_CHECKBOX_ID.to_string(),
            max_rounds: MAX_ROUNDS_INPUT_ID.to_string(),
            max_rounds_container: MAX_ROUNDS_CONTAINER_ID.to_string(),
            form_name: MARKET_FORM_NAME.to_string(),
            upper_limit_bootstrap: None,
        }
    }
}

impl FormIds {
    /// Read ids handed over from JavaScript. `undefined` and `null` mean defaults.
    pub fn from_js(value: JsValue) -> Result<Self, FormError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| FormError::InvalidConfig(e.to_string()))
    }
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, FormError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FormError::MissingElement(id.to_string()))
}

fn downcast<T: JsCast>(element: Element, id: &str, expected: &'static str) -> Result<T, FormError> {
    element
        .dyn_into::<T>()
        .map_err(|_| FormError::WrongElementKind {
            id: id.to_string(),
            expected,
        })
}

fn read_upper_limit(
    document: &Document,
    form: &HtmlFormElement,
    ids: &FormIds,
) -> Result<UpperLimit, FormError> {
    match &ids.upper_limit_bootstrap {
        Some(id) => {
            let payload = element_by_id(document, id)?.text_content().unwrap_or_default();
            Ok(UpperLimit::from_bootstrap_json(&payload))
        }
        None => Ok(UpperLimit::from_attribute(
            form.get_attribute(UPPER_LIMIT_DATA_ATTRIBUTE).as_deref(),
        )),
    }
}

/// Look up every element once and bind them into helpers.
pub fn bind_document(document: &Document, ids: &FormIds) -> Result<BrowserFormHelpers, FormError> {
    let endless: HtmlInputElement = downcast(
        element_by_id(document, &ids.endless)?,
        &ids.endless,
        "HtmlInputElement",
    )?;
    let max_rounds: HtmlInputElement = downcast(
        element_by_id(document, &ids.max_rounds)?,
        &ids.max_rounds,
        "HtmlInputElement",
    )?;
    let container: HtmlElement = downcast(
        element_by_id(document, &ids.max_rounds_container)?,
        &ids.max_rounds_container,
        "HtmlElement",
    )?;
    let form: HtmlFormElement = downcast(
        document
            .forms()
            .named_item(&ids.form_name)
            .ok_or_else(|| FormError::MissingElement(ids.form_name.clone()))?,
        &ids.form_name,
        "HtmlFormElement",
    )?;

    let upper_limit = read_upper_limit(document, &form, ids)?;
    if upper_limit.is_nan() {
        warn!("Upper limit on max_rounds is not a number");
    }

    Ok(MarketFormHelpers::new(
        endless,
        max_rounds,
        container,
        form,
        upper_limit,
    ))
}

/// Bound helpers plus the checkbox listener keeping the field in sync.
///
/// Dropping the handle detaches the listener.
#[wasm_bindgen]
pub struct MarketFormHandle {
    helpers: Rc<BrowserFormHelpers>,
    endless: HtmlInputElement,
    on_change: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl MarketFormHandle {
    /// Fill in the endless placeholder and submit.
    #[wasm_bindgen(js_name = submitForm)]
    pub fn submit_form(&self) -> Result<(), JsValue> {
        self.helpers.handle_submit_intent().map_err(Into::into)
    }

    #[wasm_bindgen(js_name = adjustMaxRoundsField)]
    pub fn adjust_max_rounds_field(&self) -> Result<(), JsValue> {
        self.helpers.handle_endless_toggle().map_err(Into::into)
    }

    #[wasm_bindgen(getter, js_name = upperLimit)]
    pub fn upper_limit(&self) -> f64 {
        self.helpers
            .upper_limit()
            .value()
            .map(|v| v as f64)
            .unwrap_or(f64::NAN)
    }
}

impl MarketFormHandle {
    pub fn helpers(&self) -> &BrowserFormHelpers {
        &self.helpers
    }
}

impl Drop for MarketFormHandle {
    fn drop(&mut self) {
        let _ = self.endless.remove_event_listener_with_callback(
            ENDLESS_CHANGE_EVENT,
            self.on_change.as_ref().unchecked_ref(),
        );
    }
}

/// Bind the form, sync the field with the initial checkbox state and keep it
/// in sync on every change.
pub fn install(document: &Document, ids: &FormIds) -> Result<MarketFormHandle, FormError> {
    let helpers = Rc::new(bind_document(document, ids)?);
    helpers.handle_endless_toggle()?;

    let on_change: Closure<dyn FnMut()> = Closure::new({
        let helpers = helpers.clone();
        move || {
            if let Err(e) = helpers.handle_endless_toggle() {
                warn!("Could not adjust max_rounds field: {}", e);
            }
        }
    });

    let endless = helpers.endless().clone();
    endless.add_event_listener_with_callback(
        ENDLESS_CHANGE_EVENT,
        on_change.as_ref().unchecked_ref(),
    )?;

    info!("Market form helpers installed on '{}'", ids.form_name);

    Ok(MarketFormHandle {
        helpers,
        endless,
        on_change,
    })
}

/// JavaScript entry point used by the create and edit market pages.
#[wasm_bindgen(js_name = installMarketFormHelpers)]
pub fn install_market_form_helpers(ids: JsValue) -> Result<MarketFormHandle, JsValue> {
    let ids = FormIds::from_js(ids)?;
    install(&gloo_utils::document(), &ids).map_err(Into::into)
}
