//! The four page elements the helpers touch, as narrow capabilities.
//!
//! Handlers are written against these traits so they can be driven by
//! `web-sys` elements in the browser and by plain fakes in unit tests.

use crate::error::FormError;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement};

/// The "endless" checkbox.
pub trait EndlessFlag {
    fn is_checked(&self) -> bool;
}

/// The numeric `max_rounds` input.
pub trait MaxRoundsInput {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// The wrapper around the `max_rounds` field.
pub trait FieldContainer {
    /// Current inline `visibility` style, empty when no override is set.
    fn visibility(&self) -> String;
    fn set_visibility(&self, value: &str) -> Result<(), FormError>;
}

/// The enclosing form.
pub trait SubmitTarget {
    fn submit(&self) -> Result<(), FormError>;
}

impl EndlessFlag for HtmlInputElement {
    fn is_checked(&self) -> bool {
        self.checked()
    }
}

impl MaxRoundsInput for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }

    fn set_value(&self, value: &str) {
        HtmlInputElement::set_value(self, value);
    }
}

impl FieldContainer for HtmlElement {
    fn visibility(&self) -> String {
        self.style()
            .get_property_value("visibility")
            .unwrap_or_default()
    }

    fn set_visibility(&self, value: &str) -> Result<(), FormError> {
        // An empty value removes the inline override.
        self.style().set_property("visibility", value)?;
        Ok(())
    }
}

impl SubmitTarget for HtmlFormElement {
    fn submit(&self) -> Result<(), FormError> {
        HtmlFormElement::submit(self)?;
        Ok(())
    }
}

impl<T: EndlessFlag + ?Sized> EndlessFlag for &T {
    fn is_checked(&self) -> bool {
        (**self).is_checked()
    }
}

impl<T: MaxRoundsInput + ?Sized> MaxRoundsInput for &T {
    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&self, value: &str) {
        (**self).set_value(value)
    }
}

impl<T: FieldContainer + ?Sized> FieldContainer for &T {
    fn visibility(&self) -> String {
        (**self).visibility()
    }

    fn set_visibility(&self, value: &str) -> Result<(), FormError> {
        (**self).set_visibility(value)
    }
}

impl<T: SubmitTarget + ?Sized> SubmitTarget for &T {
    fn submit(&self) -> Result<(), FormError> {
        (**self).submit()
    }
}
