//! Form helpers for the market create and edit pages.
//!
//! Both pages share the same two behaviors:
//! - before submitting, an endless market gets a placeholder `max_rounds`
//!   so server-side validation passes;
//! - the `max_rounds` field is hidden while the market is endless.

use crate::config::{ENDLESS_MAX_ROUNDS_SENTINEL, VISIBILITY_CLEARED, VISIBILITY_HIDDEN};
use crate::dom::{EndlessFlag, FieldContainer, MaxRoundsInput, SubmitTarget};
use crate::error::FormError;
use crate::upper_limit::UpperLimit;
use log::{debug, info};

/// Hide `container` when the market is endless, otherwise clear the override.
///
/// Shared by every page that shows the `max_rounds` field.
pub fn adjust_max_rounds_visibility<F, C>(endless: &F, container: &C) -> Result<(), FormError>
where
    F: EndlessFlag + ?Sized,
    C: FieldContainer + ?Sized,
{
    if endless.is_checked() {
        container.set_visibility(VISIBILITY_HIDDEN)
    } else {
        container.set_visibility(VISIBILITY_CLEARED)
    }
}

/// The four page elements plus the server-supplied upper limit, bound once.
pub struct MarketFormHelpers<F, I, C, S> {
    endless: F,
    max_rounds: I,
    container: C,
    form: S,
    upper_limit: UpperLimit,
}

impl<F, I, C, S> MarketFormHelpers<F, I, C, S>
where
    F: EndlessFlag,
    I: MaxRoundsInput,
    C: FieldContainer,
    S: SubmitTarget,
{
    pub fn new(endless: F, max_rounds: I, container: C, form: S, upper_limit: UpperLimit) -> Self {
        Self {
            endless,
            max_rounds,
            container,
            form,
            upper_limit,
        }
    }

    pub fn endless(&self) -> &F {
        &self.endless
    }

    pub fn upper_limit(&self) -> UpperLimit {
        self.upper_limit
    }

    /// Fill in the sentinel for endless markets, then submit the form.
    ///
    /// The form is submitted whether or not the market is endless.
    pub fn handle_submit_intent(&self) -> Result<(), FormError> {
        if self.endless.is_checked() {
            let sentinel = ENDLESS_MAX_ROUNDS_SENTINEL.to_string();
            debug!(
                "Endless market: replacing max_rounds '{}' with {}",
                self.max_rounds.value(),
                sentinel
            );
            self.max_rounds.set_value(&sentinel);
        }
        info!("Submitting market form");
        self.form.submit()
    }

    /// Sync the `max_rounds` container with the endless checkbox.
    pub fn handle_endless_toggle(&self) -> Result<(), FormError> {
        // Read but not used for branching.
        debug!("Upper limit on max_rounds: {}", self.upper_limit);
        adjust_max_rounds_visibility(&self.endless, &self.container)
    }
}


#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::*;

    fn helpers<'a>(
        endless: &'a FakeCheckbox,
        input: &'a FakeInput,
        container: &'a FakeContainer,
        form: &'a FakeForm,
    ) -> MarketFormHelpers<&'a FakeCheckbox, &'a FakeInput, &'a FakeContainer, &'a FakeForm> {
        MarketFormHelpers::new(endless, input, container, form, UpperLimit::Value(100))
    }

    #[test]
    fn submit_keeps_value_for_finite_market() {
        let endless = FakeCheckbox::new(false);
        let input = FakeInput::new("10");
        let container = FakeContainer::default();
        let form = FakeForm::default();

        helpers(&endless, &input, &container, &form)
            .handle_submit_intent()
            .unwrap();

        assert_eq!(input.value(), "10");
        assert_eq!(form.submissions.get(), 1);
    }

    #[test]
    fn submit_fills_sentinel_for_endless_market() {
        let endless = FakeCheckbox::new(true);
        let input = FakeInput::new("");
        let container = FakeContainer::default();
        let form = FakeForm::default();

        helpers(&endless, &input, &container, &form)
            .handle_submit_intent()
            .unwrap();

        assert_eq!(input.value(), "15");
        assert_eq!(form.submissions.get(), 1);
    }

    #[test]
    fn submit_overwrites_any_existing_value_when_endless() {
        let endless = FakeCheckbox::new(true);
        let input = FakeInput::new("9000");
        let container = FakeContainer::default();
        let form = FakeForm::default();

        helpers(&endless, &input, &container, &form)
            .handle_submit_intent()
            .unwrap();

        assert_eq!(input.value(), "15");
    }

    #[test]
    fn submit_error_is_propagated_after_filling() {
        let endless = FakeCheckbox::new(true);
        let input = FakeInput::new("");
        let container = FakeContainer::default();
        let form = FakeForm::default();
        *form.fail_with.borrow_mut() = Some("blocked".into());

        let result = helpers(&endless, &input, &container, &form).handle_submit_intent();

        assert_eq!(result, Err(FormError::Js("blocked".into())));
        assert_eq!(input.value(), "15");
        assert_eq!(form.submissions.get(), 1);
    }

    #[test]
    fn submit_does_not_touch_visibility() {
        let endless = FakeCheckbox::new(true);
        let input = FakeInput::new("");
        let container = FakeContainer::default();
        let form = FakeForm::default();

        helpers(&endless, &input, &container, &form)
            .handle_submit_intent()
            .unwrap();

        assert_eq!(container.visibility(), "");
    }

    #[test]
    fn toggle_hides_container_when_endless() {
        let endless = FakeCheckbox::new(true);
        let input = FakeInput::default();
        let container = FakeContainer::default();
        let form = FakeForm::default();

        helpers(&endless, &input, &container, &form)
            .handle_endless_toggle()
            .unwrap();

        assert_eq!(container.visibility(), "hidden");
        assert_eq!(form.submissions.get(), 0);
    }

    #[test]
    fn toggle_clears_override_when_finite() {
        let endless = FakeCheckbox::new(false);
        let input = FakeInput::default();
        let container = FakeContainer::default();
        *container.visibility.borrow_mut() = "hidden".into();
        let form = FakeForm::default();

        helpers(&endless, &input, &container, &form)
            .handle_endless_toggle()
            .unwrap();

        assert_eq!(container.visibility(), "");
    }

    #[test]
    fn toggle_follows_checkbox_changes() {
        let endless = FakeCheckbox::new(false);
        let input = FakeInput::default();
        let container = FakeContainer::default();
        let form = FakeForm::default();
        let helpers = helpers(&endless, &input, &container, &form);

        for checked in [true, false, true, true, false] {
            endless.checked.set(checked);
            helpers.handle_endless_toggle().unwrap();
            let expected = if checked { "hidden" } else { "" };
            assert_eq!(container.visibility(), expected);
        }
    }

    #[test]
    fn toggle_is_idempotent() {
        for checked in [true, false] {
            let endless = FakeCheckbox::new(checked);
            let input = FakeInput::default();
            let container = FakeContainer::default();
            let form = FakeForm::default();
            let helpers = helpers(&endless, &input, &container, &form);

            helpers.handle_endless_toggle().unwrap();
            let once = container.visibility();
            helpers.handle_endless_toggle().unwrap();

            assert_eq!(container.visibility(), once);
        }
    }

    #[test]
    fn upper_limit_does_not_change_outcomes() {
        for limit in [UpperLimit::Value(100), UpperLimit::Value(3), UpperLimit::NotANumber] {
            let endless = FakeCheckbox::new(true);
            let input = FakeInput::new("");
            let container = FakeContainer::default();
            let form = FakeForm::default();
            let helpers = MarketFormHelpers::new(&endless, &input, &container, &form, limit);

            helpers.handle_endless_toggle().unwrap();
            helpers.handle_submit_intent().unwrap();

            assert_eq!(helpers.upper_limit(), limit);
            assert_eq!(container.visibility(), "hidden");
            assert_eq!(input.value(), "15");
        }
    }

    #[test]
    fn shared_toggle_works_on_bare_elements() {
        let endless = FakeCheckbox::new(true);
        let container = FakeContainer::default();

        adjust_max_rounds_visibility(&endless, &container).unwrap();
        assert_eq!(container.visibility(), "hidden");

        endless.checked.set(false);
        adjust_max_rounds_visibility(&endless, &container).unwrap();
        assert_eq!(container.visibility(), "");
    }
}
