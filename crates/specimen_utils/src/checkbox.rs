//! Accessor over checkbox field data.

use specimen_types::{CheckboxData, CheckboxSpec, HasOptionId, OptionId, OptionSpec, OptionValue};
use tracing::debug;

use crate::choice;

/// Wraps a checkbox spec and its data. Checked entries keep the order in
/// which they were checked.
pub struct CheckboxField<'a> {
    spec: &'a CheckboxSpec,
    data: &'a mut CheckboxData,
}

impl<'a> CheckboxField<'a> {
    pub fn new(spec: &'a CheckboxSpec, data: &'a mut CheckboxData) -> Self {
        let mut field = Self { spec, data };

        if field.data.value.is_empty() {
            if let Some(default) = spec.default.as_deref() {
                debug!("Applying default check '{}'", default);
                field.check(default);
            }
        }

        field
    }

    pub fn spec(&self) -> &'a CheckboxSpec {
        self.spec
    }

    pub fn data(&self) -> &CheckboxData {
        &*self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.value.is_empty()
    }

    pub fn is_checked<I: HasOptionId + ?Sized>(&self, id: &I) -> bool {
        id.option_id()
            .is_some_and(|id| choice::value_index(&self.data.value, id).is_some())
    }

    /// Check the option named by `id`; a no-op when already checked.
    pub fn check<I: HasOptionId + ?Sized>(&mut self, id: &I) -> Option<&'a OptionSpec> {
        let id = id.option_id()?;
        let Some(option) = self.option(id) else {
            debug!("Check ignored, no option '{}'", id);
            return None;
        };

        if !self.is_checked(id) {
            self.data
                .value
                .push(OptionValue::new(id, option.value.clone()));
        }

        Some(option)
    }

    pub fn uncheck<I: HasOptionId + ?Sized>(&mut self, id: &I) -> Option<&'a OptionSpec> {
        let id = id.option_id()?;
        let idx = choice::value_index(&self.data.value, id)?;
        self.data.value.remove(idx);
        self.option(id)
    }

    /// Flip the checked state of `id`. Returns the new state.
    pub fn toggle<I: HasOptionId + ?Sized>(&mut self, id: &I) -> bool {
        if self.is_checked(id) {
            self.uncheck(id);
            false
        } else {
            self.check(id).is_some()
        }
    }

    pub fn option<I: HasOptionId + ?Sized>(&self, id: &I) -> Option<&'a OptionSpec> {
        let spec = self.spec;
        self.option_index(id).map(|idx| &spec.options[idx])
    }

    pub fn option_index<I: HasOptionId + ?Sized>(&self, id: &I) -> Option<usize> {
        choice::option_index(&self.spec.options, id.option_id()?)
    }

    pub fn value<I: HasOptionId + ?Sized>(&self, id: &I) -> Option<&OptionValue> {
        self.value_index(id).map(|idx| &self.data.value[idx])
    }

    pub fn value_index<I: HasOptionId + ?Sized>(&self, id: &I) -> Option<usize> {
        choice::value_index(&self.data.value, id.option_id()?)
    }

    pub fn checked(&self) -> Vec<OptionValue> {
        self.data.value.to_vec()
    }

    pub fn checked_ids(&self) -> Vec<OptionId> {
        choice::ids(&self.data.value)
    }
}
