//! Accessor over select field data.

use specimen_types::{HasOptionId, OptionId, OptionSpec, OptionValue, SelectData, SelectSpec};
use tracing::debug;

use crate::choice;

/// Wraps a select spec and its data, mutating the data in place.
///
/// ```rust
/// use specimen_types::{OptionSpec, SelectData, SelectSpec};
/// use specimen_utils::SelectField;
///
/// let spec = SelectSpec::new("Size")
///     .with_option(OptionSpec::new("s", "Small"))
///     .with_option(OptionSpec::new("m", "Medium"));
/// let mut data = SelectData::default();
///
/// let mut field = SelectField::new(&spec, &mut data);
/// field.select("m");
/// assert!(field.is_selected("m"));
/// assert_eq!(field.selected_ids(), vec!["m".to_string()]);
/// ```
pub struct SelectField<'a> {
    spec: &'a SelectSpec,
    data: &'a mut SelectData,
}

impl<'a> SelectField<'a> {
    /// Wrap `data`, applying the spec default when nothing is selected yet.
    pub fn new(spec: &'a SelectSpec, data: &'a mut SelectData) -> Self {
        let mut field = Self { spec, data };

        if field.data.value.is_empty() {
            if let Some(default) = spec.default.as_deref() {
                debug!("Applying default selection '{}'", default);
                field.select(default);
            }
        }

        field
    }

    pub fn spec(&self) -> &'a SelectSpec {
        self.spec
    }

    pub fn data(&self) -> &SelectData {
        &*self.data
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.data.value.is_empty()
    }

    pub fn is_selected<I: HasOptionId + ?Sized>(&self, id: &I) -> bool {
        id.option_id()
            .is_some_and(|id| choice::value_index(&self.data.value, id).is_some())
    }

    /// Select the option named by `id`.
    ///
    /// Single-select specs replace the current selection, multiple ones append.
    /// Selecting an already selected option changes nothing. Returns the
    /// option, or `None` when the spec has no such option.
    pub fn select<I: HasOptionId + ?Sized>(&mut self, id: &I) -> Option<&'a OptionSpec> {
        let id = id.option_id()?;
        let Some(option) = self.option(id) else {
            debug!("Select ignored, no option '{}'", id);
            return None;
        };

        if !self.is_selected(id) {
            let entry = OptionValue::new(id, option.value.clone());
            if self.spec.multiple {
                self.data.value.push(entry);
            } else {
                self.data.value = vec![entry];
            }
        }

        Some(option)
    }

    /// Remove `id` from the selection. Returns the option when something was removed.
    pub fn unselect<I: HasOptionId + ?Sized>(&mut self, id: &I) -> Option<&'a OptionSpec> {
        let id = id.option_id()?;
        let idx = choice::value_index(&self.data.value, id)?;
        self.data.value.remove(idx);
        self.option(id)
    }

    pub fn option<I: HasOptionId + ?Sized>(&self, id: &I) -> Option<&'a OptionSpec> {
        let spec = self.spec;
        self.option_index(id).map(|idx| &spec.options[idx])
    }

    /// Position of the option in the spec, `None` when unknown.
    pub fn option_index<I: HasOptionId + ?Sized>(&self, id: &I) -> Option<usize> {
        choice::option_index(&self.spec.options, id.option_id()?)
    }

    pub fn value<I: HasOptionId + ?Sized>(&self, id: &I) -> Option<&OptionValue> {
        self.value_index(id).map(|idx| &self.data.value[idx])
    }

    /// Position of the entry in the current selection, `None` when not selected.
    pub fn value_index<I: HasOptionId + ?Sized>(&self, id: &I) -> Option<usize> {
        choice::value_index(&self.data.value, id.option_id()?)
    }

    pub fn selected(&self) -> Vec<OptionValue> {
        self.data.value.to_vec()
    }

    pub fn selected_ids(&self) -> Vec<OptionId> {
        choice::ids(&self.data.value)
    }
}
