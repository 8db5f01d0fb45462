//! Lookups shared by select and checkbox accessors.

use specimen_types::{OptionSpec, OptionValue};

/// Position of the option named `id`.
pub(crate) fn option_index(options: &[OptionSpec], id: &str) -> Option<usize> {
    options.iter().position(|option| option.matches(id))
}

/// Position of the value entry named `id`.
pub(crate) fn value_index(values: &[OptionValue], id: &str) -> Option<usize> {
    values.iter().position(|value| value.id == id)
}

pub(crate) fn ids(values: &[OptionValue]) -> Vec<String> {
    values.iter().map(|item| item.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_index() {
        let options = vec![OptionSpec::new("a", "A"), OptionSpec::new("b", "B")];
        assert_eq!(option_index(&options, "b"), Some(1));
        assert_eq!(option_index(&options, "c"), None);
    }

    #[test]
    fn test_value_index() {
        let values = vec![OptionValue::new("x", 1)];
        assert_eq!(value_index(&values, "x"), Some(0));
        assert_eq!(value_index(&values, "y"), None);
    }
}
