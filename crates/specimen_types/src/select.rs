//! Select and checkbox field records.

use serde::{Deserialize, Serialize};

use crate::options::{lenient_list, option_ref, OptionId, OptionSpec, OptionValue};
use crate::spec::SpecMeta;

/// Spec of a select field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectSpec {
    #[serde(flatten)]
    pub meta: SpecMeta,
    #[serde(default)]
    pub options: Vec<OptionSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Picking an option appends instead of replacing when set.
    #[serde(default)]
    pub multiple: bool,
    #[serde(
        default,
        deserialize_with = "option_ref",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<OptionId>,
}

impl SelectSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            meta: SpecMeta::new(title),
            ..Default::default()
        }
    }

    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn with_default(mut self, id: impl Into<OptionId>) -> Self {
        self.default = Some(id.into());
        self
    }
}

/// Current value of a select field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SelectData {
    #[serde(default, deserialize_with = "lenient_list")]
    pub value: Vec<OptionValue>,
}

/// Spec of a checkbox field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxSpec {
    #[serde(flatten)]
    pub meta: SpecMeta,
    #[serde(default)]
    pub options: Vec<OptionSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(
        default,
        deserialize_with = "option_ref",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<OptionId>,
}

impl CheckboxSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            meta: SpecMeta::new(title),
            ..Default::default()
        }
    }

    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_default(mut self, id: impl Into<OptionId>) -> Self {
        self.default = Some(id.into());
        self
    }
}

/// Current value of a checkbox field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckboxData {
    #[serde(default, deserialize_with = "lenient_list")]
    pub value: Vec<OptionValue>,
}
