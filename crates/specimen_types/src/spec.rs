//! Common spec metadata and the tagged union over every field kind.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ColorSpec;
use crate::datetime::DatetimeSpec;
use crate::layout::{LayoutSpec, SpacesSpec};
use crate::media::{ImageSpec, LinkSpec, VideoSpec};
use crate::scalar::{BooleanSpec, IntegerSpec, NumberSpec, StringSpec, SwitchSpec};
use crate::select::{CheckboxSpec, SelectSpec};
use crate::wysiwyg::WysiwygSpec;

/// Kind of form field a spec describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SpecType {
    Boolean,
    Checkbox,
    Color,
    Datetime,
    Image,
    Integer,
    Number,
    Select,
    Spaces,
    String,
    Switch,
    Video,
    Wysiwyg,
    Layout,
    Link,
}

impl SpecType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecType::Boolean => "Boolean",
            SpecType::Checkbox => "Checkbox",
            SpecType::Color => "Color",
            SpecType::Datetime => "Datetime",
            SpecType::Image => "Image",
            SpecType::Integer => "Integer",
            SpecType::Number => "Number",
            SpecType::Select => "Select",
            SpecType::Spaces => "Spaces",
            SpecType::String => "String",
            SpecType::Switch => "Switch",
            SpecType::Video => "Video",
            SpecType::Wysiwyg => "Wysiwyg",
            SpecType::Layout => "Layout",
            SpecType::Link => "Link",
        }
    }
}

impl fmt::Display for SpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata every field spec carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    /// Whether the value may differ per media query.
    #[serde(default)]
    pub responsive: bool,
}

impl SpecMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A field spec whose kind is only known at runtime, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FieldSpec {
    Boolean(BooleanSpec),
    Checkbox(CheckboxSpec),
    Color(ColorSpec),
    Datetime(DatetimeSpec),
    Image(ImageSpec),
    Integer(IntegerSpec),
    Number(NumberSpec),
    Select(SelectSpec),
    Spaces(SpacesSpec),
    String(StringSpec),
    Switch(SwitchSpec),
    Video(VideoSpec),
    Wysiwyg(WysiwygSpec),
    Layout(LayoutSpec),
    Link(LinkSpec),
}

impl FieldSpec {
    pub fn spec_type(&self) -> SpecType {
        match self {
            FieldSpec::Boolean(_) => SpecType::Boolean,
            FieldSpec::Checkbox(_) => SpecType::Checkbox,
            FieldSpec::Color(_) => SpecType::Color,
            FieldSpec::Datetime(_) => SpecType::Datetime,
            FieldSpec::Image(_) => SpecType::Image,
            FieldSpec::Integer(_) => SpecType::Integer,
            FieldSpec::Number(_) => SpecType::Number,
            FieldSpec::Select(_) => SpecType::Select,
            FieldSpec::Spaces(_) => SpecType::Spaces,
            FieldSpec::String(_) => SpecType::String,
            FieldSpec::Switch(_) => SpecType::Switch,
            FieldSpec::Video(_) => SpecType::Video,
            FieldSpec::Wysiwyg(_) => SpecType::Wysiwyg,
            FieldSpec::Layout(_) => SpecType::Layout,
            FieldSpec::Link(_) => SpecType::Link,
        }
    }

    pub fn meta(&self) -> &SpecMeta {
        match self {
            FieldSpec::Boolean(spec) => &spec.meta,
            FieldSpec::Checkbox(spec) => &spec.meta,
            FieldSpec::Color(spec) => &spec.meta,
            FieldSpec::Datetime(spec) => &spec.meta,
            FieldSpec::Image(spec) => &spec.meta,
            FieldSpec::Integer(spec) => &spec.meta,
            FieldSpec::Number(spec) => &spec.meta,
            FieldSpec::Select(spec) => &spec.meta,
            FieldSpec::Spaces(spec) => &spec.meta,
            FieldSpec::String(spec) => &spec.meta,
            FieldSpec::Switch(spec) => &spec.meta,
            FieldSpec::Video(spec) => &spec.meta,
            FieldSpec::Wysiwyg(spec) => &spec.meta,
            FieldSpec::Layout(spec) => &spec.meta,
            FieldSpec::Link(spec) => &spec.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_spec_dispatches_on_type() {
        let spec: FieldSpec = serde_json::from_value(json!({
            "type": "Select",
            "title": "Country",
            "required": true,
            "options": [{ "id": "be", "name": "Belgium" }]
        }))
        .unwrap();

        assert_eq!(spec.spec_type(), SpecType::Select);
        assert_eq!(spec.meta().title, "Country");
        assert!(spec.meta().required);
        match spec {
            FieldSpec::Select(select) => assert_eq!(select.options.len(), 1),
            other => panic!("unexpected spec: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<FieldSpec, _> =
            serde_json::from_value(json!({ "type": "Slider", "title": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_spec_type_display() {
        assert_eq!(SpecType::Wysiwyg.to_string(), "Wysiwyg");
    }
}
