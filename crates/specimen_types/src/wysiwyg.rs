//! Rich-text field records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::SpecMeta;

/// Node type of a text leaf.
pub const TEXT_NODE: &str = "text";

/// Node type of a tree root.
pub const ROOT_NODE: &str = "root";

/// One node of a rich-text tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WysiwygNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, alias = "block")]
    pub is_block: bool,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<WysiwygNode>,
}

impl WysiwygNode {
    /// A block-level root holding `nodes`.
    pub fn root(nodes: Vec<WysiwygNode>) -> Self {
        Self::element(ROOT_NODE, true, nodes)
    }

    /// An inline text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            node_type: TEXT_NODE.to_string(),
            text: Some(text.into()),
            is_block: false,
            data: Value::Null,
            nodes: Vec::new(),
        }
    }

    pub fn element(node_type: impl Into<String>, is_block: bool, nodes: Vec<WysiwygNode>) -> Self {
        Self {
            node_type: node_type.into(),
            text: None,
            is_block,
            data: Value::Null,
            nodes,
        }
    }

    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = data.into();
        self
    }

    pub fn is_text(&self) -> bool {
        self.node_type == TEXT_NODE
    }
}

impl Default for WysiwygNode {
    fn default() -> Self {
        Self::root(Vec::new())
    }
}

/// Current value of a rich-text field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WysiwygData {
    #[serde(default)]
    pub value: WysiwygNode,
}

impl WysiwygData {
    pub fn new(root: WysiwygNode) -> Self {
        Self { value: root }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TypoEditorSpec {
    #[serde(default)]
    pub style: Value,
}

/// Toolbar button of a typographic style.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TypoButtonSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub style: Value,
}

/// A typographic style offered by the editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TypoSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub style: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<TypoButtonSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<TypoEditorSpec>,
}

/// Spec of a rich-text field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WysiwygSpec {
    #[serde(flatten)]
    pub meta: SpecMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(default)]
    pub frontspec: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub typo: BTreeMap<String, TypoSpec>,
}

impl WysiwygSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            meta: SpecMeta::new(title),
            ..Default::default()
        }
    }
}
