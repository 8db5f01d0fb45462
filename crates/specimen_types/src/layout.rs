//! Layout, spaces and page records.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::spec::SpecMeta;

/// A named grid layout, e.g. `{ id: "halves", layout: "1 2" }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutRef {
    pub id: String,
    pub layout: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutSpec {
    #[serde(flatten)]
    pub meta: SpecMeta,
    #[serde(default)]
    pub layouts: Vec<LayoutRef>,
    /// Whether free-form layouts are allowed besides `layouts`.
    #[serde(default)]
    pub custom: bool,
}

impl LayoutSpec {
    pub fn layout(&self, id: &str) -> Option<&LayoutRef> {
        self.layouts.iter().find(|layout| layout.id == id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LayoutData {
    pub layout: LayoutRef,
    #[serde(default)]
    pub media: BTreeMap<String, LayoutRef>,
    #[serde(default)]
    pub cells: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub frontspec: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}

impl LayoutData {
    /// Layout active for `media`, falling back to the base layout.
    pub fn layout_for(&self, media: &str) -> &LayoutRef {
        self.media.get(media).unwrap_or(&self.layout)
    }
}

/// A spacing amount given either as CSS text (`"20px"`) or a bare number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SpaceValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpacesMediaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<SpaceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<SpaceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<SpaceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<SpaceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<SpaceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<SpaceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<SpaceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<SpaceValue>,
}

impl SpacesMediaData {
    pub fn is_empty(&self) -> bool {
        [
            &self.padding_top,
            &self.padding_right,
            &self.padding_bottom,
            &self.padding_left,
            &self.margin_top,
            &self.margin_right,
            &self.margin_bottom,
            &self.margin_left,
        ]
        .iter()
        .all(|side| side.is_none())
    }
}

/// Spacing values keyed by media name or raw media query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpacesData {
    #[serde(default)]
    pub media: BTreeMap<String, SpacesMediaData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpacesOptionSpec {
    pub id: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpacesSpec {
    #[serde(flatten)]
    pub meta: SpecMeta,
    #[serde(default)]
    pub options: Vec<SpacesOptionSpec>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageNodeType {
    #[default]
    Root,
    Container,
    Component,
}

/// A node of a page tree; children are keyed by their uid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(rename = "type")]
    pub node_type: PageNodeType,
    #[serde(default, deserialize_with = "node_map")]
    pub nodes: BTreeMap<String, PageNode>,
}

/// Deserialize child nodes given either keyed by uid or as a list.
///
/// Listed nodes are keyed by their `uid`, or by their position when they
/// have none.
fn node_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, PageNode>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNodes {
        Map(BTreeMap<String, PageNode>),
        List(Vec<PageNode>),
    }

    Ok(match RawNodes::deserialize(deserializer)? {
        RawNodes::Map(nodes) => nodes,
        RawNodes::List(nodes) => nodes
            .into_iter()
            .enumerate()
            .map(|(idx, node)| (node.uid.clone().unwrap_or_else(|| idx.to_string()), node))
            .collect(),
    })
}

impl PageNode {
    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.nodes
            .values()
            .map(|node| 1 + node.descendant_count())
            .sum()
    }
}

/// Slug of a page: one path or one per locale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PageSlug {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<PageSlug>,
    #[serde(rename = "type", default)]
    pub node_type: PageNodeType,
    pub layout: String,
    #[serde(default, deserialize_with = "node_map")]
    pub nodes: BTreeMap<String, PageNode>,
}

impl Page {
    pub fn slugs(&self) -> Vec<&str> {
        match &self.slug {
            None => Vec::new(),
            Some(PageSlug::One(slug)) => vec![slug.as_str()],
            Some(PageSlug::Many(slugs)) => slugs.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spaces_accept_text_and_numbers() {
        let data: SpacesData = serde_json::from_value(json!({
            "media": {
                "mobile": { "paddingRight": 20 },
                "(max-width: 799px)": { "paddingTop": "20px" }
            }
        }))
        .unwrap();

        assert_eq!(
            data.media["mobile"].padding_right,
            Some(SpaceValue::Number(20.0))
        );
        assert_eq!(
            data.media["(max-width: 799px)"].padding_top,
            Some(SpaceValue::Text("20px".to_string()))
        );
        assert!(!data.media["mobile"].is_empty());
        assert!(SpacesMediaData::default().is_empty());
    }

    #[test]
    fn test_page_tree() {
        let page: Page = serde_json::from_value(json!({
            "uid": "home",
            "type": "root",
            "layout": "default",
            "slug": ["/", "/fr"],
            "nodes": {
                "c1": { "type": "container", "nodes": {
                    "x1": { "type": "component", "nodes": {} }
                }}
            }
        }))
        .unwrap();

        assert_eq!(page.slugs(), vec!["/", "/fr"]);
        assert_eq!(page.nodes["c1"].node_type, PageNodeType::Container);
        assert_eq!(page.nodes["c1"].descendant_count(), 1);
    }

    #[test]
    fn test_page_nodes_as_list() {
        let page: Page = serde_json::from_value(json!({
            "uid": "home",
            "layout": "default",
            "nodes": [
                { "uid": "c1", "type": "container", "nodes": [
                    { "type": "component" },
                    { "uid": "x2", "type": "component" }
                ]},
                { "type": "component" }
            ]
        }))
        .unwrap();

        assert_eq!(page.nodes.len(), 2);
        let container = &page.nodes["c1"];
        assert_eq!(container.node_type, PageNodeType::Container);
        assert!(container.nodes.contains_key("0"));
        assert!(container.nodes.contains_key("x2"));
        assert_eq!(page.nodes["1"].node_type, PageNodeType::Component);
        assert_eq!(container.descendant_count(), 2);
    }

    #[test]
    fn test_layout_for_media() {
        let data: LayoutData = serde_json::from_value(json!({
            "layout": { "id": "thirds", "layout": "1 2 3" },
            "media": { "mobile": { "id": "stack", "layout": "1 _ 2 _ 3" } },
            "cells": ["a", "b", "c"]
        }))
        .unwrap();

        assert_eq!(data.layout_for("mobile").id, "stack");
        assert_eq!(data.layout_for("desktop").id, "thirds");
    }
}
