//! Rich-text tree serialization.

use specimen_types::{WysiwygData, WysiwygNode, WysiwygSpec};

/// One node handed to a render generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorNode<'n> {
    pub node_type: &'n str,
    pub is_block: bool,
    /// Text of a text leaf, or the concatenated output of the children.
    pub content: String,
}

/// Wraps a rich-text spec and its data.
pub struct WysiwygField<'a> {
    spec: &'a WysiwygSpec,
    data: &'a WysiwygData,
}

impl<'a> WysiwygField<'a> {
    pub fn new(spec: &'a WysiwygSpec, data: &'a WysiwygData) -> Self {
        Self { spec, data }
    }

    pub fn spec(&self) -> &'a WysiwygSpec {
        self.spec
    }

    pub fn data(&self) -> &'a WysiwygData {
        self.data
    }

    /// Serialize the tree depth first, children before parents.
    ///
    /// `generator` is called once per node and its return value becomes the
    /// node's contribution to the parent. The root's output is returned.
    /// No escaping is applied here.
    ///
    /// ```rust
    /// use specimen_types::{WysiwygData, WysiwygNode, WysiwygSpec};
    /// use specimen_utils::WysiwygField;
    ///
    /// let spec = WysiwygSpec::default();
    /// let data = WysiwygData::new(WysiwygNode::root(vec![
    ///     WysiwygNode::text("a"),
    ///     WysiwygNode::text("b"),
    /// ]));
    ///
    /// let html = WysiwygField::new(&spec, &data).render(|node| {
    ///     if node.is_block {
    ///         format!("<p>{}</p>", node.content)
    ///     } else {
    ///         node.content
    ///     }
    /// });
    /// assert_eq!(html, "<p>ab</p>");
    /// ```
    pub fn render<G>(&self, mut generator: G) -> String
    where
        G: FnMut(GeneratorNode<'_>) -> String,
    {
        render_node(&self.data.value, &mut generator)
    }

    /// Concatenated text of every leaf.
    pub fn plain_text(&self) -> String {
        self.render(|node| node.content)
    }
}

fn render_node<G>(node: &WysiwygNode, generator: &mut G) -> String
where
    G: FnMut(GeneratorNode<'_>) -> String,
{
    let content = match node.text.as_deref() {
        Some(text) if node.is_text() && !text.is_empty() => text.to_string(),
        _ => {
            let mut content = String::new();
            for child in &node.nodes {
                content.push_str(&render_node(child, generator));
            }
            content
        }
    };

    generator(GeneratorNode {
        node_type: &node.node_type,
        is_block: node.is_block,
        content,
    })
}
