//! Wysiwyg command - Render a rich-text field as HTML.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use specimen_types::{WysiwygData, WysiwygSpec};
use specimen_utils::{GeneratorNode, WysiwygField};

use super::{document, FieldArgs};

#[derive(Args)]
pub struct WysiwygArgs {
    #[command(flatten)]
    pub field: FieldArgs,

    /// Print plain text instead of HTML
    #[arg(long)]
    pub text: bool,
}

pub fn execute(args: WysiwygArgs) -> Result<()> {
    print!("{}", run(&args)?);
    Ok(())
}

pub fn run(args: &WysiwygArgs) -> Result<String> {
    info!("Wysiwyg field: {}", args.field.spec.display());

    let spec: WysiwygSpec = document::load(&args.field.spec).context("Failed to load spec")?;
    let data: WysiwygData =
        document::load_or_default(&args.field.data).context("Failed to load data")?;

    let field = WysiwygField::new(&spec, &data);
    let output = if args.text {
        field.plain_text()
    } else {
        field.render(html_node)
    };

    Ok(output + "\n")
}

/// Tag used for a node type, `None` for nodes rendered without a wrapper.
fn tag_for(node_type: &str, is_block: bool) -> Option<&str> {
    match node_type {
        "root" | "text" => None,
        "paragraph" | "p" => Some("p"),
        "bold" | "strong" => Some("strong"),
        "italic" | "em" => Some("em"),
        "underline" | "u" => Some("u"),
        "code" => Some("code"),
        "quote" | "blockquote" => Some("blockquote"),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(node_type),
        _ if is_block => Some("div"),
        _ => Some("span"),
    }
}

/// HTML generator: escapes text leaves and wraps every other node in a tag.
fn html_node(node: GeneratorNode<'_>) -> String {
    if node.node_type == "text" {
        return html_escape::encode_text(&node.content).into_owned();
    }

    match tag_for(node.node_type, node.is_block) {
        Some(tag) => format!("<{tag}>{}</{tag}>", node.content),
        None => node.content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_html_node() {
        let text = GeneratorNode {
            node_type: "text",
            is_block: false,
            content: "a < b & c".to_string(),
        };
        assert_eq!(html_node(text), "a &lt; b &amp; c");

        let heading = GeneratorNode {
            node_type: "h2",
            is_block: true,
            content: "Title".to_string(),
        };
        assert_eq!(html_node(heading), "<h2>Title</h2>");

        let unknown = GeneratorNode {
            node_type: "mention",
            is_block: false,
            content: "@bob".to_string(),
        };
        assert_eq!(html_node(unknown), "<span>@bob</span>");
    }

    #[test]
    fn test_render_document() {
        let temp = tempdir().unwrap();
        let spec = temp.path().join("spec.yaml");
        fs::write(&spec, "title: Body\nfrontspec: true\n").unwrap();

        let data = temp.path().join("data.yaml");
        fs::write(
            &data,
            r#"
value:
  type: root
  isBlock: true
  nodes:
    - type: paragraph
      isBlock: true
      nodes:
        - type: text
          text: "Fish & "
        - type: bold
          nodes:
            - type: text
              text: chips
"#,
        )
        .unwrap();

        let html = run(&WysiwygArgs {
            field: FieldArgs {
                spec: spec.clone(),
                data: data.clone(),
            },
            text: false,
        })
        .unwrap();
        assert_eq!(html, "<p>Fish &amp; <strong>chips</strong></p>\n");

        let text = run(&WysiwygArgs {
            field: FieldArgs { spec, data },
            text: true,
        })
        .unwrap();
        assert_eq!(text, "Fish & chips\n");
    }
}
