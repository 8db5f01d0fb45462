//! Describe command - Print the kind and metadata of a spec.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use specimen_types::{FieldSpec, OptionSpec};
use specimen_utils::DatetimeField;

use super::document;

#[derive(Args)]
pub struct DescribeArgs {
    /// Spec document with a `type` key (.json, .yaml, .yml or .toml)
    #[arg(short, long)]
    pub spec: PathBuf,
}

pub fn execute(args: DescribeArgs) -> Result<()> {
    print!("{}", run(&args)?);
    Ok(())
}

pub fn run(args: &DescribeArgs) -> Result<String> {
    info!("Describing spec: {}", args.spec.display());

    let spec: FieldSpec = document::load(&args.spec).context("Failed to load spec")?;
    let meta = spec.meta();

    let mut lines = vec![format!("{} ({})", meta.title, spec.spec_type())];
    if !meta.description.is_empty() {
        lines.push(meta.description.clone());
    }
    if meta.required {
        lines.push("required".to_string());
    }

    match &spec {
        FieldSpec::Select(select) => {
            if select.multiple {
                lines.push("multiple".to_string());
            }
            lines.extend(describe_options(&select.options));
        }
        FieldSpec::Checkbox(checkbox) => lines.extend(describe_options(&checkbox.options)),
        FieldSpec::Color(color) => lines.push(format!("format: {}", color.format)),
        FieldSpec::Datetime(datetime) => {
            let mut parts = Vec::new();
            if DatetimeField::is_date_needed(&datetime.format) {
                parts.push("date");
            }
            if DatetimeField::is_time_needed(&datetime.format) {
                parts.push("time");
            }
            lines.push(format!("format: {} [{}]", datetime.format, parts.join("+")));
            if !datetime.disabled.is_empty() {
                lines.push(format!("disabled entries: {}", datetime.disabled.len()));
            }
        }
        FieldSpec::Wysiwyg(wysiwyg) => {
            if !wysiwyg.typo.is_empty() {
                let styles: Vec<&str> = wysiwyg.typo.keys().map(String::as_str).collect();
                lines.push(format!("styles: {}", styles.join(", ")));
            }
        }
        _ => {}
    }

    Ok(lines.into_iter().map(|line| line + "\n").collect())
}

fn describe_options(options: &[OptionSpec]) -> Vec<String> {
    options
        .iter()
        .map(|option| {
            format!(
                "  - {}: {}",
                option.id.as_deref().unwrap_or("?"),
                option.name
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_describe_select() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("spec.yaml");
        fs::write(
            &path,
            "type: Select\ntitle: Size\ndescription: Pick one\nrequired: true\noptions: [s, m]\n",
        )
        .unwrap();

        let output = run(&DescribeArgs { spec: path }).unwrap();
        assert_eq!(output, "Size (Select)\nPick one\nrequired\n  - s: s\n  - m: m\n");
    }

    #[test]
    fn test_describe_datetime() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("spec.json");
        fs::write(
            &path,
            r#"{ "type": "Datetime", "title": "When", "format": "DD/MM/YYYY HH:mm", "disabled": ["weekend"] }"#,
        )
        .unwrap();

        let output = run(&DescribeArgs { spec: path }).unwrap();
        assert!(output.contains("format: DD/MM/YYYY HH:mm [date+time]"));
        assert!(output.contains("disabled entries: 1"));
    }

    #[test]
    fn test_describe_untyped_spec_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("spec.json");
        fs::write(&path, r#"{ "title": "No kind" }"#).unwrap();

        assert!(run(&DescribeArgs { spec: path }).is_err());
    }
}
