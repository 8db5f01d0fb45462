//! Select command - Select or unselect options of a select field.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use specimen_types::{OptionValue, SelectData, SelectSpec};
use specimen_utils::SelectField;

use super::{document, FieldArgs};

#[derive(Args)]
pub struct SelectArgs {
    #[command(flatten)]
    pub field: FieldArgs,

    /// Option ids to select, in order
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Option ids to unselect, applied after selecting
    #[arg(long = "unselect", value_name = "ID")]
    pub unselect: Vec<String>,

    /// Write the updated data back to the data document
    #[arg(short, long)]
    pub write: bool,
}

pub fn execute(args: SelectArgs) -> Result<()> {
    print!("{}", run(&args)?);
    Ok(())
}

pub fn run(args: &SelectArgs) -> Result<String> {
    info!("Select field: {}", args.field.spec.display());

    let spec: SelectSpec = document::load(&args.field.spec).context("Failed to load spec")?;
    let mut data: SelectData =
        document::load_or_default(&args.field.data).context("Failed to load data")?;

    let selected = {
        let mut field = SelectField::new(&spec, &mut data);
        for id in &args.select {
            if field.select(id).is_none() {
                warn!("No option '{}' in {}", id, spec.meta.title);
            }
        }
        for id in &args.unselect {
            field.unselect(id);
        }
        field.selected()
    };

    if args.write {
        document::save(&args.field.data, &data)?;
    }

    Ok(render_values(&selected))
}

/// One `id = value` line per entry.
pub fn render_values(values: &[OptionValue]) -> String {
    values
        .iter()
        .map(|entry| format!("{} = {}\n", entry.id, entry.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_spec(dir: &std::path::Path, multiple: bool) -> std::path::PathBuf {
        let path = dir.join("spec.yaml");
        fs::write(
            &path,
            format!(
                "title: Size\nmultiple: {}\noptions:\n  - {{ id: s, name: Small, value: S }}\n  - {{ id: m, name: Medium, value: M }}\n",
                multiple
            ),
        )
        .unwrap();
        path
    }

    #[test]
    fn test_select_and_write() {
        let temp = tempdir().unwrap();
        let spec = write_spec(temp.path(), true);
        let data = temp.path().join("data.json");

        let args = SelectArgs {
            field: FieldArgs {
                spec,
                data: data.clone(),
            },
            select: vec!["s".to_string(), "m".to_string(), "x".to_string()],
            unselect: vec!["s".to_string()],
            write: true,
        };

        let output = run(&args).unwrap();
        assert_eq!(output, "m = \"M\"\n");

        let saved: SelectData = document::load(&data).unwrap();
        assert_eq!(saved.value, vec![OptionValue::new("m", "M")]);
    }

    #[test]
    fn test_single_select_without_write() {
        let temp = tempdir().unwrap();
        let spec = write_spec(temp.path(), false);
        let data = temp.path().join("data.yaml");

        let args = SelectArgs {
            field: FieldArgs {
                spec,
                data: data.clone(),
            },
            select: vec!["s".to_string(), "m".to_string()],
            unselect: Vec::new(),
            write: false,
        };

        assert_eq!(run(&args).unwrap(), "m = \"M\"\n");
        assert!(!data.exists());
    }
}
