//! Datetime command - Set, reformat and check a datetime field.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use specimen_types::{DatetimeData, DatetimeSpec};
use specimen_utils::DatetimeField;

use super::{document, FieldArgs};

#[derive(Args)]
pub struct DatetimeArgs {
    #[command(flatten)]
    pub field: FieldArgs,

    /// New value, read with --input-format
    #[arg(long, value_name = "VALUE")]
    pub set: Option<String>,

    /// Format of --set; defaults to the spec's
    #[arg(long, value_name = "FORMAT", requires = "set")]
    pub input_format: Option<String>,

    /// Output format; defaults to the spec's
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Write the updated data back to the data document
    #[arg(short, long)]
    pub write: bool,
}

pub fn execute(args: DatetimeArgs) -> Result<()> {
    print!("{}", run(&args)?);
    Ok(())
}

pub fn run(args: &DatetimeArgs) -> Result<String> {
    info!("Datetime field: {}", args.field.spec.display());

    let spec: DatetimeSpec = document::load(&args.field.spec).context("Failed to load spec")?;
    let mut data: DatetimeData =
        document::load_or_default(&args.field.data).context("Failed to load data")?;

    let output = {
        let mut field = DatetimeField::new(&spec, &mut data)?;

        if let Some(value) = &args.set {
            let format = args.input_format.as_deref().unwrap_or(&spec.format);
            field.set(&DatetimeData::from_value(value.as_str(), format))?;
        }

        let mut output = match &args.format {
            Some(format) => field.format(format),
            None => field.to_string(),
        };
        if field.is_disabled() {
            output.push_str(" (disabled)");
        }
        output.push('\n');
        output
    };

    if args.write {
        document::save(&args.field.data, &data)?;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use specimen_utils::UtilsError;
    use tempfile::tempdir;

    fn setup() -> (tempfile::TempDir, FieldArgs) {
        let temp = tempdir().unwrap();
        let spec = temp.path().join("spec.yaml");
        fs::write(
            &spec,
            "title: Delivery\nformat: DD/MM/YYYY\ndisabled: [weekend]\n",
        )
        .unwrap();

        let data = temp.path().join("data.json");
        fs::write(&data, r#"{ "iso": "2023-10-23T00:00:00.000Z" }"#).unwrap();

        (temp, FieldArgs { spec, data })
    }

    #[test]
    fn test_reformat_stored_value() {
        let (_temp, field) = setup();
        let args = DatetimeArgs {
            field,
            set: None,
            input_format: None,
            format: Some("dddd D MMMM".to_string()),
            write: false,
        };
        assert_eq!(run(&args).unwrap(), "Monday 23 October\n");
    }

    #[test]
    fn test_set_and_write() {
        let (_temp, field) = setup();
        let data_path = field.data.clone();
        let args = DatetimeArgs {
            field,
            set: Some("2023-10-28".to_string()),
            input_format: Some("YYYY-MM-DD".to_string()),
            format: None,
            write: true,
        };
        assert_eq!(run(&args).unwrap(), "28/10/2023 (disabled)\n");

        let saved: DatetimeData = document::load(&data_path).unwrap();
        assert_eq!(saved.iso.as_deref(), Some("2023-10-28T00:00:00.000Z"));
        assert_eq!(saved.value.as_deref(), Some("28/10/2023"));
        assert_eq!(saved.format.as_deref(), Some("DD/MM/YYYY"));
    }

    #[test]
    fn test_bad_value_is_value_error() {
        let (_temp, field) = setup();
        let args = DatetimeArgs {
            field,
            set: Some("31/02/2023".to_string()),
            input_format: None,
            format: None,
            write: false,
        };

        let err = run(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UtilsError>(),
            Some(UtilsError::DateParse { .. })
        ));
    }
}
