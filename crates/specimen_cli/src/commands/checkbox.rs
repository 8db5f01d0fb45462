//! Checkbox command - Check or uncheck options of a checkbox field.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use specimen_types::{CheckboxData, CheckboxSpec};
use specimen_utils::CheckboxField;

use super::select::render_values;
use super::{document, FieldArgs};

#[derive(Args)]
pub struct CheckboxArgs {
    #[command(flatten)]
    pub field: FieldArgs,

    /// Option ids to check, in order
    #[arg(long = "check", value_name = "ID")]
    pub check: Vec<String>,

    /// Option ids to uncheck, applied after checking
    #[arg(long = "uncheck", value_name = "ID")]
    pub uncheck: Vec<String>,

    /// Option ids to flip, applied last
    #[arg(long = "toggle", value_name = "ID")]
    pub toggle: Vec<String>,

    /// Write the updated data back to the data document
    #[arg(short, long)]
    pub write: bool,
}

pub fn execute(args: CheckboxArgs) -> Result<()> {
    print!("{}", run(&args)?);
    Ok(())
}

pub fn run(args: &CheckboxArgs) -> Result<String> {
    info!("Checkbox field: {}", args.field.spec.display());

    let spec: CheckboxSpec = document::load(&args.field.spec).context("Failed to load spec")?;
    let mut data: CheckboxData =
        document::load_or_default(&args.field.data).context("Failed to load data")?;

    let checked = {
        let mut field = CheckboxField::new(&spec, &mut data);
        for id in &args.check {
            if field.check(id).is_none() {
                warn!("No option '{}' in {}", id, spec.meta.title);
            }
        }
        for id in &args.uncheck {
            field.uncheck(id);
        }
        for id in &args.toggle {
            field.toggle(id);
        }
        field.checked()
    };

    if args.write {
        document::save(&args.field.data, &data)?;
    }

    Ok(render_values(&checked))
}
