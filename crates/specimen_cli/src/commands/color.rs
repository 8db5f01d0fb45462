//! Color command - Print a color field in any format.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use specimen_types::{ColorData, ColorFormat, ColorSpec};
use specimen_utils::ColorField;

use super::{document, FieldArgs};

#[derive(Args)]
pub struct ColorArgs {
    #[command(flatten)]
    pub field: FieldArgs,

    /// Output format (hex, hexa, hsl, hsla, rgb, rgba); defaults to the spec's
    #[arg(short, long)]
    pub format: Option<ColorFormat>,

    /// Print the color in every format
    #[arg(long, conflicts_with = "format")]
    pub all: bool,

    /// Write the completed channel values back to the data document
    #[arg(short, long)]
    pub write: bool,
}

pub fn execute(args: ColorArgs) -> Result<()> {
    print!("{}", run(&args)?);
    Ok(())
}

pub fn run(args: &ColorArgs) -> Result<String> {
    info!("Color field: {}", args.field.spec.display());

    let spec: ColorSpec = document::load(&args.field.spec).context("Failed to load spec")?;
    let mut data: ColorData =
        document::load_or_default(&args.field.data).context("Failed to load data")?;

    let output = {
        let color = ColorField::new(&spec, &mut data)?;
        if args.all {
            ColorFormat::ALL
                .iter()
                .map(|format| format!("{} {}\n", format, color.format(*format)))
                .collect::<String>()
        } else {
            format!("{}\n", color.format(args.format.unwrap_or(spec.format)))
        }
    };

    if args.write {
        document::save(&args.field.data, &data)?;
    }

    Ok(output)
}
