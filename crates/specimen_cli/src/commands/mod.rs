//! CLI command definitions.
//!
//! Each subcommand loads a field spec and, for the accessor commands, a data
//! document, then runs one accessor over them.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod checkbox;
pub mod color;
pub mod datetime;
pub mod describe;
pub mod document;
pub mod select;
pub mod wysiwyg;

/// Specimen - form field spec and data tool
#[derive(Parser)]
#[command(name = "specimen")]
#[command(version, about = "Specimen - inspect and edit form field data")]
#[command(long_about = r#"
Specimen reads a field spec and its data document (JSON, YAML or TOML,
picked by file extension) and runs an accessor over them.

COMMANDS:
  describe  → Print the kind and metadata of a spec
  select    → Select or unselect options
  checkbox  → Check or uncheck options
  color     → Print a color in any format
  datetime  → Set, reformat and check a date
  wysiwyg   → Render a rich-text tree as HTML

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid input document
  3 - Value error (malformed color or date)
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the kind and metadata of a spec
    Describe(describe::DescribeArgs),

    /// Select or unselect options of a select field
    Select(select::SelectArgs),

    /// Check or uncheck options of a checkbox field
    Checkbox(checkbox::CheckboxArgs),

    /// Print a color field in any format
    Color(color::ColorArgs),

    /// Set, reformat and check a datetime field
    Datetime(datetime::DatetimeArgs),

    /// Render a rich-text field as HTML
    Wysiwyg(wysiwyg::WysiwygArgs),
}

/// Spec and data documents shared by the accessor commands.
#[derive(Args, Debug, Clone)]
pub struct FieldArgs {
    /// Spec document (.json, .yaml, .yml or .toml)
    #[arg(short, long)]
    pub spec: PathBuf,

    /// Data document; an empty one is assumed when the file does not exist
    #[arg(short, long)]
    pub data: PathBuf,
}
