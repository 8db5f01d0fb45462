//! # specimen_utils
//!
//! Accessors over Specimen field data.
//!
//! Each accessor pairs a spec borrowed from `specimen_types` with the data
//! record of one field instance and mutates that record in place:
//!
//! - [`SelectField`] and [`CheckboxField`]: option selection by id
//! - [`ColorField`]: decodes a color once and re-encodes it in any [`ColorFormat`]
//! - [`DatetimeField`]: keeps a parsed instant and the data's `iso`/`value` in step
//! - [`WysiwygField`]: serializes a rich-text tree through a caller generator
//!
//! Color and date handling go through the [`ColorCodec`] and [`DateFormatter`]
//! traits; [`CssColorCodec`] and [`TokenFormatter`] are the defaults.
//!
//! ## Example
//!
//! ```rust
//! use specimen_types::{ColorData, ColorFormat, ColorSpec};
//! use specimen_utils::ColorField;
//!
//! let spec = ColorSpec::new("Accent", ColorFormat::Rgb);
//! let mut data = ColorData::from_value("#ff8000");
//!
//! let color = ColorField::new(&spec, &mut data).unwrap();
//! assert_eq!(color.to_string(), "rgb(255,128,0)");
//! ```
//!
//! [`ColorFormat`]: specimen_types::ColorFormat

pub mod checkbox;
mod choice;
pub mod codec;
pub mod color;
pub mod datetime;
pub mod error;
pub mod formatter;
pub mod select;
pub mod wysiwyg;

pub use checkbox::CheckboxField;
pub use codec::{ColorChannels, ColorCodec, CssColorCodec};
pub use color::ColorField;
pub use datetime::{parse_iso, to_iso, DatetimeField};
pub use error::{UtilsError, UtilsResult};
pub use formatter::{DateFormatter, TokenFormatter};
pub use select::SelectField;
pub use wysiwyg::{GeneratorNode, WysiwygField};
