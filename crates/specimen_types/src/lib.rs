//! # specimen_types
//!
//! Spec and data records for Specimen form fields.
//!
//! A *spec* is the static configuration of a field (title, kind-specific
//! parameters such as select options or a datetime format). A *data* record
//! holds the current value of one field instance. Both are plain serde types
//! owned by the caller; behavior lives in `specimen_utils`.
//!
//! ## Field kinds
//!
//! - **Choice**: [`SelectSpec`], [`CheckboxSpec`] and their option/value entries
//! - **Scalar**: boolean, switch, integer, number, string
//! - **Color** and **Datetime**: formatted values with decoded companions
//! - **Rich text**: [`WysiwygNode`] trees
//! - **Media**: image, video, link, responsive media queries
//! - **Structure**: layout, spaces, page trees
//!
//! ## Example
//!
//! ```rust
//! use specimen_types::{parse_document, DocumentFormat, FieldSpec, SpecType};
//!
//! let spec: FieldSpec = parse_document(
//!     r#"{ "type": "Select", "title": "Size", "options": ["s", "m", "l"] }"#,
//!     DocumentFormat::Json,
//! )
//! .unwrap();
//!
//! assert_eq!(spec.spec_type(), SpecType::Select);
//! ```

pub mod color;
pub mod datetime;
pub mod document;
pub mod error;
pub mod layout;
pub mod media;
pub mod options;
pub mod scalar;
pub mod select;
pub mod spec;
pub mod wysiwyg;

pub use color::{ColorData, ColorFormat, ColorSpec};
pub use datetime::{DatetimeData, DatetimeSpec, DisabledDate, DEFAULT_DATETIME_FORMAT};
pub use document::{parse_document, render_document, DocumentFormat};
pub use error::{TypesError, TypesResult};
pub use layout::{
    LayoutData, LayoutRef, LayoutSpec, Page, PageNode, PageNodeType, PageSlug, SpaceValue,
    SpacesData, SpacesMediaData, SpacesOptionSpec, SpacesSpec,
};
pub use media::{
    ImageData, ImageSpec, LinkData, LinkSpec, Media, MediaAction, MediaQuery, VideoData, VideoSpec,
};
pub use options::{
    CheckboxOptionSpec, CheckboxValue, HasOptionId, OptionId, OptionSpec, OptionValue,
    SelectOptionSpec, SelectValue,
};
pub use scalar::{
    BooleanData, BooleanSpec, IntegerData, IntegerSpec, NumberData, NumberSpec, StringData,
    StringSpec, SwitchData, SwitchSpec,
};
pub use select::{CheckboxData, CheckboxSpec, SelectData, SelectSpec};
pub use spec::{FieldSpec, SpecMeta, SpecType};
pub use wysiwyg::{TypoSpec, WysiwygData, WysiwygNode, WysiwygSpec};
