//! Color field records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypesError;
use crate::spec::SpecMeta;

/// Textual encoding of a color value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Hexa,
    Hsl,
    Hsla,
    Rgb,
    Rgba,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 6] = [
        ColorFormat::Hex,
        ColorFormat::Hexa,
        ColorFormat::Hsl,
        ColorFormat::Hsla,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Hexa => "hexa",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsla => "hsla",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
        }
    }

    /// Whether the encoding carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, ColorFormat::Hexa | ColorFormat::Hsla | ColorFormat::Rgba)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| TypesError::UnknownColorFormat(s.to_string()))
    }
}

/// Spec of a color field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColorSpec {
    #[serde(flatten)]
    pub meta: SpecMeta,
    #[serde(default)]
    pub format: ColorFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ColorSpec {
    pub fn new(title: impl Into<String>, format: ColorFormat) -> Self {
        Self {
            meta: SpecMeta::new(title),
            format,
            default: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Current value of a color field, with its decoded channels.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColorData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ColorFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hexa: Option<String>,
}

impl ColorData {
    pub fn from_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_format_from_str() {
        assert_eq!("HSLA".parse::<ColorFormat>().unwrap(), ColorFormat::Hsla);
        assert_eq!(" rgb ".parse::<ColorFormat>().unwrap(), ColorFormat::Rgb);
        assert!("cmyk".parse::<ColorFormat>().is_err());
    }

    #[test]
    fn test_color_format_alpha() {
        assert!(ColorFormat::Rgba.has_alpha());
        assert!(!ColorFormat::Hex.has_alpha());
    }

    #[test]
    fn test_color_spec_yaml() {
        let spec: ColorSpec = serde_yaml::from_str(
            "title: Background\nformat: hsla\ndefault: '#ff0000'\n",
        )
        .unwrap();
        assert_eq!(spec.format, ColorFormat::Hsla);
        assert_eq!(spec.default.as_deref(), Some("#ff0000"));
    }
}
