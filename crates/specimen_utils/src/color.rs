//! Accessor over color field data.

use std::fmt;

use specimen_types::{ColorData, ColorFormat, ColorSpec};
use tracing::debug;

use crate::codec::{round2, ColorChannels, ColorCodec, CssColorCodec};
use crate::error::{UtilsError, UtilsResult};

/// Wraps a color spec and its data.
///
/// Construction decodes the value once and fills the data's channel fields.
/// Fields the data already carries are kept as they are.
pub struct ColorField<'a, C: ColorCodec = CssColorCodec> {
    spec: &'a ColorSpec,
    data: &'a mut ColorData,
    channels: ColorChannels,
    codec: C,
}

impl<'a> ColorField<'a> {
    pub fn new(spec: &'a ColorSpec, data: &'a mut ColorData) -> UtilsResult<Self> {
        Self::with_codec(spec, data, CssColorCodec)
    }
}

impl<'a, C: ColorCodec> ColorField<'a, C> {
    pub fn with_codec(spec: &'a ColorSpec, data: &'a mut ColorData, codec: C) -> UtilsResult<Self> {
        if data.value.as_deref().map_or(true, str::is_empty) {
            if let Some(default) = spec.default.as_deref().filter(|v| !v.is_empty()) {
                debug!("Applying default color '{}'", default);
                data.value = Some(default.to_string());
            }
        }
        if data.format.is_none() {
            data.format = Some(spec.format);
        }

        let value = data
            .value
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(UtilsError::MissingColor)?;
        let channels = codec.decode(value)?;

        let mut field = Self {
            spec,
            data,
            channels,
            codec,
        };
        field.merge_channels();

        Ok(field)
    }

    fn merge_channels(&mut self) {
        let channels = self.channels;
        let (h, s, l) = channels.to_hsl();
        let data = &mut *self.data;

        data.r.get_or_insert(channels.r);
        data.g.get_or_insert(channels.g);
        data.b.get_or_insert(channels.b);
        data.a.get_or_insert(round2(channels.a));
        data.h.get_or_insert(round2(h));
        data.s.get_or_insert(round2(s));
        data.l.get_or_insert(round2(l));
        data.hex.get_or_insert_with(|| channels.hex());
        data.hexa.get_or_insert_with(|| channels.hexa());
    }

    pub fn spec(&self) -> &'a ColorSpec {
        self.spec
    }

    pub fn data(&self) -> &ColorData {
        &*self.data
    }

    pub fn channels(&self) -> ColorChannels {
        self.channels
    }

    /// The color encoded as `format`.
    pub fn format(&self, format: ColorFormat) -> String {
        self.codec.encode(&self.channels, format)
    }
}

impl<C: ColorCodec> fmt::Display for ColorField<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(self.spec.format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MockColorCodec;

    #[test]
    fn test_fills_channels_and_encodes() {
        let spec = ColorSpec::new("Accent", ColorFormat::Rgba);
        let mut data = ColorData::from_value("#3366ff");

        let field = ColorField::new(&spec, &mut data).unwrap();
        assert_eq!(field.to_string(), "rgba(51,102,255,1)");
        assert_eq!(field.format(ColorFormat::Hex), "#3366ff");
        assert_eq!(field.format(ColorFormat::Hsl), "hsl(225,100%,60%)");

        assert_eq!(data.format, Some(ColorFormat::Rgba));
        assert_eq!((data.r, data.g, data.b), (Some(51), Some(102), Some(255)));
        assert_eq!(data.a, Some(1.0));
        assert_eq!(data.hex.as_deref(), Some("#3366ff"));
        assert_eq!(data.hexa.as_deref(), Some("#3366ffff"));
    }

    #[test]
    fn test_default_value_when_absent_or_empty() {
        let spec = ColorSpec::new("Accent", ColorFormat::Hex).with_default("red");

        let mut data = ColorData::default();
        ColorField::new(&spec, &mut data).unwrap();
        assert_eq!(data.value.as_deref(), Some("red"));

        let mut data = ColorData::from_value("");
        let field = ColorField::new(&spec, &mut data).unwrap();
        assert_eq!(field.to_string(), "#ff0000");
    }

    #[test]
    fn test_existing_fields_win() {
        let spec = ColorSpec::new("Accent", ColorFormat::Hsl);
        let mut data = ColorData {
            value: Some("#000000".to_string()),
            format: Some(ColorFormat::Hex),
            r: Some(10),
            hex: Some("#custom".to_string()),
            ..Default::default()
        };

        ColorField::new(&spec, &mut data).unwrap();
        assert_eq!(data.format, Some(ColorFormat::Hex));
        assert_eq!(data.r, Some(10));
        assert_eq!(data.g, Some(0));
        assert_eq!(data.hex.as_deref(), Some("#custom"));
    }

    #[test]
    fn test_missing_and_malformed_values() {
        let spec = ColorSpec::new("Accent", ColorFormat::Hex);

        let mut data = ColorData::default();
        assert!(matches!(
            ColorField::new(&spec, &mut data),
            Err(UtilsError::MissingColor)
        ));

        let mut data = ColorData::from_value("not-a-color");
        assert!(matches!(
            ColorField::new(&spec, &mut data),
            Err(UtilsError::ColorParse(_))
        ));
    }

    #[test]
    fn test_with_mock_codec() {
        let spec = ColorSpec::new("Accent", ColorFormat::Hsla).with_default("brand");
        let mut data = ColorData::default();

        let mut codec = MockColorCodec::new();
        codec
            .expect_decode()
            .times(1)
            .returning(|_| Ok(ColorChannels::rgb(1, 2, 3).with_alpha(0.5)));
        codec
            .expect_encode()
            .returning(|channels, format| format!("{}:{}", format, channels.b));

        let field = ColorField::with_codec(&spec, &mut data, codec).unwrap();
        assert_eq!(field.to_string(), "hsla:3");
        assert_eq!(field.format(ColorFormat::Rgb), "rgb:3");
        assert_eq!(field.channels().a, 0.5);
    }

    #[test]
    fn test_codec_error_propagates() {
        let spec = ColorSpec::new("Accent", ColorFormat::Hex);
        let mut data = ColorData::from_value("whatever");

        let mut codec = MockColorCodec::new();
        codec
            .expect_decode()
            .returning(|value| Err(UtilsError::ColorParse(value.to_string())));

        let result = ColorField::with_codec(&spec, &mut data, codec);
        assert!(matches!(result, Err(UtilsError::ColorParse(v)) if v == "whatever"));
    }
}
