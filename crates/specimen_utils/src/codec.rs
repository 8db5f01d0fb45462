//! Color decoding and encoding.

use std::sync::LazyLock;

use regex::Regex;
use specimen_types::ColorFormat;

use crate::error::{UtilsError, UtilsResult};

static FUNCTIONAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(rgba?|hsla?)\s*\(([^)]*)\)$").unwrap());

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-f]{3}|[0-9a-f]{4}|[0-9a-f]{6}|[0-9a-f]{8})$").unwrap()
});

const NAMED_COLORS: [(&str, [u8; 3]); 16] = [
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
];

/// Decoded color: 8-bit RGB channels and an alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorChannels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl ColorChannels {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = a.clamp(0.0, 1.0);
        self
    }

    /// Build from hue in degrees and saturation/lightness in percent.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = (s / 100.0).clamp(0.0, 1.0);
        let l = (l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = to_byte(l);
            return Self::rgb(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::rgb(
            to_byte(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_byte(hue_to_rgb(p, q, h)),
            to_byte(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Hue in degrees, saturation and lightness in percent.
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h * 60.0, s * 100.0, l * 100.0)
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn hexa(&self) -> String {
        format!("{}{:02x}", self.hex(), to_byte(self.a))
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Round to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parses color strings into channels and encodes channels back to text.
#[cfg_attr(test, mockall::automock)]
pub trait ColorCodec {
    fn decode(&self, value: &str) -> UtilsResult<ColorChannels>;

    fn encode(&self, channels: &ColorChannels, format: ColorFormat) -> String;
}

/// CSS color syntax: hex notations, `rgb()`/`rgba()`, `hsl()`/`hsla()`
/// and the basic named colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorCodec;

impl CssColorCodec {
    fn decode_hex(digits: &str) -> Option<ColorChannels> {
        let expanded: String = if digits.len() <= 4 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        let byte = |idx: usize| u8::from_str_radix(expanded.get(idx..idx + 2)?, 16).ok();
        let channels = ColorChannels::rgb(byte(0)?, byte(2)?, byte(4)?);

        if expanded.len() == 8 {
            Some(channels.with_alpha(f64::from(byte(6)?) / 255.0))
        } else {
            Some(channels)
        }
    }

    fn decode_functional(name: &str, args: &str, raw: &str) -> UtilsResult<ColorChannels> {
        let parts: Vec<&str> = args
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() != 3 && parts.len() != 4 {
            return Err(UtilsError::ColorParse(raw.to_string()));
        }

        let number = |part: &str| -> UtilsResult<(f64, bool)> {
            let (text, percent) = match part.strip_suffix('%') {
                Some(text) => (text, true),
                None => (part.trim_end_matches("deg"), false),
            };
            text.parse::<f64>()
                .map(|value| (value, percent))
                .map_err(|_| UtilsError::ColorParse(raw.to_string()))
        };

        let channels = if name.starts_with("rgb") {
            let mut rgb = [0u8; 3];
            for (slot, part) in rgb.iter_mut().zip(&parts) {
                let (value, percent) = number(*part)?;
                let value = if percent { value * 2.55 } else { value };
                *slot = value.clamp(0.0, 255.0).round() as u8;
            }
            ColorChannels::rgb(rgb[0], rgb[1], rgb[2])
        } else {
            let (h, _) = number(parts[0])?;
            let (s, _) = number(parts[1])?;
            let (l, _) = number(parts[2])?;
            ColorChannels::from_hsl(h, s, l)
        };

        match parts.get(3) {
            Some(alpha) => {
                let (value, percent) = number(*alpha)?;
                Ok(channels.with_alpha(if percent { value / 100.0 } else { value }))
            }
            None => Ok(channels),
        }
    }
}

impl ColorCodec for CssColorCodec {
    fn decode(&self, value: &str) -> UtilsResult<ColorChannels> {
        let text = value.trim().to_ascii_lowercase();

        if text == "transparent" {
            return Ok(ColorChannels::rgb(0, 0, 0).with_alpha(0.0));
        }
        if let Some((_, [r, g, b])) = NAMED_COLORS.iter().find(|(name, _)| *name == text) {
            return Ok(ColorChannels::rgb(*r, *g, *b));
        }

        if let Some(caps) = HEX_RE.captures(&text) {
            return Self::decode_hex(&caps[1])
                .ok_or_else(|| UtilsError::ColorParse(value.to_string()));
        }

        if let Some(caps) = FUNCTIONAL_RE.captures(&text) {
            return Self::decode_functional(&caps[1], &caps[2], value);
        }

        Err(UtilsError::ColorParse(value.to_string()))
    }

    fn encode(&self, channels: &ColorChannels, format: ColorFormat) -> String {
        let ColorChannels { r, g, b, a } = *channels;
        let alpha = round2(a);

        match format {
            ColorFormat::Hex => channels.hex(),
            ColorFormat::Hexa => channels.hexa(),
            ColorFormat::Rgb => format!("rgb({},{},{})", r, g, b),
            ColorFormat::Rgba => format!("rgba({},{},{},{})", r, g, b, alpha),
            ColorFormat::Hsl | ColorFormat::Hsla => {
                let (h, s, l) = channels.to_hsl();
                let (h, s, l) = (h.round(), s.round(), l.round());
                if format == ColorFormat::Hsl {
                    format!("hsl({},{}%,{}%)", h, s, l)
                } else {
                    format!("hsla({},{}%,{}%,{})", h, s, l, alpha)
                }
            }
        }
    }
}
