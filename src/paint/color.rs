use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{StampError, StampResult};

/// Recognized color names, in the order they are reported.
pub const NAMED_COLORS: &[(&str, Rgba8)] = &[
    ("purple", Rgba8::new(75, 0, 130, 255)),
    ("blue", Rgba8::new(0, 102, 204, 255)),
    ("light_blue", Rgba8::new(0, 191, 255, 255)),
    ("green", Rgba8::new(0, 128, 0, 255)),
    ("light_green", Rgba8::new(0, 200, 100, 255)),
    ("red", Rgba8::new(200, 0, 0, 255)),
    ("orange", Rgba8::new(255, 140, 0, 255)),
    ("yellow", Rgba8::new(255, 215, 0, 255)),
    ("pink", Rgba8::new(255, 105, 180, 255)),
    ("gray", Rgba8::new(100, 100, 100, 255)),
    ("black", Rgba8::new(0, 0, 0, 255)),
    ("white", Rgba8::new(255, 255, 255, 255)),
];

/// Names accepted by [`resolve_color`].
pub fn color_names() -> Vec<&'static str> {
    NAMED_COLORS.iter().map(|(name, _)| *name).collect()
}

/// A color as supplied by the caller: a table name or explicit channels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Case-insensitive key into [`NAMED_COLORS`]; resolved lazily.
    Named(String),
    /// Explicit straight RGBA.
    Rgba(Rgba8),
}

impl ColorSpec {
    /// Shorthand for [`ColorSpec::Named`].
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Resolve into concrete channels.
    pub fn resolve(&self) -> StampResult<Rgba8> {
        resolve_color(self)
    }
}

impl From<Rgba8> for ColorSpec {
    fn from(c: Rgba8) -> Self {
        Self::Rgba(c)
    }
}

impl From<[u8; 4]> for ColorSpec {
    fn from(v: [u8; 4]) -> Self {
        Self::Rgba(v.into())
    }
}

/// Same forms as [`FromStr`]; text that is not valid hex or a channel tuple is kept as a name.
impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| Self::Named(s.to_owned()))
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Rgba(c) => write!(f, "{},{},{},{}", c.r, c.g, c.b, c.a),
        }
    }
}

/// Map a color spec to RGBA, looking names up case-insensitively.
pub fn resolve_color(spec: &ColorSpec) -> StampResult<Rgba8> {
    match spec {
        ColorSpec::Rgba(c) => Ok(*c),
        ColorSpec::Named(name) => {
            let key = name.trim().to_lowercase();
            NAMED_COLORS
                .iter()
                .find(|(n, _)| *n == key)
                .map(|(_, c)| *c)
                .ok_or_else(|| StampError::invalid_color_name(name.as_str(), &color_names()))
        }
    }
}

/// Parses `#RRGGBB`, `#RRGGBBAA`, `r,g,b` / `r,g,b,a`, or falls back to a color name.
///
/// Names are not checked here; an unknown name surfaces from [`resolve_color`] so the error
/// carries the list of valid names.
impl FromStr for ColorSpec {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return parse_hex(s).map(Self::Rgba).map_err(StampError::validation);
        }
        if s.contains(',') {
            return parse_channels(s).map(Self::Rgba).map_err(StampError::validation);
        }
        Ok(Self::Named(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for ColorSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            RgbaObj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::Rgba(Rgba8::new(r, g, b, a))),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::Rgba(Rgba8::new(*r, *g, *b, 255))),
                [r, g, b, a] => Ok(Self::Rgba(Rgba8::new(*r, *g, *b, *a))),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex color \"#{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        6 => Ok(Rgba8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        )),
        8 => Ok(Rgba8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

fn parse_channels(s: &str) -> Result<Rgba8, String> {
    let parts = s
        .split(',')
        .map(|p| {
            let p = p.trim();
            p.parse::<u8>()
                .map_err(|_| format!("color channel \"{p}\" is not an integer in 0..=255"))
        })
        .collect::<Result<Vec<u8>, String>>()?;
    match parts.as_slice() {
        [r, g, b] => Ok(Rgba8::new(*r, *g, *b, 255)),
        [r, g, b, a] => Ok(Rgba8::new(*r, *g, *b, *a)),
        _ => Err(format!(
            "color tuple must have 3 or 4 channels, got {}",
            parts.len()
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/color.rs"]
mod tests;
