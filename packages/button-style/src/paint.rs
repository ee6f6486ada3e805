//! Paint values for text and background fills.
//!
//! The host renderer owns colour management; paints here are plain values
//! that can be compared, copied into a render description and read from
//! style sheets.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB colour with straight alpha, all components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const BLUE: Rgba = Rgba::rgb(0.0, 0.478, 1.0);
    pub const YELLOW: Rgba = Rgba::rgb(1.0, 0.8, 0.0);
    pub const CYAN: Rgba = Rgba::rgb(0.196, 0.678, 0.902);
    pub const GRAY: Rgba = Rgba::rgb(0.557, 0.557, 0.576);
    pub const RED: Rgba = Rgba::rgb(1.0, 0.231, 0.188);
    pub const ORANGE: Rgba = Rgba::rgb(1.0, 0.584, 0.0);
    pub const GREEN: Rgba = Rgba::rgb(0.204, 0.78, 0.349);
    pub const CLEAR: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque colour from components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a hex colour string.
    /// Supports formats: #RGB, #RRGGBB, #RRGGBBAA (the `#` is optional)
    pub fn hex(color: &str) -> Option<Self> {
        let color = color.trim();
        let color = color.strip_prefix('#').unwrap_or(color);
        if !color.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        let (r, g, b, a) = match color.len() {
            3 => {
                // #RGB
                let r = channel(&color[0..1].repeat(2))?;
                let g = channel(&color[1..2].repeat(2))?;
                let b = channel(&color[2..3].repeat(2))?;
                (r, g, b, 255u8)
            }
            6 => (
                channel(&color[0..2])?,
                channel(&color[2..4])?,
                channel(&color[4..6])?,
                255u8,
            ),
            8 => (
                channel(&color[0..2])?,
                channel(&color[2..4])?,
                channel(&color[4..6])?,
                channel(&color[6..8])?,
            ),
            _ => return None,
        };

        Some(Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        })
    }

    /// Multiply alpha by `opacity`, clamped to `0.0..=1.0`.
    pub fn opacity(self, opacity: f32) -> Self {
        Self {
            a: (self.a * opacity).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a));
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Name of the matching built-in colour, if any.
    pub fn name(&self) -> Option<&'static str> {
        NAMED.iter().find(|(_, c)| c == self).map(|(n, _)| *n)
    }

    /// Built-in name when there is one, hex otherwise.
    fn token(&self) -> String {
        self.name().map(str::to_string).unwrap_or_else(|| self.to_hex())
    }

    /// Whether the hex form reads back as exactly this colour.
    fn is_hex_exact(&self) -> bool {
        Self::hex(&self.to_hex()) == Some(*self)
    }

    fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v))
    }

    fn named(name: &str) -> Option<Self> {
        if name == "grey" {
            return Some(Self::GRAY);
        }
        NAMED.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
    }
}

const NAMED: [(&str, Rgba); 10] = [
    ("black", Rgba::BLACK),
    ("white", Rgba::WHITE),
    ("blue", Rgba::BLUE),
    ("yellow", Rgba::YELLOW),
    ("cyan", Rgba::CYAN),
    ("gray", Rgba::GRAY),
    ("red", Rgba::RED),
    ("orange", Rgba::ORANGE),
    ("green", Rgba::GREEN),
    ("clear", Rgba::CLEAR),
];

/// Paints resolved by the host from its own theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticPaint {
    /// Primary foreground (body text)
    Primary,
    /// Secondary foreground
    Secondary,
    /// App accent colour
    Accent,
    /// Window background
    Background,
}

impl SemanticPaint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
        }
    }
}

/// Axis of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    /// Leading to trailing
    #[default]
    Horizontal,
    /// Top to bottom
    Vertical,
}

impl GradientDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// A fill for text or shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Color(Rgba),
    Semantic(SemanticPaint),
    LinearGradient {
        stops: Vec<Rgba>,
        direction: GradientDirection,
    },
}

impl Paint {
    /// Horizontal gradient through `stops`.
    pub fn gradient(stops: impl Into<Vec<Rgba>>) -> Self {
        Self::LinearGradient {
            stops: stops.into(),
            direction: GradientDirection::Horizontal,
        }
    }

    /// Same paint with alpha scaled. Semantic paints are returned unchanged.
    pub fn opacity(&self, opacity: f32) -> Self {
        match self {
            Self::Color(c) => Self::Color(c.opacity(opacity)),
            Self::Semantic(s) => Self::Semantic(*s),
            Self::LinearGradient { stops, direction } => Self::LinearGradient {
                stops: stops.iter().map(|c| c.opacity(opacity)).collect(),
                direction: *direction,
            },
        }
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Self::Color(color)
    }
}

impl From<SemanticPaint> for Paint {
    fn from(paint: SemanticPaint) -> Self {
        Self::Semantic(paint)
    }
}

fn parse_color(token: &str) -> Result<Rgba> {
    let lower = token.trim().to_ascii_lowercase();
    if let Some(color) = Rgba::named(&lower) {
        return Ok(color);
    }
    Rgba::hex(&lower).ok_or_else(|| Error::InvalidPaint(token.to_string()))
}

impl FromStr for Paint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        let semantic = match token.as_str() {
            "primary" => Some(SemanticPaint::Primary),
            "secondary" => Some(SemanticPaint::Secondary),
            "accent" => Some(SemanticPaint::Accent),
            "background" => Some(SemanticPaint::Background),
            _ => None,
        };
        if let Some(paint) = semantic {
            return Ok(Self::Semantic(paint));
        }
        if let Some(body) = token
            .strip_prefix("gradient(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_gradient(body).ok_or_else(|| Error::InvalidPaint(s.to_string()));
        }
        parse_color(s).map(Self::Color)
    }
}

/// Body of `gradient(<direction>: <stop>, <stop>, ...)`.
fn parse_gradient(body: &str) -> Option<Paint> {
    let (direction, stops) = body.split_once(':')?;
    let direction = GradientDirection::parse(direction)?;
    let stops = stops
        .split(',')
        .map(|stop| parse_color(stop).ok())
        .collect::<Option<Vec<_>>>()?;
    Some(Paint::LinearGradient { stops, direction })
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => f.write_str(&c.token()),
            Self::Semantic(s) => f.write_str(s.as_str()),
            Self::LinearGradient { stops, direction } => {
                let stops: Vec<_> = stops.iter().map(Rgba::token).collect();
                write!(f, "gradient({}: {})", direction.as_str(), stops.join(", "))
            }
        }
    }
}

/// Wire form of a colour: a name or hex token when that is exact,
/// otherwise an `{ r, g, b, a }` table.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Token(String),
    Components(Rgba),
}

impl ColorRepr {
    fn from_color(color: &Rgba) -> Self {
        if color.name().is_some() || color.is_hex_exact() {
            Self::Token(color.token())
        } else {
            Self::Components(*color)
        }
    }

    fn into_color(self) -> Result<Rgba> {
        match self {
            Self::Token(token) => parse_color(&token),
            Self::Components(color) if color.is_valid() => Ok(color),
            Self::Components(color) => Err(Error::InvalidPaint(format!("{:?}", color))),
        }
    }
}

/// Wire form: a token string, a gradient table, or colour components.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PaintRepr {
    Token(String),
    Gradient {
        gradient: Vec<ColorRepr>,
        #[serde(default)]
        direction: GradientDirection,
    },
    Components(Rgba),
}

impl Serialize for Paint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let repr = match self {
            Self::LinearGradient { stops, direction } => PaintRepr::Gradient {
                gradient: stops.iter().map(ColorRepr::from_color).collect(),
                direction: *direction,
            },
            Self::Color(color) => match ColorRepr::from_color(color) {
                ColorRepr::Token(token) => PaintRepr::Token(token),
                ColorRepr::Components(color) => PaintRepr::Components(color),
            },
            Self::Semantic(paint) => PaintRepr::Token(paint.as_str().to_string()),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Paint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match PaintRepr::deserialize(deserializer)? {
            PaintRepr::Token(token) => token.parse().map_err(serde::de::Error::custom),
            PaintRepr::Components(color) => ColorRepr::Components(color)
                .into_color()
                .map(Self::Color)
                .map_err(serde::de::Error::custom),
            PaintRepr::Gradient {
                gradient,
                direction,
            } => {
                if gradient.is_empty() {
                    return Err(serde::de::Error::custom("gradient needs at least one stop"));
                }
                let stops = gradient
                    .into_iter()
                    .map(ColorRepr::into_color)
                    .collect::<Result<Vec<_>>>()
                    .map_err(serde::de::Error::custom)?;
                Ok(Self::LinearGradient { stops, direction })
            }
        }
    }
}
