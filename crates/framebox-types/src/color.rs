use crate::{ColorField, Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#(?:[0-9a-f]{3}|[0-9a-f]{6})$").unwrap());

/// The sixteen standard terminal colors (plus the `gray`/`grey` aliases)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BlackBright,
    RedBright,
    GreenBright,
    YellowBright,
    BlueBright,
    MagentaBright,
    CyanBright,
    WhiteBright,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BlackBright,
        NamedColor::RedBright,
        NamedColor::GreenBright,
        NamedColor::YellowBright,
        NamedColor::BlueBright,
        NamedColor::MagentaBright,
        NamedColor::CyanBright,
        NamedColor::WhiteBright,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
            NamedColor::BlackBright => "blackBright",
            NamedColor::RedBright => "redBright",
            NamedColor::GreenBright => "greenBright",
            NamedColor::YellowBright => "yellowBright",
            NamedColor::BlueBright => "blueBright",
            NamedColor::MagentaBright => "magentaBright",
            NamedColor::CyanBright => "cyanBright",
            NamedColor::WhiteBright => "whiteBright",
        }
    }

    /// Look up a color by name. `gray` and `grey` are bright black.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gray" | "grey" => Some(NamedColor::BlackBright),
            _ => NamedColor::ALL.iter().copied().find(|c| c.name() == name),
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rgb` or `#rrggbb`. The short form doubles each digit.
    pub fn from_hex(literal: &str) -> Option<Self> {
        if !HEX_COLOR_REGEX.is_match(literal) {
            return None;
        }

        let digits = &literal[1..];
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        if digits.len() == 3 {
            let mut expanded = String::with_capacity(6);
            for c in digits.chars() {
                expanded.push(c);
                expanded.push(c);
            }
            return Self::from_hex(&format!("#{}", expanded));
        }

        Some(Rgb {
            r: channel(&digits[0..2])?,
            g: channel(&digits[2..4])?,
            b: channel(&digits[4..6])?,
        })
    }
}

/// A resolved color: one of the named terminal colors or a hex literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Named(NamedColor),
    Hex(Rgb),
}

impl Color {
    /// Parse a color value, attributing failures to `field`
    pub fn parse(value: &str, field: ColorField) -> Result<Self> {
        if let Some(named) = NamedColor::from_name(value) {
            return Ok(Color::Named(named));
        }

        Rgb::from_hex(value)
            .map(Color::Hex)
            .ok_or_else(|| Error::InvalidColor {
                field,
                value: value.to_string(),
            })
    }
}

impl From<NamedColor> for Color {
    fn from(color: NamedColor) -> Self {
        Color::Named(color)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Hex(rgb)
    }
}
