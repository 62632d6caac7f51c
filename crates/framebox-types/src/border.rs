use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// The six characters that draw a box.
///
/// ```text
/// topLeft  horizontal  topRight
/// vertical             vertical
/// bottomLeft horizontal bottomRight
/// ```
///
/// Each field holds exactly one grapheme cluster, which may span several
/// code points (e.g. an emoji with a variation selector).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlyphSet {
    pub top_left: String,
    pub top_right: String,
    pub bottom_right: String,
    pub bottom_left: String,
    pub vertical: String,
    pub horizontal: String,
}

impl GlyphSet {
    pub fn new(
        top_left: &str,
        top_right: &str,
        bottom_right: &str,
        bottom_left: &str,
        vertical: &str,
        horizontal: &str,
    ) -> Self {
        Self {
            top_left: top_left.to_string(),
            top_right: top_right.to_string(),
            bottom_right: bottom_right.to_string(),
            bottom_left: bottom_left.to_string(),
            vertical: vertical.to_string(),
            horizontal: horizontal.to_string(),
        }
    }

    /// Fields in declaration order, keyed by their option-record names
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("topLeft", self.top_left.as_str()),
            ("topRight", self.top_right.as_str()),
            ("bottomRight", self.bottom_right.as_str()),
            ("bottomLeft", self.bottom_left.as_str()),
            ("vertical", self.vertical.as_str()),
            ("horizontal", self.horizontal.as_str()),
        ]
    }

    /// Every field must be present and be a single grapheme.
    /// Fails with the name of the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, glyph) in self.fields() {
            if glyph.graphemes(true).count() != 1 {
                return Err(Error::InvalidBorderStyle(name.to_string()));
            }
        }
        Ok(())
    }
}

/// Built-in border styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedStyle {
    Single,
    Double,
    Round,
    Bold,
    SingleDouble,
    DoubleSingle,
    Classic,
    Arrow,
}

// (topLeft, topRight, bottomRight, bottomLeft, vertical, horizontal)
type GlyphRow = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

const SINGLE: GlyphRow = ("┌", "┐", "┘", "└", "│", "─");
const DOUBLE: GlyphRow = ("╔", "╗", "╝", "╚", "║", "═");
const ROUND: GlyphRow = ("╭", "╮", "╯", "╰", "│", "─");
const BOLD: GlyphRow = ("┏", "┓", "┛", "┗", "┃", "━");
const SINGLE_DOUBLE: GlyphRow = ("╓", "╖", "╜", "╙", "║", "─");
const DOUBLE_SINGLE: GlyphRow = ("╒", "╕", "╛", "╘", "│", "═");
const CLASSIC: GlyphRow = ("+", "+", "+", "+", "|", "-");
const ARROW: GlyphRow = ("↘", "↙", "↖", "↗", "←", "↓");

impl NamedStyle {
    /// Registry order
    pub const ALL: [NamedStyle; 8] = [
        NamedStyle::Single,
        NamedStyle::Double,
        NamedStyle::Round,
        NamedStyle::Bold,
        NamedStyle::SingleDouble,
        NamedStyle::DoubleSingle,
        NamedStyle::Classic,
        NamedStyle::Arrow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NamedStyle::Single => "single",
            NamedStyle::Double => "double",
            NamedStyle::Round => "round",
            NamedStyle::Bold => "bold",
            NamedStyle::SingleDouble => "singleDouble",
            NamedStyle::DoubleSingle => "doubleSingle",
            NamedStyle::Classic => "classic",
            NamedStyle::Arrow => "arrow",
        }
    }

    pub fn glyphs(&self) -> GlyphSet {
        let (tl, tr, br, bl, v, h) = match self {
            NamedStyle::Single => SINGLE,
            NamedStyle::Double => DOUBLE,
            NamedStyle::Round => ROUND,
            NamedStyle::Bold => BOLD,
            NamedStyle::SingleDouble => SINGLE_DOUBLE,
            NamedStyle::DoubleSingle => DOUBLE_SINGLE,
            NamedStyle::Classic => CLASSIC,
            NamedStyle::Arrow => ARROW,
        };
        GlyphSet::new(tl, tr, br, bl, v, h)
    }
}

impl fmt::Display for NamedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NamedStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NamedStyle::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s)
            .ok_or_else(|| Error::InvalidBorderStyle(s.to_string()))
    }
}

/// Border style as supplied by the caller: a registry name or explicit glyphs.
///
/// Names are kept as strings until options are resolved so that an unknown
/// name surfaces as [`Error::InvalidBorderStyle`] rather than a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderStyle {
    Named(String),
    Custom(GlyphSet),
}

impl BorderStyle {
    /// Resolve to a validated glyph set
    pub fn resolve(&self) -> Result<GlyphSet> {
        match self {
            BorderStyle::Named(name) => Ok(name.parse::<NamedStyle>()?.glyphs()),
            BorderStyle::Custom(glyphs) => {
                glyphs.validate()?;
                Ok(glyphs.clone())
            }
        }
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        BorderStyle::Named(NamedStyle::Single.name().to_string())
    }
}

impl From<NamedStyle> for BorderStyle {
    fn from(style: NamedStyle) -> Self {
        BorderStyle::Named(style.name().to_string())
    }
}

impl From<GlyphSet> for BorderStyle {
    fn from(glyphs: GlyphSet) -> Self {
        BorderStyle::Custom(glyphs)
    }
}

impl From<&str> for BorderStyle {
    fn from(name: &str) -> Self {
        BorderStyle::Named(name.to_string())
    }
}
