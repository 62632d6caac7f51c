use crate::{BorderStyle, Color, GlyphSet, Result, Spacing, SpacingSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal placement of the box within the terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Float {
    #[default]
    Left,
    Center,
    Right,
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Float::Left => write!(f, "left"),
            Float::Center => write!(f, "center"),
            Float::Right => write!(f, "right"),
        }
    }
}

/// Alignment of text lines relative to the widest line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Align::Left => write!(f, "left"),
            Align::Center => write!(f, "center"),
            Align::Right => write!(f, "right"),
        }
    }
}

/// Options as supplied by the caller.
///
/// Every field has a default, so a partial TOML document or a
/// `..Default::default()` struct literal only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub border_style: BorderStyle,
    pub dim_border: bool,
    pub padding: SpacingSpec,
    pub margin: SpacingSpec,
    pub float: Float,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub align: Align,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn with_border_style(mut self, style: impl Into<BorderStyle>) -> Self {
        self.border_style = style.into();
        self
    }

    pub fn with_dim_border(mut self, dim: bool) -> Self {
        self.dim_border = dim;
        self
    }

    pub fn with_padding(mut self, padding: impl Into<SpacingSpec>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn with_margin(mut self, margin: impl Into<SpacingSpec>) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn with_float(mut self, float: Float) -> Self {
        self.float = float;
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Fully validated options, produced fresh for every render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub border_color: Option<Color>,
    pub glyphs: GlyphSet,
    pub dim_border: bool,
    pub padding: Spacing,
    pub margin: Spacing,
    pub float: Float,
    pub background_color: Option<Color>,
    pub align: Align,
}
