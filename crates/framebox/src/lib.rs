//! framebox: draw boxes around text in the terminal.
//!
//! # Overview
//!
//! `framebox` frames a block of text with a character-drawn border, with
//! padding inside the border, margins outside it, text alignment, floating
//! against the terminal width, and optional border/background colors.
//! Widths are measured in terminal columns, so colored text and wide
//! characters line up.
//!
//! # Quickstart
//!
//! ```no_run
//! use framebox::{render, RenderOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! println!("{}", render("unicorn", &RenderOptions::new().with_padding(1))?);
//! // ┌─────────────┐
//! // │             │
//! // │   unicorn   │
//! // │             │
//! // └─────────────┘
//! # Ok(())
//! # }
//! ```
//!
//! # Options
//!
//! ```no_run
//! use framebox::{render, Align, Float, NamedStyle, RenderOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = RenderOptions::new()
//!     .with_border_style(NamedStyle::Double)
//!     .with_border_color("#ff8800")
//!     .with_padding(1)
//!     .with_margin(1)
//!     .with_align(Align::Center)
//!     .with_float(Float::Center);
//! println!("{}", render("hello\nworld", &options)?);
//! # Ok(())
//! # }
//! ```
//!
//! Options can also be written as a TOML document and parsed with
//! [`RenderOptions::from_toml_str`].
//!
//! # Architecture
//!
//! This crate is a facade over:
//! - `framebox-types`: option records, spacing, glyph sets, colors, errors
//! - `framebox-engine`: the layout stages and terminal collaborators

pub use framebox_engine::{
    display_width, FixedTerminal, LiveTerminal, Terminal, DEFAULT_COLUMNS,
};
pub use framebox_types::{
    Align, BorderStyle, Color, ColorField, Error, Float, GlyphSet, NamedColor, NamedStyle,
    PartialSpacing, RenderOptions, Result, Rgb, Spacing, SpacingSpec,
};

/// Render `text` in a box, floating against the current terminal width.
pub fn render(text: &str, options: &RenderOptions) -> Result<String> {
    render_with(text, options, &LiveTerminal)
}

/// Render `text` in a box against an explicit terminal.
pub fn render_with(text: &str, options: &RenderOptions, terminal: &dyn Terminal) -> Result<String> {
    framebox_engine::render_box(text, options, terminal)
}

/// Every built-in border style with its glyphs, in registry order.
pub fn border_styles() -> Vec<(NamedStyle, GlyphSet)> {
    NamedStyle::ALL
        .iter()
        .map(|style| (*style, style.glyphs()))
        .collect()
}
