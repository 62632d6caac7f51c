//! Core types for framebox: the option record callers build, the
//! spacing and glyph primitives it resolves into, and the error taxonomy.

pub mod border;
pub mod color;
pub mod error;
pub mod options;
pub mod spacing;

pub use border::{BorderStyle, GlyphSet, NamedStyle};
pub use color::{Color, NamedColor, Rgb};
pub use error::{ColorField, Error, Result};
pub use options::{Align, Float, RenderOptions, ResolvedOptions};
pub use spacing::{PartialSpacing, Spacing, SpacingSpec, HORIZONTAL_ASPECT};
