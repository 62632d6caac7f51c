// Engine - the four layout stages plus the terminal collaborators they use.
// Data flows strictly forward: normalize -> shape -> frame -> place.

pub mod align;
pub mod frame;
pub mod normalize;
pub mod paint;
pub mod place;
pub mod shape;
pub mod terminal;
pub mod width;

pub use align::align_text;
pub use frame::{assemble, Frame};
pub use normalize::normalize;
pub use place::{margin_left, place, BORDER_COLUMNS};
pub use shape::{shape, ShapedContent};
pub use terminal::{FixedTerminal, LiveTerminal, Terminal, DEFAULT_COLUMNS};
pub use width::{display_width, widest_line};

use framebox_types::{RenderOptions, Result};

/// Render `text` inside a box, floating it against `terminal`'s width.
///
/// Validation completes before any row is built, so an invalid option
/// never produces partial output.
pub fn render_box(text: &str, options: &RenderOptions, terminal: &dyn Terminal) -> Result<String> {
    let resolved = normalize(options)?;
    let content = shape(text, &resolved);
    let frame = assemble(&content, &resolved);

    let columns = terminal.columns();
    let indent = margin_left(resolved.float, &resolved.margin, content.width, columns);

    tracing::debug!(
        content_width = content.width,
        rows = frame.height(),
        columns,
        indent,
        float = %resolved.float,
        "box laid out"
    );

    Ok(place(&frame, &resolved.margin, indent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use framebox_types::{Error, Float};
    use tracing_test::traced_test;

    #[test]
    fn test_render_minimal_box() {
        let out = render_box("", &RenderOptions::default(), &FixedTerminal(80)).unwrap();
        assert_eq!(out, "┌┐\n││\n└┘");
    }

    #[test]
    fn test_validation_precedes_output() {
        let options = RenderOptions::new().with_border_color("not-a-color");
        let err = render_box("hi", &options, &FixedTerminal(80)).unwrap_err();
        assert!(matches!(err, Error::InvalidColor { .. }));
    }

    #[test]
    fn test_center_float_on_fixed_terminal() {
        let options = RenderOptions::new().with_float(Float::Center);
        let out = render_box("abcd", &options, &FixedTerminal(20)).unwrap();
        for line in out.lines() {
            assert!(line.starts_with("        ") && !line.starts_with("         "));
        }
    }

    #[test]
    #[traced_test]
    fn test_layout_is_traced() {
        render_box("hello", &RenderOptions::default(), &FixedTerminal(40)).unwrap();
        assert!(logs_contain("box laid out"));
        assert!(logs_contain("content_width=5"));
    }
}
