use crate::frame::Frame;
use framebox_types::{Float, Spacing};

/// Columns taken by the two vertical border glyphs.
///
/// Assumes each glyph is one column wide; a custom double-width glyph
/// shifts a right-floated box one column per glyph past the edge.
pub const BORDER_COLUMNS: usize = 2;

/// Left offset of every box row for the given float mode.
///
/// `Center` and `Right` replace `margin.left` rather than adding to it.
pub fn margin_left(float: Float, margin: &Spacing, content_width: usize, columns: usize) -> usize {
    match float {
        Float::Left => margin.left,
        Float::Center => columns.saturating_sub(content_width) / 2,
        Float::Right => columns
            .saturating_sub(content_width)
            .saturating_sub(margin.right)
            .saturating_sub(BORDER_COLUMNS),
    }
}

/// Join the frame into the final string, with vertical margins as blank
/// lines and every box row indented by `indent` spaces.
pub fn place(frame: &Frame, margin: &Spacing, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let mut out = "\n".repeat(margin.top);

    out.push_str(&indent);
    out.push_str(&frame.top);
    for row in &frame.rows {
        out.push('\n');
        out.push_str(&indent);
        out.push_str(row);
    }
    out.push('\n');
    out.push_str(&indent);
    out.push_str(&frame.bottom);
    out.push_str(&"\n".repeat(margin.bottom));

    out
}
