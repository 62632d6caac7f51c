use crate::paint;
use crate::shape::ShapedContent;
use crate::width::display_width;
use framebox_types::ResolvedOptions;

/// Border rows and content rows, before margins are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub top: String,
    pub rows: Vec<String>,
    pub bottom: String,
}

impl Frame {
    /// Total number of rows including both border rows
    pub fn height(&self) -> usize {
        self.rows.len() + 2
    }
}

pub fn assemble(content: &ShapedContent, options: &ResolvedOptions) -> Frame {
    let glyphs = &options.glyphs;
    let horizontal = glyphs.horizontal.repeat(content.width);

    let top = colorize_border(
        &format!("{}{}{}", glyphs.top_left, horizontal, glyphs.top_right),
        options,
    );
    let bottom = colorize_border(
        &format!("{}{}{}", glyphs.bottom_left, horizontal, glyphs.bottom_right),
        options,
    );
    let side = colorize_border(&glyphs.vertical, options);

    let padding_left = " ".repeat(options.padding.left);
    let rows = content
        .lines
        .iter()
        .map(|line| {
            // Clamped: a line never legitimately exceeds the content width.
            let fill = content
                .width
                .saturating_sub(display_width(line))
                .saturating_sub(options.padding.left);
            let interior = format!("{}{}{}", padding_left, line, " ".repeat(fill));
            format!("{}{}{}", side, colorize_content(&interior, options), side)
        })
        .collect();

    Frame { top, rows, bottom }
}

// Dim is applied last, wrapping the color.
fn colorize_border(border: &str, options: &ResolvedOptions) -> String {
    let colored = match &options.border_color {
        Some(color) => paint::foreground(border, color),
        None => border.to_string(),
    };

    if options.dim_border {
        paint::dim(&colored)
    } else {
        colored
    }
}

fn colorize_content(content: &str, options: &ResolvedOptions) -> String {
    match &options.background_color {
        Some(color) => paint::background(content, color),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::shape::shape;
    use framebox_types::{NamedStyle, RenderOptions};

    fn frame(text: &str, options: RenderOptions) -> Frame {
        let resolved = normalize(&options).unwrap();
        assemble(&shape(text, &resolved), &resolved)
    }

    #[test]
    fn test_zero_width_corners_touch() {
        let frame = frame("", RenderOptions::default());
        assert_eq!(frame.top, "┌┐");
        assert_eq!(frame.rows, vec!["││"]);
        assert_eq!(frame.bottom, "└┘");
    }

    #[test]
    fn test_rows_fill_to_content_width() {
        let frame = frame(
            "a\nabc",
            RenderOptions::new().with_border_style(NamedStyle::Classic),
        );
        assert_eq!(frame.top, "+---+");
        assert_eq!(frame.rows, vec!["|a  |", "|abc|"]);
        assert_eq!(frame.bottom, "+---+");
    }

    #[test]
    fn test_wide_characters_fill_by_columns() {
        let frame = frame("古\nabc", RenderOptions::default());
        assert_eq!(frame.rows, vec!["│古 │", "│abc│"]);
    }

    #[test]
    fn test_overwide_line_clamps_fill() {
        let resolved = normalize(&RenderOptions::default()).unwrap();
        let content = ShapedContent {
            lines: vec!["toolong".to_string()],
            width: 3,
        };
        let frame = assemble(&content, &resolved);
        assert_eq!(frame.rows, vec!["│toolong│"]);
    }

    #[test]
    fn test_border_and_background_colors_are_independent() {
        let frame = frame(
            "x",
            RenderOptions::new()
                .with_border_color("red")
                .with_background_color("blue"),
        );
        let row = &frame.rows[0];
        assert!(row.starts_with("\x1b[31m│\x1b[39m"));
        assert!(row.contains("\x1b[44mx\x1b[49m"));
        assert!(row.ends_with("\x1b[31m│\x1b[39m"));
        assert_eq!(display_width(row), 3);
    }

    #[test]
    fn test_background_spans_padding_and_fill() {
        let frame = frame(
            "x\nabc",
            RenderOptions::new()
                .with_padding(1)
                .with_background_color("blue"),
        );
        assert_eq!(
            frame.rows,
            vec![
                "│\x1b[44m         \x1b[49m│",
                "│\x1b[44m   x     \x1b[49m│",
                "│\x1b[44m   abc   \x1b[49m│",
                "│\x1b[44m         \x1b[49m│",
            ]
        );
    }

    #[test]
    fn test_background_survives_escaped_text() {
        let frame = frame(
            "\x1b[41mred\x1b[49m tail\nlonger line",
            RenderOptions::new().with_background_color("blue"),
        );
        assert_eq!(
            frame.rows[0],
            "│\x1b[44m\x1b[41mred\x1b[49m\x1b[44m tail   \x1b[49m│"
        );
        assert_eq!(display_width(&frame.rows[0]), 13);
    }

    #[test]
    fn test_dim_border_without_color() {
        let frame = frame("x", RenderOptions::new().with_dim_border(true));
        assert!(frame.top.starts_with("\x1b[2m"));
        assert_eq!(display_width(&frame.top), 3);
        assert_eq!(frame.height(), 3);
    }
}
