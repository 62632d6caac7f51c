use crate::width::display_width;
use framebox_types::Align;

/// Align `\n`-separated lines relative to the widest one.
///
/// Lines are only ever prefixed with spaces; the frame stage fills the
/// remaining columns on the right. Escape sequences do not count towards
/// width, so colored lines align the same as plain ones.
pub fn align_text(text: &str, align: Align) -> String {
    if text.is_empty() || align == Align::Left {
        return text.to_string();
    }

    let lines: Vec<(&str, usize)> = text
        .split('\n')
        .map(|line| (line, display_width(line)))
        .collect();
    let max_width = lines.iter().map(|(_, width)| *width).max().unwrap_or(0);

    lines
        .iter()
        .map(|(line, width)| {
            let gap = max_width - width;
            let indent = match align {
                Align::Left => 0,
                Align::Center => gap / 2,
                Align::Right => gap,
            };
            format!("{}{}", " ".repeat(indent), line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_is_noop() {
        assert_eq!(align_text("a\nabc", Align::Left), "a\nabc");
    }

    #[test]
    fn test_center_rounds_down() {
        assert_eq!(align_text("a\nabcd", Align::Center), " a\nabcd");
        assert_eq!(align_text("ab\nabcde", Align::Center), " ab\nabcde");
    }

    #[test]
    fn test_right() {
        assert_eq!(align_text("a\nabcd\n", Align::Right), "   a\nabcd\n    ");
    }

    #[test]
    fn test_escape_sequences_ignored() {
        assert_eq!(
            align_text("\x1b[31mab\x1b[39m\nabcd", Align::Right),
            "  \x1b[31mab\x1b[39m\nabcd"
        );
    }
}
