use crate::align::align_text;
use crate::width::widest_line;
use framebox_types::ResolvedOptions;

/// Content lines ready for framing, padding rows included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedContent {
    pub lines: Vec<String>,
    /// Interior width of the box: widest text line plus left/right padding.
    /// Computed once here and reused by every later stage.
    pub width: usize,
}

pub fn shape(text: &str, options: &ResolvedOptions) -> ShapedContent {
    let text = text.replace("\r\n", "\n");
    let aligned = align_text(&text, options.align);

    let width = widest_line(&aligned) + options.padding.horizontal();
    let text_lines: Vec<&str> = aligned.split('\n').collect();

    let padding = options.padding;
    let mut lines = Vec::with_capacity(text_lines.len() + padding.vertical());
    lines.extend(std::iter::repeat_n(String::new(), padding.top));
    lines.extend(text_lines.iter().map(|line| line.to_string()));
    lines.extend(std::iter::repeat_n(String::new(), padding.bottom));

    ShapedContent { lines, width }
}
