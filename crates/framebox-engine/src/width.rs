//! Terminal display width helpers.
//!
//! Widths are measured after stripping ANSI escapes, so colored text lines
//! up with plain text and wide (CJK, emoji) characters count as two columns.

use unicode_width::UnicodeWidthStr;

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    if !text.contains('\x1b') {
        return UnicodeWidthStr::width(text);
    }

    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    UnicodeWidthStr::width(&*clean_str)
}

/// Width of the widest `\n`-separated line
pub fn widest_line(text: &str) -> usize {
    text.split('\n').map(display_width).max().unwrap_or(0)
}
