use framebox_types::{Color, NamedColor};
use owo_colors::{AnsiColors, DynColors, OwoColorize};

fn ansi(color: NamedColor) -> AnsiColors {
    match color {
        NamedColor::Black => AnsiColors::Black,
        NamedColor::Red => AnsiColors::Red,
        NamedColor::Green => AnsiColors::Green,
        NamedColor::Yellow => AnsiColors::Yellow,
        NamedColor::Blue => AnsiColors::Blue,
        NamedColor::Magenta => AnsiColors::Magenta,
        NamedColor::Cyan => AnsiColors::Cyan,
        NamedColor::White => AnsiColors::White,
        NamedColor::BlackBright => AnsiColors::BrightBlack,
        NamedColor::RedBright => AnsiColors::BrightRed,
        NamedColor::GreenBright => AnsiColors::BrightGreen,
        NamedColor::YellowBright => AnsiColors::BrightYellow,
        NamedColor::BlueBright => AnsiColors::BrightBlue,
        NamedColor::MagentaBright => AnsiColors::BrightMagenta,
        NamedColor::CyanBright => AnsiColors::BrightCyan,
        NamedColor::WhiteBright => AnsiColors::BrightWhite,
    }
}

fn dyn_color(color: &Color) -> DynColors {
    match color {
        Color::Named(named) => DynColors::Ansi(ansi(*named)),
        Color::Hex(rgb) => DynColors::Rgb(rgb.r, rgb.g, rgb.b),
    }
}

const FOREGROUND_CLOSE: &str = "\x1b[39m";
const BACKGROUND_CLOSE: &str = "\x1b[49m";

// Every close code already inside `text` is followed by a fresh open code,
// so the outer color survives up to the final close.
fn paint_through(text: &str, close: &str, paint: impl Fn(&str) -> String) -> String {
    if !text.contains(close) {
        return paint(text);
    }

    let empty = paint("");
    let open = empty.strip_suffix(close).unwrap_or(&empty);
    paint(&text.replace(close, &format!("{}{}", close, open)))
}

/// Apply `color` as the foreground
pub fn foreground(text: &str, color: &Color) -> String {
    let color = dyn_color(color);
    paint_through(text, FOREGROUND_CLOSE, |s| s.color(color).to_string())
}

/// Apply `color` as the background
pub fn background(text: &str, color: &Color) -> String {
    let color = dyn_color(color);
    paint_through(text, BACKGROUND_CLOSE, |s| s.on_color(color).to_string())
}

pub fn dim(text: &str) -> String {
    text.dimmed().to_string()
}
