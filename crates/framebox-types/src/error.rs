use std::fmt;

/// Result type for framebox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Option field that carries a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Border,
    Background,
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorField::Border => write!(f, "borderColor"),
            ColorField::Background => write!(f, "backgroundColor"),
        }
    }
}

/// Error types that can occur while resolving render options
#[derive(Debug)]
pub enum Error {
    /// Unknown style name, or the name of a missing/malformed glyph field
    InvalidBorderStyle(String),

    /// Color is neither a known name nor a `#rgb`/`#rrggbb` literal
    InvalidColor { field: ColorField, value: String },

    /// Configuration document could not be parsed
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBorderStyle(name) => write!(f, "Invalid border style: {}", name),
            Error::InvalidColor { field, value } => {
                write!(f, "{} is not a valid {}", value, field)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
