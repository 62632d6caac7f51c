/// Column count used when no terminal can be queried
pub const DEFAULT_COLUMNS: usize = 80;

/// Source of the terminal column count used for floating the box
pub trait Terminal {
    fn columns(&self) -> usize;
}

/// Queries the attached terminal, then `$COLUMNS`, then falls back to 80.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveTerminal;

impl Terminal for LiveTerminal {
    fn columns(&self) -> usize {
        if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
            return w as usize;
        }

        std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|columns| *columns > 0)
            .unwrap_or(DEFAULT_COLUMNS)
    }
}

/// A terminal with a known, fixed width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTerminal(pub usize);

impl Terminal for FixedTerminal {
    fn columns(&self) -> usize {
        self.0
    }
}

impl<T: Terminal + ?Sized> Terminal for &T {
    fn columns(&self) -> usize {
        (**self).columns()
    }
}
