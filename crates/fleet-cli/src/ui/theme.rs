//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};

use crate::preferences::ThemeName;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
            (Self::Info, true) => "[\u{2139}]",
            (Self::Info, false) => "[INFO]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => Style::new().green(),
            Self::Warn => Style::new().yellow(),
            Self::Err => Style::new().red(),
            Self::Info => Style::new().cyan(),
        }
    }
}

/// Common text styles.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }
}

/// Accent colour derived from the theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accent(ThemeName);

impl Accent {
    pub fn new(theme: ThemeName) -> Self {
        Self(theme)
    }

    /// Style for titles and highlighted values.
    pub fn style(&self) -> Style {
        match self.0 {
            ThemeName::Light => Style::new().blue().bold(),
            ThemeName::Dark => Style::new().bright_cyan().bold(),
        }
    }
}

/// Apply `style` to `text` when colour is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
