//! Colour themes for the terminal interface.

mod light;
mod slate;

pub use light::LIGHT;
pub use slate::SLATE;

use ratatui::style::Style;

/// Styling hooks the renderer pulls from.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Section titles and the results header.
    pub header: Style,
    /// Field labels and the form prompt.
    pub prompt: Style,
    /// Focused form field and scholarship names.
    pub highlight: Style,
    /// Background of the selected result card.
    pub row_highlight: Style,
    /// Placeholders and empty-state messages.
    pub empty: Style,
    /// User-visible failure lines.
    pub error: Style,
    /// Loading gauge fill.
    pub gauge: Style,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        self.error
    }

    #[must_use]
    pub fn gauge_style(&self) -> Style {
        self.gauge
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

const BUILT_INS: &[(&str, Theme)] = &[("light", LIGHT), ("slate", SLATE)];

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
    SLATE
}

/// Lookup a theme by case-insensitive name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let normalized = name.trim().to_ascii_lowercase();
    BUILT_INS
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map(|(_, theme)| *theme)
}

/// Return the theme names known to the UI, sorted alphabetically.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILT_INS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_are_found_by_name() {
        assert!(by_name("slate").is_some());
        assert!(by_name(" Light ").is_some());
        assert!(by_name("nonexistent").is_none());
    }

    #[test]
    fn names_cover_every_builtin() {
        assert_eq!(names(), vec!["light", "slate"]);
    }
}
