//! Visual tokens consumed by the styling layer.
//!
//! The accent color and font family are passed around as an explicit
//! `Theme` value rather than looked up from ambient context, so style
//! builders stay pure functions of their inputs.

use crate::app_settings::AppSettings;

pub const DEFAULT_ACCENT: &str = "#7aa2f7";
pub const DEFAULT_FONT: &str = "'Inter', 'Segoe UI', sans-serif";

/// Accent colors offered by the appearance section.
pub const ACCENT_PALETTE: &[&str] = &[
    "#7aa2f7", // blue
    "#9ece6a", // green
    "#e0af68", // amber
    "#f7768e", // red
    "#bb9af7", // purple
    "#2ac3de", // cyan
];

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub accent: String,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            accent: DEFAULT_ACCENT.to_string(),
            font_family: DEFAULT_FONT.to_string(),
        }
    }
}

impl Theme {
    /// Derives the tokens from the current settings. Any non-empty string
    /// is taken as the accent verbatim; color values are never validated.
    pub fn from_settings(settings: &AppSettings) -> Self {
        let accent = if settings.accent_color.is_empty() {
            DEFAULT_ACCENT.to_string()
        } else {
            settings.accent_color.clone()
        };
        Theme {
            accent,
            font_family: DEFAULT_FONT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accent_is_in_palette() {
        assert!(ACCENT_PALETTE.contains(&DEFAULT_ACCENT));
    }

    #[test]
    fn empty_accent_falls_back_to_default() {
        let mut settings = AppSettings::default();
        settings.accent_color = String::new();
        assert_eq!(Theme::from_settings(&settings).accent, DEFAULT_ACCENT);
    }

    #[test]
    fn accent_passes_through_unvalidated() {
        let mut settings = AppSettings::default();
        settings.accent_color = "not-a-color".to_string();
        assert_eq!(Theme::from_settings(&settings).accent, "not-a-color");
    }
}
