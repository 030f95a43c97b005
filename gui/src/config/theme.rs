// Theme specific configurations (colors used by the panels around the chart)
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Anything other than "light" falls back to the dark theme.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Dark => ThemePalette::default_dark(),
            Theme::Light => ThemePalette::default_light(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    pub border: String,
    pub primary: String,
    pub row: String,
    pub bullish: String,
    pub bearish: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#121212".to_string(),
            surface: "#1E1E1E".to_string(),
            foreground: "#ffffff".to_string(),
            muted: "#9ca3af".to_string(),
            border: "#374151".to_string(),
            primary: "#2563eb".to_string(),
            row: "#1f2937".to_string(),
            bullish: "#22c55e".to_string(),
            bearish: "#ef4444".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#f3f4f6".to_string(),
            surface: "#ffffff".to_string(),
            foreground: "#111827".to_string(),
            muted: "#6b7280".to_string(),
            border: "#d1d5db".to_string(),
            primary: "#2563eb".to_string(),
            row: "#e5e7eb".to_string(),
            bullish: "#16a34a".to_string(),
            bearish: "#dc2626".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("Light"), Theme::Light);
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("solarized"), Theme::Dark);
        assert_eq!(Theme::Light.palette().surface, "#ffffff");
    }
}
