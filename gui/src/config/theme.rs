// Theme specific configurations (colors)
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
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
    pub foreground: String,
    pub surface: String,
    pub primary: String,
    pub muted: String,
    pub danger: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            surface: "#2a2a2e".to_string(),
            primary: "#4f8cc9".to_string(),
            muted: "#8a8f98".to_string(),
            danger: "#ef5350".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#f7f7f9".to_string(),
            foreground: "#1f2328".to_string(),
            surface: "#ffffff".to_string(),
            primary: "#005fb8".to_string(),
            muted: "#6e7781".to_string(),
            danger: "#c62828".to_string(),
        }
    }

    /// Inline style for the app root. The stylesheet reads the colors through CSS variables.
    pub fn root_style(&self) -> String {
        format!(
            "background-color: {}; color: {}; --surface: {}; --primary: {}; --muted: {}; --danger: {};",
            self.background, self.foreground, self.surface, self.primary, self.muted, self.danger
        )
    }
}
