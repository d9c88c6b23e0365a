//! Theme palettes.

use consentry_config::{CustomColors, Theme};

/// The resolved color set a banner is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub button_primary: String,
    pub button_secondary: String,
    pub overlay_color: String,
    pub border: String,
}

fn light() -> Palette {
    Palette {
        background: "#ffffff".to_string(),
        text: "#333333".to_string(),
        accent: "#007bff".to_string(),
        button_primary: "#007bff".to_string(),
        button_secondary: "#6c757d".to_string(),
        overlay_color: "rgba(0, 0, 0, 0.5)".to_string(),
        border: "#e9ecef".to_string(),
    }
}

fn dark() -> Palette {
    Palette {
        background: "#2d3748".to_string(),
        text: "#ffffff".to_string(),
        accent: "#63b3ed".to_string(),
        button_primary: "#63b3ed".to_string(),
        button_secondary: "#a0aec0".to_string(),
        overlay_color: "rgba(0, 0, 0, 0.7)".to_string(),
        border: "#4a5568".to_string(),
    }
}

/// Resolves the palette for a theme.
///
/// `custom` takes the configured colors verbatim (with the light border,
/// which custom colors do not carry); unrecognized themes draw as light.
#[must_use]
pub fn palette(theme: &Theme, custom: &CustomColors) -> Palette {
    match theme {
        Theme::Dark => dark(),
        Theme::Custom => Palette {
            background: custom.background.clone(),
            text: custom.text.clone(),
            accent: custom.accent.clone(),
            button_primary: custom.button_primary.clone(),
            button_secondary: custom.button_secondary.clone(),
            overlay_color: custom.overlay_color.clone(),
            border: light().border,
        },
        Theme::Light | Theme::Other(_) => light(),
    }
}
