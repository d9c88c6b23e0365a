//! Caller-facing option types.
//!
//! Every keyword-valued option parses infallibly: unrecognized values are
//! carried in an `Other` variant and resolved to a default branch by the
//! consumer, never rejected at merge time.

use consentry_types::Jurisdiction;
use serde::{Deserialize, Serialize};

macro_rules! keyword_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Unrecognized keyword, resolved defensively at the point of use.
            Other(String),
        }

        impl $name {
            /// The configuration keyword for this value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($text => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                v.as_str().to_string()
            }
        }
    };
}

keyword_enum! {
    /// Banner layout: a floating card or a full-width edge bar.
    Layout {
        Dialog => "dialog",
        Bar => "bar",
    }
}

keyword_enum! {
    /// Banner anchor position. `Center` applies to the dialog layout only.
    Position {
        Top => "top",
        Bottom => "bottom",
        Center => "center",
    }
}

keyword_enum! {
    /// Color theme. `Custom` reads the configured custom colors verbatim.
    Theme {
        Light => "light",
        Dark => "dark",
        Custom => "custom",
    }
}

keyword_enum! {
    /// How button colors are applied, independent of theme.
    ButtonStyle {
        Default => "default",
        Solid => "solid",
        Outline => "outline",
    }
}

keyword_enum! {
    /// Which button set and consent controls the banner presents.
    BannerType {
        Multilevel => "multilevel",
        AcceptOnly => "accept-only",
        AcceptDecline => "accept-decline",
        InlineMultilevel => "inline-multilevel",
        Ccpa => "ccpa",
    }
}

/// Jurisdiction option: automatic detection or a fixed jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JurisdictionSetting {
    Auto,
    Fixed(Jurisdiction),
}

impl From<&str> for JurisdictionSetting {
    fn from(s: &str) -> Self {
        match s.parse::<Jurisdiction>() {
            Ok(j) => JurisdictionSetting::Fixed(j),
            // "auto" and anything unrecognized fall back to detection.
            Err(()) => JurisdictionSetting::Auto,
        }
    }
}

impl From<String> for JurisdictionSetting {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<JurisdictionSetting> for String {
    fn from(v: JurisdictionSetting) -> String {
        match v {
            JurisdictionSetting::Auto => "auto".to_string(),
            JurisdictionSetting::Fixed(j) => j.as_str().to_string(),
        }
    }
}

/// Language option: automatic detection or a fixed ISO 639-1 tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageSetting {
    Auto,
    Tag(String),
}

impl From<&str> for LanguageSetting {
    fn from(s: &str) -> Self {
        if s.is_empty() || s == "auto" {
            LanguageSetting::Auto
        } else {
            LanguageSetting::Tag(s.to_string())
        }
    }
}

impl From<String> for LanguageSetting {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<LanguageSetting> for String {
    fn from(v: LanguageSetting) -> String {
        match v {
            LanguageSetting::Auto => "auto".to_string(),
            LanguageSetting::Tag(tag) => tag,
        }
    }
}

/// The full custom color palette used when the theme is `custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomColors {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub button_primary: String,
    pub button_secondary: String,
    pub overlay_color: String,
}

impl Default for CustomColors {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#333333".to_string(),
            accent: "#007bff".to_string(),
            button_primary: "#007bff".to_string(),
            button_secondary: "#6c757d".to_string(),
            overlay_color: "rgba(0, 0, 0, 0.5)".to_string(),
        }
    }
}

/// Partial custom colors as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorPatch {
    pub background: Option<String>,
    pub text: Option<String>,
    pub accent: Option<String>,
    pub button_primary: Option<String>,
    pub button_secondary: Option<String>,
    pub overlay_color: Option<String>,
}

impl ColorPatch {
    /// Overlays the patch on a base palette.
    #[must_use]
    pub fn apply(self, mut base: CustomColors) -> CustomColors {
        if let Some(v) = self.background {
            base.background = v;
        }
        if let Some(v) = self.text {
            base.text = v;
        }
        if let Some(v) = self.accent {
            base.accent = v;
        }
        if let Some(v) = self.button_primary {
            base.button_primary = v;
        }
        if let Some(v) = self.button_secondary {
            base.button_secondary = v;
        }
        if let Some(v) = self.overlay_color {
            base.overlay_color = v;
        }
        base
    }
}

/// Initial checked state of the granular consent checkboxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckboxDefaults {
    pub preferences: bool,
    pub statistics: bool,
    pub marketing: bool,
}

/// Caller-supplied partial configuration.
///
/// Unknown JSON keys are ignored. Legacy fields (`bannerPosition`,
/// `bannerStyle`, `primaryColor`) are resolved by the alias pass in
/// [`crate::merge`] before canonical fields are read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub domain: Option<String>,
    pub api_endpoint: Option<String>,
    pub client_id: Option<String>,

    pub layout: Option<Layout>,
    pub position: Option<Position>,
    pub overlay: Option<bool>,
    pub slide_in: Option<bool>,

    pub theme: Option<Theme>,
    pub custom_colors: Option<ColorPatch>,
    pub button_style: Option<ButtonStyle>,
    pub banner_type: Option<BannerType>,

    pub show_close_icon: Option<bool>,
    pub checkbox_defaults: Option<CheckboxDefaults>,

    pub show_logo: Option<bool>,
    pub logo_url: Option<String>,
    pub company_name: Option<String>,

    pub auto_block: Option<bool>,
    pub consent_expiry: Option<u32>,
    pub show_decline_button: Option<bool>,
    pub granular_consent: Option<bool>,

    pub enable_affiliate_ads: Option<bool>,
    pub max_affiliate_ads: Option<u32>,
    pub revenue_share: Option<f64>,
    pub enable_privacy_insights: Option<bool>,
    pub insights_delay_ms: Option<u64>,
    pub insights_display_ms: Option<u64>,

    pub jurisdiction: Option<JurisdictionSetting>,
    pub language: Option<LanguageSetting>,

    pub mobile_breakpoint: Option<u32>,
    pub tablet_breakpoint: Option<u32>,

    // Legacy aliases, resolved once at merge time.
    pub banner_position: Option<Position>,
    pub banner_style: Option<String>,
    pub primary_color: Option<String>,

    #[serde(skip)]
    pub callbacks: crate::Callbacks,
}

impl Options {
    /// Parses options from a JSON value, ignoring unknown keys.
    ///
    /// Malformed values for individual fields fail the whole parse; callers
    /// that need best-effort ingestion (the bootstrap layer) coerce
    /// per-field instead.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
