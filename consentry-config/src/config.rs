//! Canonical configuration and the merge pass.

use crate::options::{
    BannerType, ButtonStyle, CheckboxDefaults, CustomColors, JurisdictionSetting, LanguageSetting,
    Layout, Options, Position, Theme,
};
use crate::Callbacks;

/// Default backend endpoint for detection reports and monetization calls.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.consentry.io";

/// The canonical, fully-populated runtime configuration.
///
/// Immutable after initialization: the runtime never writes back into it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host domain; `None` means "resolve from the host page at init".
    pub domain: Option<String>,
    pub api_endpoint: String,
    pub client_id: Option<String>,

    pub layout: Layout,
    pub position: Position,
    pub overlay: bool,
    pub slide_in: bool,

    pub theme: Theme,
    pub custom_colors: CustomColors,
    pub button_style: ButtonStyle,
    pub banner_type: BannerType,

    pub show_close_icon: bool,
    pub checkbox_defaults: CheckboxDefaults,

    pub show_logo: bool,
    pub logo_url: Option<String>,
    pub company_name: String,

    pub auto_block: bool,
    pub consent_expiry_days: u32,
    pub show_decline_button: bool,
    pub granular_consent: bool,

    pub enable_affiliate_ads: bool,
    pub max_affiliate_ads: u32,
    pub revenue_share: f64,
    pub enable_privacy_insights: bool,
    pub insights_delay_ms: u64,
    pub insights_display_ms: u64,

    pub jurisdiction: JurisdictionSetting,
    pub language: LanguageSetting,

    pub mobile_breakpoint: u32,
    pub tablet_breakpoint: u32,

    pub callbacks: Callbacks,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            client_id: None,

            layout: Layout::Dialog,
            position: Position::Bottom,
            overlay: true,
            slide_in: true,

            theme: Theme::Light,
            custom_colors: CustomColors::default(),
            button_style: ButtonStyle::Default,
            banner_type: BannerType::Multilevel,

            show_close_icon: false,
            checkbox_defaults: CheckboxDefaults::default(),

            show_logo: true,
            logo_url: None,
            company_name: String::new(),

            auto_block: true,
            consent_expiry_days: 365,
            show_decline_button: true,
            granular_consent: true,

            enable_affiliate_ads: true,
            max_affiliate_ads: 2,
            revenue_share: 0.6,
            enable_privacy_insights: false,
            insights_delay_ms: 5_000,
            insights_display_ms: 15_000,

            jurisdiction: JurisdictionSetting::Auto,
            language: LanguageSetting::Auto,

            mobile_breakpoint: 600,
            tablet_breakpoint: 1280,

            callbacks: Callbacks::default(),
        }
    }
}

/// Resolves the legacy aliases in one deterministic pass.
///
/// The alias table, applied only where the canonical field is absent:
/// - `bannerPosition` → `position`
/// - `bannerStyle`    → `theme` (the historical `"modern"` maps to light)
/// - `primaryColor`   → `customColors.accent` and `customColors.buttonPrimary`
fn resolve_aliases(options: &mut Options) {
    if options.position.is_none() {
        options.position = options.banner_position.take();
    }

    if options.theme.is_none() {
        if let Some(style) = options.banner_style.take() {
            options.theme = Some(match style.as_str() {
                "modern" => Theme::Light,
                other => Theme::from(other),
            });
        }
    }

    if let Some(color) = options.primary_color.take() {
        let patch = options.custom_colors.get_or_insert_with(Default::default);
        if patch.accent.is_none() {
            patch.accent = Some(color.clone());
        }
        if patch.button_primary.is_none() {
            patch.button_primary = Some(color);
        }
    }
}

/// Merges caller options over the compiled-in defaults.
///
/// Total by contract: never fails, every canonical field is populated.
/// Out-of-range numeric values degrade to their defaults rather than
/// erroring (`consentExpiry` must be positive, `revenueShare` is clamped
/// to `[0, 1]`).
#[must_use]
pub fn merge(mut options: Options) -> Config {
    resolve_aliases(&mut options);

    let defaults = Config::default();
    let mut config = Config {
        domain: options.domain.or(defaults.domain),
        api_endpoint: options.api_endpoint.unwrap_or(defaults.api_endpoint),
        client_id: options.client_id.or(defaults.client_id),

        layout: options.layout.unwrap_or(defaults.layout),
        position: options.position.unwrap_or(defaults.position),
        overlay: options.overlay.unwrap_or(defaults.overlay),
        slide_in: options.slide_in.unwrap_or(defaults.slide_in),

        theme: options.theme.unwrap_or(defaults.theme),
        custom_colors: match options.custom_colors {
            Some(patch) => patch.apply(defaults.custom_colors),
            None => defaults.custom_colors,
        },
        button_style: options.button_style.unwrap_or(defaults.button_style),
        banner_type: options.banner_type.unwrap_or(defaults.banner_type),

        show_close_icon: options.show_close_icon.unwrap_or(defaults.show_close_icon),
        checkbox_defaults: options
            .checkbox_defaults
            .unwrap_or(defaults.checkbox_defaults),

        show_logo: options.show_logo.unwrap_or(defaults.show_logo),
        logo_url: options.logo_url.or(defaults.logo_url),
        company_name: options.company_name.unwrap_or(defaults.company_name),

        auto_block: options.auto_block.unwrap_or(defaults.auto_block),
        consent_expiry_days: options
            .consent_expiry
            .filter(|days| *days > 0)
            .unwrap_or(defaults.consent_expiry_days),
        show_decline_button: options
            .show_decline_button
            .unwrap_or(defaults.show_decline_button),
        granular_consent: options
            .granular_consent
            .unwrap_or(defaults.granular_consent),

        enable_affiliate_ads: options
            .enable_affiliate_ads
            .unwrap_or(defaults.enable_affiliate_ads),
        max_affiliate_ads: options
            .max_affiliate_ads
            .unwrap_or(defaults.max_affiliate_ads),
        revenue_share: options
            .revenue_share
            .filter(|share| share.is_finite())
            .unwrap_or(defaults.revenue_share),
        enable_privacy_insights: options
            .enable_privacy_insights
            .unwrap_or(defaults.enable_privacy_insights),
        insights_delay_ms: options
            .insights_delay_ms
            .unwrap_or(defaults.insights_delay_ms),
        insights_display_ms: options
            .insights_display_ms
            .unwrap_or(defaults.insights_display_ms),

        jurisdiction: options.jurisdiction.unwrap_or(defaults.jurisdiction),
        language: options.language.unwrap_or(defaults.language),

        mobile_breakpoint: options
            .mobile_breakpoint
            .unwrap_or(defaults.mobile_breakpoint),
        tablet_breakpoint: options
            .tablet_breakpoint
            .unwrap_or(defaults.tablet_breakpoint),

        callbacks: options.callbacks,
    };

    config.revenue_share = config.revenue_share.clamp(0.0, 1.0);
    config
}
