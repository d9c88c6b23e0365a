//! Jurisdiction, language and banner-visibility decisions.

use chrono::{DateTime, Utc};
use consentry_config::{JurisdictionSetting, LanguageSetting};
use consentry_types::{ConsentRecord, ConsentState, Jurisdiction};

/// Resolves the effective jurisdiction.
///
/// Explicit configuration wins; otherwise the IANA time zone decides:
/// any `Europe/` zone maps to GDPR, the two mainland-US anchor zones to
/// CCPA, São Paulo to LGPD, everything else to GDPR as the strictest
/// default.
#[must_use]
pub fn resolve_jurisdiction(setting: &JurisdictionSetting, time_zone: &str) -> Jurisdiction {
    if let JurisdictionSetting::Fixed(jurisdiction) = setting {
        return *jurisdiction;
    }

    if time_zone.starts_with("Europe/") {
        Jurisdiction::Gdpr
    } else if time_zone == "America/Los_Angeles" || time_zone == "America/New_York" {
        Jurisdiction::Ccpa
    } else if time_zone == "America/Sao_Paulo" {
        Jurisdiction::Lgpd
    } else {
        Jurisdiction::Gdpr
    }
}

/// Resolves the banner language: explicit config, else host locale,
/// else English.
#[must_use]
pub fn resolve_language(setting: &LanguageSetting, locale: Option<&str>) -> String {
    match setting {
        LanguageSetting::Tag(tag) => tag.clone(),
        LanguageSetting::Auto => locale.unwrap_or("en").to_string(),
    }
}

/// Whether the banner must be shown for the current state.
///
/// An exempt jurisdiction suppresses the banner regardless of state.
/// No built-in resolution produces `Exempt` today; the branch is the
/// extension point for notice-free jurisdictions.
#[must_use]
pub fn should_show_banner(
    record: &ConsentRecord,
    expiry_days: u32,
    now: DateTime<Utc>,
    jurisdiction: Jurisdiction,
) -> bool {
    if jurisdiction.is_exempt() {
        return false;
    }
    record.state(expiry_days, now) != ConsentState::Decided
}
