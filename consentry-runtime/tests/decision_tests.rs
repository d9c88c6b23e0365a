//! Jurisdiction, language and visibility decisions.

use chrono::{Duration, TimeZone, Utc};
use consentry_config::{JurisdictionSetting, LanguageSetting};
use consentry_runtime::{resolve_jurisdiction, resolve_language, should_show_banner};
use consentry_types::{ConsentRecord, Jurisdiction};
use pretty_assertions::assert_eq;

// ── Jurisdiction ─────────────────────────────────────────────────────

#[test]
fn european_zones_resolve_to_gdpr() {
    for zone in ["Europe/Berlin", "Europe/Paris", "Europe/Madrid"] {
        assert_eq!(
            resolve_jurisdiction(&JurisdictionSetting::Auto, zone),
            Jurisdiction::Gdpr
        );
    }
}

#[test]
fn us_anchor_zones_resolve_to_ccpa() {
    assert_eq!(
        resolve_jurisdiction(&JurisdictionSetting::Auto, "America/Los_Angeles"),
        Jurisdiction::Ccpa
    );
    assert_eq!(
        resolve_jurisdiction(&JurisdictionSetting::Auto, "America/New_York"),
        Jurisdiction::Ccpa
    );
}

#[test]
fn sao_paulo_resolves_to_lgpd() {
    assert_eq!(
        resolve_jurisdiction(&JurisdictionSetting::Auto, "America/Sao_Paulo"),
        Jurisdiction::Lgpd
    );
}

#[test]
fn unknown_zones_default_to_gdpr() {
    assert_eq!(
        resolve_jurisdiction(&JurisdictionSetting::Auto, "Asia/Tokyo"),
        Jurisdiction::Gdpr
    );
}

#[test]
fn explicit_jurisdiction_wins_over_the_time_zone() {
    assert_eq!(
        resolve_jurisdiction(
            &JurisdictionSetting::Fixed(Jurisdiction::Ccpa),
            "Europe/Berlin"
        ),
        Jurisdiction::Ccpa
    );
}

// ── Language ─────────────────────────────────────────────────────────

#[test]
fn explicit_language_wins_over_the_locale() {
    assert_eq!(
        resolve_language(&LanguageSetting::Tag("fr".to_string()), Some("es-ES")),
        "fr"
    );
}

#[test]
fn auto_language_reads_the_locale_with_english_fallback() {
    assert_eq!(resolve_language(&LanguageSetting::Auto, Some("es-MX")), "es-MX");
    assert_eq!(resolve_language(&LanguageSetting::Auto, None), "en");
}

// ── Visibility ───────────────────────────────────────────────────────

#[test]
fn unset_consent_shows_the_banner() {
    let now = Utc::now();
    assert!(should_show_banner(
        &ConsentRecord::unset(),
        365,
        now,
        Jurisdiction::Gdpr
    ));
}

#[test]
fn a_fresh_decision_hides_the_banner() {
    let now = Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap();
    let record = ConsentRecord::accept_all(now);
    assert!(!should_show_banner(&record, 365, now, Jurisdiction::Gdpr));
}

#[test]
fn an_expired_decision_shows_the_banner_again() {
    let decided = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let record = ConsentRecord::accept_all(decided);
    let later = decided + Duration::days(366);
    assert!(should_show_banner(&record, 365, later, Jurisdiction::Gdpr));
}

#[test]
fn an_exempt_jurisdiction_suppresses_the_banner_in_any_state() {
    let now = Utc::now();
    assert!(!should_show_banner(
        &ConsentRecord::unset(),
        365,
        now,
        Jurisdiction::Exempt
    ));
}
