//! Name and URL pattern tables for classification.
//!
//! Cookies are matched by name against per-category regex lists in a
//! fixed order (necessary first), so a name that could match two
//! categories lands in the stricter one. Unmatched cookies default to
//! `preferences` rather than `necessary`: an unknown cookie must stay
//! subject to consent. Scripts invert the default — an unmatched script
//! URL is treated as necessary and left alone.

use std::sync::LazyLock;

use consentry_types::CookieCategory;
use regex::Regex;
use url::Url;

struct PatternSet {
    category: CookieCategory,
    patterns: Vec<Regex>,
}

fn set(category: CookieCategory, sources: &[&str]) -> PatternSet {
    PatternSet {
        category,
        // The sources are literals defined below and always compile.
        patterns: sources.iter().filter_map(|s| Regex::new(s).ok()).collect(),
    }
}

static COOKIE_PATTERNS: LazyLock<Vec<PatternSet>> = LazyLock::new(|| {
    vec![
        set(
            CookieCategory::Necessary,
            &[
                r"(?i)^(PHPSESSID|JSESSIONID|ASP\.NET_SessionId|__RequestVerificationToken)$",
                r"(?i)^(csrf|xsrf)_?token$",
                r"(?i)^(auth|session|login)_?",
            ],
        ),
        set(
            CookieCategory::Preferences,
            &[
                r"(?i)^(lang|language|locale|timezone|theme|currency)_?",
                r"(?i)^(user_?preferences|settings)_?",
            ],
        ),
        set(
            CookieCategory::Statistics,
            &[
                r"(?i)^(_ga|_gid|_gat|__utm)",
                r"(?i)^(analytics|stats|tracking)_?",
                r"(?i)^(_hjSessionUser|_hjSession)",
            ],
        ),
        set(
            CookieCategory::Marketing,
            &[
                r"(?i)^(_fbp|_fbc|fr)",
                r"(?i)^(ads|marketing|campaign)_?",
                r"(?i)^(__gads|__gpi)",
            ],
        ),
    ]
});

static SCRIPT_PATTERNS: LazyLock<Vec<PatternSet>> = LazyLock::new(|| {
    vec![
        set(
            CookieCategory::Statistics,
            &[
                r"(?i)google-analytics\.com",
                r"(?i)googletagmanager\.com",
                r"(?i)hotjar\.com",
                r"(?i)mixpanel\.com",
            ],
        ),
        set(
            CookieCategory::Marketing,
            &[
                r"(?i)facebook\.net",
                r"(?i)connect\.facebook\.net",
                r"(?i)doubleclick\.net",
                r"(?i)googlesyndication\.com",
                r"(?i)adsystem\.amazon",
            ],
        ),
    ]
});

fn classify(tables: &[PatternSet], input: &str, fallback: CookieCategory) -> CookieCategory {
    for table in tables {
        if table.patterns.iter().any(|p| p.is_match(input)) {
            return table.category;
        }
    }
    fallback
}

/// Classifies a cookie by name. Unknown names are `preferences`.
#[must_use]
pub fn categorize_cookie(name: &str) -> CookieCategory {
    classify(&COOKIE_PATTERNS, name, CookieCategory::Preferences)
}

/// Classifies a script by its `src` URL. Unknown URLs are `necessary`
/// and therefore never blocked.
#[must_use]
pub fn categorize_script(src: &str) -> CookieCategory {
    classify(&SCRIPT_PATTERNS, src, CookieCategory::Necessary)
}

/// A human-readable name for a script URL, for banner details and scan
/// reports. Unrecognized hosts fall back to the hostname itself.
#[must_use]
pub fn script_display_name(src: &str) -> String {
    let Some(hostname) = Url::parse(src).ok().and_then(|u| u.host_str().map(String::from))
    else {
        return "Unknown Script".to_string();
    };

    let known = [
        ("google-analytics", "Google Analytics"),
        ("googletagmanager", "Google Tag Manager"),
        ("facebook", "Facebook Pixel"),
        ("hotjar", "Hotjar"),
        ("mixpanel", "Mixpanel"),
    ];
    for (needle, name) in known {
        if hostname.contains(needle) {
            return name.to_string();
        }
    }
    hostname
}
