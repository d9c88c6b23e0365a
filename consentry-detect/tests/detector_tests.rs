//! Full page scans against an in-memory host page.

use consentry_detect::detect;
use consentry_host::{HostPage, MemoryPage};
use consentry_types::CookieCategory;
use pretty_assertions::assert_eq;

#[test]
fn scan_collects_cookies_and_tracking_scripts() {
    let mut page = MemoryPage::new()
        .with_hostname("shop.example")
        .with_cookie("PHPSESSID", "abc123")
        .with_cookie("_ga", "GA1.2.3.4")
        .with_cookie("wishlist", "42");
    let ga = page.add_script("https://www.google-analytics.com/analytics.js");
    page.add_script("https://shop.example/app.js");

    let inventory = detect(&page);

    assert_eq!(inventory.cookies.len(), 3);
    let ga_cookie = &inventory.cookies[1];
    assert_eq!(ga_cookie.name, "_ga");
    assert_eq!(ga_cookie.category, CookieCategory::Statistics);
    assert_eq!(ga_cookie.domain, "shop.example");
    assert_eq!(ga_cookie.path, "/");
    assert!(!ga_cookie.http_only);

    // The first-party script is necessary and therefore not recorded.
    assert_eq!(inventory.scripts.len(), 1);
    assert_eq!(inventory.scripts[0].name, "Google Analytics");
    assert_eq!(inventory.scripts[0].category, CookieCategory::Statistics);
    assert_eq!(inventory.scripts[0].element, ga);
}

#[test]
fn malformed_cookie_segments_are_skipped() {
    let page = MemoryPage::new()
        .with_cookie("valid", "1")
        .with_cookie("empty_value", "");

    let inventory = detect(&page);
    assert_eq!(inventory.cookies.len(), 1);
    assert_eq!(inventory.cookies[0].name, "valid");

    let empty = MemoryPage::new();
    assert!(detect(&empty).is_empty());
}

#[test]
fn secure_flag_mirrors_the_page_scheme() {
    let page = MemoryPage::new().with_cookie("theme", "dark");
    let inventory = detect(&page);
    assert_eq!(inventory.cookies[0].secure, page.is_secure());
    assert_eq!(inventory.cookies[0].category, CookieCategory::Preferences);
}
