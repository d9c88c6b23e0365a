use chrono::{TimeZone, Utc};
use consentry_host::consent::{load_consent, save_consent, CONSENT_KEY};
use consentry_host::{HostPage, MemoryPage, MemoryStore};
use consentry_types::ConsentRecord;
use pretty_assertions::assert_eq;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

// ── Primary tier ─────────────────────────────────────────────────

#[test]
fn roundtrip_through_primary_store() {
    let mut store = MemoryStore::new();
    let mut page = MemoryPage::new();
    let record = ConsentRecord::accept_all(now());

    save_consent(&mut store, &mut page, &record, 365, now());
    assert!(store.raw_get(CONSENT_KEY).is_some());
    // Nothing leaked into the cookie tier.
    assert!(page.cookie_pairs().is_empty());

    let loaded = load_consent(&store, &page);
    assert_eq!(loaded, Some(record));
}

#[test]
fn absent_key_means_unset() {
    let store = MemoryStore::new();
    let page = MemoryPage::new();
    assert_eq!(load_consent(&store, &page), None);
}

#[test]
fn malformed_primary_value_falls_back_to_cookie() {
    let mut store = MemoryStore::new();
    store.raw_set(CONSENT_KEY, "{not json");

    // Cookie tier holds a valid record.
    let record = ConsentRecord::decline_all(now());
    let mut unavailable = MemoryStore::new();
    unavailable.set_unavailable(true);
    let mut page = MemoryPage::new();
    save_consent(&mut unavailable, &mut page, &record, 365, now());

    assert_eq!(load_consent(&store, &page), Some(record));
}

#[test]
fn malformed_everything_degrades_to_none() {
    let mut store = MemoryStore::new();
    store.set_unavailable(true);
    let page = MemoryPage::new().with_cookie(CONSENT_KEY, "%7Bnot-json");
    assert_eq!(load_consent(&store, &page), None);
}

// ── Cookie tier ──────────────────────────────────────────────────

#[test]
fn roundtrip_through_cookie_fallback() {
    let mut store = MemoryStore::new();
    store.set_unavailable(true);
    let mut page = MemoryPage::new();
    let record = ConsentRecord::ccpa(true, now());

    save_consent(&mut store, &mut page, &record, 30, now());
    assert!(store.raw_get(CONSENT_KEY).is_none());
    assert_eq!(page.cookie_pairs().len(), 1);
    assert_eq!(page.cookie_pairs()[0].0, CONSENT_KEY);

    let loaded = load_consent(&store, &page);
    assert_eq!(loaded, Some(record));
}

#[test]
fn cookie_value_is_url_encoded_json() {
    let mut store = MemoryStore::new();
    store.set_unavailable(true);
    let mut page = MemoryPage::new();
    save_consent(
        &mut store,
        &mut page,
        &ConsentRecord::accept_all(now()),
        365,
        now(),
    );

    let raw = &page.cookie_pairs()[0].1;
    // Braces and quotes must not appear raw inside a cookie value.
    assert!(!raw.contains('{'));
    assert!(!raw.contains('"'));
    assert!(raw.contains("%7B"));
}

// ── Memory page cookie semantics ─────────────────────────────────

#[test]
fn past_expiry_deletes_cookie() {
    let mut page = MemoryPage::new().with_cookie("x", "1");
    page.write_cookie("x=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;");
    assert!(page.cookie_pairs().is_empty());
}

#[test]
fn future_expiry_keeps_cookie() {
    let mut page = MemoryPage::new();
    page.write_cookie("y=2; expires=Fri, 01 Jan 2100 00:00:00 GMT; path=/");
    assert_eq!(page.cookie_pairs(), &[("y".to_string(), "2".to_string())]);
}

#[test]
fn write_replaces_existing_cookie() {
    let mut page = MemoryPage::new().with_cookie("z", "old");
    page.write_cookie("z=new");
    assert_eq!(page.cookie_pairs(), &[("z".to_string(), "new".to_string())]);
}
