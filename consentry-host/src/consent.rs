//! Two-tier consent persistence.
//!
//! The primary key-value store is tried first; any failure falls through
//! to a same-named cookie carrying URL-encoded JSON. No failure ever
//! reaches the caller — both tiers degrading leaves the consent "unset"
//! on load and drops the write on save.

use crate::page::HostPage;
use crate::store::KeyValueStore;
use chrono::{DateTime, Duration, Utc};
use consentry_types::ConsentRecord;
use tracing::warn;

/// The single storage key (and fallback cookie name) used for consent.
pub const CONSENT_KEY: &str = "consentry-consent";

/// Loads the stored consent record, if any tier holds a readable one.
pub fn load_consent<S: KeyValueStore, P: HostPage + ?Sized>(
    store: &S,
    page: &P,
) -> Option<ConsentRecord> {
    match store.get(CONSENT_KEY) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(record) => return Some(record),
            Err(err) => {
                warn!(error = %err, "stored consent is malformed; trying cookie tier");
            }
        },
        // An absent key is a definitive answer from a working store.
        Ok(None) => return None,
        Err(err) => {
            warn!(error = %err, "primary consent store unavailable; trying cookie tier");
        }
    }

    load_from_cookie(page)
}

fn load_from_cookie<P: HostPage + ?Sized>(page: &P) -> Option<ConsentRecord> {
    let header = page.cookie_header();
    let encoded = header.split(';').find_map(|cookie| {
        let (name, value) = cookie.trim().split_once('=')?;
        (name == CONSENT_KEY).then(|| value.to_string())
    })?;

    let decoded = match urlencoding::decode(&encoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            warn!(error = %err, "consent cookie is not valid UTF-8");
            return None;
        }
    };

    match serde_json::from_str(&decoded) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(error = %err, "consent cookie holds malformed JSON");
            None
        }
    }
}

/// Persists the consent record: primary store first, cookie on failure.
pub fn save_consent<S: KeyValueStore, P: HostPage + ?Sized>(
    store: &mut S,
    page: &mut P,
    record: &ConsentRecord,
    expiry_days: u32,
    now: DateTime<Utc>,
) {
    let json = match serde_json::to_string(record) {
        Ok(json) => json,
        Err(err) => {
            warn!(error = %err, "consent record failed to serialize; dropping write");
            return;
        }
    };

    if let Err(err) = store.set(CONSENT_KEY, &json) {
        warn!(error = %err, "primary consent store rejected write; using cookie tier");
        let expires = http_date(now + Duration::days(i64::from(expiry_days)));
        let encoded = urlencoding::encode(&json);
        page.write_cookie(&format!(
            "{CONSENT_KEY}={encoded}; expires={expires}; path=/"
        ));
    }
}

/// Formats an instant as an HTTP cookie expiry date.
fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
