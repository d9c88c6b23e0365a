//! The page scan.

use consentry_host::HostPage;
use consentry_types::{CookieEntry, Inventory, ScriptEntry};
use tracing::debug;

use crate::patterns::{categorize_cookie, categorize_script, script_display_name};

/// Scans the host page once and returns everything found.
///
/// Cookie segments without a name or without a value are skipped, the
/// same way a malformed `document.cookie` fragment would be. Scripts
/// classified as necessary are not recorded at all: they are outside the
/// consent system.
pub fn detect(page: &dyn HostPage) -> Inventory {
    let hostname = page.hostname();
    let secure = page.is_secure();

    let mut inventory = Inventory::default();

    for segment in page.cookie_header().split(';') {
        let Some((name, value)) = segment.trim().split_once('=') else {
            continue;
        };
        if name.is_empty() || value.is_empty() {
            continue;
        }
        inventory.cookies.push(CookieEntry {
            name: name.to_string(),
            value: Some(value.to_string()),
            category: categorize_cookie(name),
            domain: hostname.clone(),
            path: "/".to_string(),
            secure,
            http_only: false,
        });
    }

    for tag in page.script_tags() {
        let category = categorize_script(&tag.src);
        if category.is_necessary() {
            continue;
        }
        inventory.scripts.push(ScriptEntry {
            name: script_display_name(&tag.src),
            src: tag.src,
            category,
            element: tag.id,
        });
    }

    debug!(
        cookies = inventory.cookies.len(),
        scripts = inventory.scripts.len(),
        "page scan complete"
    );
    inventory
}
