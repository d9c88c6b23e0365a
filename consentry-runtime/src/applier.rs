//! Consent application: script blocking and cookie deletion.

use consentry_host::HostPage;
use consentry_types::{ConsentRecord, Inventory};
use tracing::debug;

/// Marker attribute set on scripts this system made inert.
pub const BLOCKED_MARKER: &str = "data-consent-blocked";

const INERT_TYPE: &str = "text/plain";
const EXECUTABLE_TYPE: &str = "text/javascript";
const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 UTC";

/// Applies the consent record to the detected inventory.
///
/// Non-consented scripts are made inert by rewriting their type and
/// tagging them with [`BLOCKED_MARKER`]; scripts regaining consent are
/// restored and untagged. Both directions are idempotent. Non-consented
/// cookies are deleted at all three scopes they may have been set at.
/// A global no-op when `autoBlock` is off.
pub fn apply_consent(
    page: &mut dyn HostPage,
    inventory: &Inventory,
    record: &ConsentRecord,
    auto_block: bool,
) {
    if !auto_block {
        return;
    }

    let mut blocked = 0usize;
    for script in &inventory.scripts {
        if record.grants(script.category) {
            if page.has_script_marker(script.element, BLOCKED_MARKER) {
                page.set_script_type(script.element, EXECUTABLE_TYPE);
                page.remove_script_marker(script.element, BLOCKED_MARKER);
            }
        } else {
            page.set_script_type(script.element, INERT_TYPE);
            page.set_script_marker(script.element, BLOCKED_MARKER, "true");
            blocked += 1;
        }
    }

    let hostname = page.hostname();
    let mut deleted = 0usize;
    for cookie in &inventory.cookies {
        if cookie.category.is_necessary() || record.grants(cookie.category) {
            continue;
        }
        delete_cookie(page, &cookie.name, &hostname);
        deleted += 1;
    }

    debug!(blocked, deleted, "consent applied");
}

/// Deletes a cookie by expiring it at host-only, explicit-hostname and
/// parent-domain scope.
fn delete_cookie(page: &mut dyn HostPage, name: &str, hostname: &str) {
    page.write_cookie(&format!("{name}=; expires={EXPIRED}; path=/;"));
    page.write_cookie(&format!(
        "{name}=; expires={EXPIRED}; path=/; domain={hostname};"
    ));
    page.write_cookie(&format!(
        "{name}=; expires={EXPIRED}; path=/; domain=.{hostname};"
    ));
}
