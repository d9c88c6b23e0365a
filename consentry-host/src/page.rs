//! The host page seam.

use consentry_types::{Node, ScriptRef};
use std::collections::BTreeMap;

/// A `<script src>` element visible on the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
    pub id: ScriptRef,
    pub src: String,
}

/// Everything the runtime needs from the embedding document.
///
/// The runtime does not own the page: it shares it with arbitrary
/// host-page code. All UI insertions go through reserved root element ids
/// so duplicate banners can be detected, and script elements are only
/// reached through the opaque [`ScriptRef`] handles returned by
/// [`script_tags`](Self::script_tags).
pub trait HostPage {
    // ── Environment ──────────────────────────────────────────────

    fn hostname(&self) -> String;
    fn page_url(&self) -> String;
    fn page_title(&self) -> String;
    /// Whether the page was served over HTTPS.
    fn is_secure(&self) -> bool;
    /// The IANA time zone reported by the environment.
    fn time_zone(&self) -> String;
    /// The BCP 47 locale reported by the environment, if any.
    fn locale(&self) -> Option<String>;
    /// The `data-*` attributes of the embedding script tag, if the page
    /// carries one. `None` means manual instantiation.
    fn bootstrap_attrs(&self) -> Option<BTreeMap<String, String>>;

    // ── Cookies ──────────────────────────────────────────────────

    /// The document cookie string (`"a=1; b=2"`).
    fn cookie_header(&self) -> String;
    /// Writes one `Set-Cookie`-style assignment (`"name=v; path=/; ..."`),
    /// with past expiry dates deleting the cookie.
    fn write_cookie(&mut self, assignment: &str);

    // ── Script elements ──────────────────────────────────────────

    fn script_tags(&self) -> Vec<ScriptTag>;
    fn script_type(&self, script: ScriptRef) -> Option<String>;
    fn set_script_type(&mut self, script: ScriptRef, content_type: &str);
    fn set_script_marker(&mut self, script: ScriptRef, marker: &str, value: &str);
    fn remove_script_marker(&mut self, script: ScriptRef, marker: &str);
    fn has_script_marker(&self, script: ScriptRef, marker: &str) -> bool;

    // ── Mounted UI roots ─────────────────────────────────────────

    /// Whether an element with the given reserved id is mounted.
    fn is_mounted(&self, root_id: &str) -> bool;
    /// Appends a rendered subtree to the document body. The root element's
    /// `id` attribute is the handle for later class toggles and removal.
    fn mount(&mut self, node: Node);
    /// Removes a mounted subtree. Unknown ids are a no-op.
    fn unmount(&mut self, root_id: &str);
    /// Adds or removes a class on a mounted root (animation phases).
    fn set_root_class(&mut self, root_id: &str, class: &str, enabled: bool);
    /// Current checked state of a rendered checkbox, by element id.
    fn checkbox_checked(&self, input_id: &str) -> Option<bool>;
}
