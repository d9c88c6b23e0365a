//! The detected cookie and tracking-script inventory.
//!
//! The detector owns the inventory for the lifetime of one page load.
//! Script entries carry a non-owning [`ScriptRef`] back into the host
//! page's live `<script>` elements; only the consent applier mutates the
//! referenced element.

use crate::CookieCategory;
use serde::{Deserialize, Serialize};

/// Opaque handle to a `<script>` element owned by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptRef(pub u64);

/// A cookie present on the host page at detection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieEntry {
    pub name: String,
    pub value: Option<String>,
    pub category: CookieCategory,
    pub domain: String,
    pub path: String,
    pub secure: bool,
    pub http_only: bool,
}

/// A non-necessary tracking script detected on the host page.
///
/// Necessary scripts are never tracked: they are outside the consent
/// system and must not be blocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptEntry {
    /// Display name derived from the script host ("Google Analytics", ...).
    pub name: String,
    pub src: String,
    pub category: CookieCategory,
    /// Back-reference into the host page; excluded from wire payloads.
    #[serde(skip, default = "ScriptRef::detached")]
    pub element: ScriptRef,
}

impl ScriptRef {
    fn detached() -> Self {
        ScriptRef(u64::MAX)
    }
}

/// Everything the detector found on one page load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub cookies: Vec<CookieEntry>,
    pub scripts: Vec<ScriptEntry>,
}

impl Inventory {
    /// True when nothing was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty() && self.scripts.is_empty()
    }

    /// Total number of detected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len() + self.scripts.len()
    }
}
