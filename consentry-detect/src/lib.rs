//! Cookie and tracking-script detection.
//!
//! One scan per page load: parse the document cookie string, classify
//! each cookie by name, then walk the page's `<script src>` elements and
//! keep the non-necessary ones. The resulting [`Inventory`] drives both
//! the consent applier and the scan report sent to the analytics API.
//!
//! [`Inventory`]: consentry_types::Inventory

mod detector;
mod patterns;

pub use detector::detect;
pub use patterns::{categorize_cookie, categorize_script, script_display_name};
