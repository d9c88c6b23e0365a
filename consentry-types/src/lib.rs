//! Core type definitions for Consentry.
//!
//! This crate defines the fundamental, host-agnostic types used throughout
//! the consent runtime:
//! - Cookie categories and the consent record lifecycle
//! - The detected cookie/script inventory
//! - Jurisdictions and runtime event names
//! - Monetization wire types (affiliate ads, privacy insights)
//! - The typed DOM tree and stylesheet emitted by the renderer
//!
//! Anything that touches the host page, the network, or a clock belongs in
//! the `consentry-host`, `consentry-telemetry`, or `consentry-runtime`
//! crates, not here.

mod category;
mod consent;
mod dom;
mod event;
mod inventory;
mod jurisdiction;
mod monetize;
mod style;

pub use category::{CookieCategory, UnknownCategory};
pub use consent::{ConsentMethod, ConsentRecord, ConsentSelections, ConsentState};
pub use dom::Node;
pub use event::EventName;
pub use inventory::{CookieEntry, Inventory, ScriptEntry, ScriptRef};
pub use jurisdiction::Jurisdiction;
pub use monetize::{AffiliateAd, PrivacyInsight};
pub use style::{MediaBlock, Rule, Stylesheet};
