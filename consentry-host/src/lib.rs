//! Host-environment seams for the Consentry runtime.
//!
//! The runtime never touches a real browser directly. Everything it needs
//! from the embedding environment flows through three narrow traits:
//! - [`HostPage`] — the document: cookies, script tags, mounted UI roots
//! - [`KeyValueStore`] — the primary consent storage tier
//! - [`Clock`] — current time, injectable for deterministic tests
//!
//! In-memory implementations ([`MemoryPage`], [`MemoryStore`],
//! [`ManualClock`]) back the test suites and headless embeddings.
//! The [`consent`] module is the two-tier storage adapter: primary
//! key-value store with a silent same-named-cookie fallback.

pub mod consent;

mod clock;
mod memory;
mod page;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use memory::{MemoryPage, MemoryStore};
pub use page::{HostPage, ScriptTag};
pub use store::{KeyValueStore, StoreError, StoreResult};
