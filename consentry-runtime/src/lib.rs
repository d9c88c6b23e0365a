//! The Consentry runtime.
//!
//! Wires the detection, rendering, storage and telemetry crates into a
//! single embeddable [`Runtime`]: load or show consent, block and
//! unblock trackers, and keep the UI lifecycle deterministic behind an
//! injected clock. [`install`] is the script-tag bootstrap path; hosts
//! without bootstrap attributes construct [`Runtime`] directly.

mod applier;
mod bootstrap;
mod decision;
mod error;
mod registry;
mod runtime;
mod timers;

pub use applier::{apply_consent, BLOCKED_MARKER};
pub use bootstrap::{install, options_from_attrs};
pub use decision::{resolve_jurisdiction, resolve_language, should_show_banner};
pub use error::{RuntimeError, RuntimeResult};
pub use registry::Registry;
pub use runtime::{Action, Runtime};
pub use timers::{TimerEvent, TimerQueue};
