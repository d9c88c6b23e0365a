//! Backend telemetry client and local event bus.
//!
//! Every network call here is fire-and-forget: failures are logged and
//! swallowed, never retried, never surfaced to the consent flow. Consent
//! decisions themselves are never posted — only the detection inventory
//! and monetization interactions leave the page.

mod bus;
mod client;
mod error;
mod transport;

pub use bus::EventBus;
pub use client::{ApiClient, PageContext};
pub use error::{TelemetryError, TelemetryResult};
pub use transport::{HttpTransport, NullTransport, RecordingTransport, Transport};
