//! Runtime event names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Events emitted by the runtime through the local event bus.
///
/// Each event also maps to a named configuration callback
/// (`on` + capitalized event name), invoked with the same payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventName {
    Initialized,
    BannerShown,
    BannerHidden,
    ConsentGiven,
    ConsentChanged,
}

impl EventName {
    /// The camelCase wire name, as seen by host-page integrations.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventName::Initialized => "initialized",
            EventName::BannerShown => "bannerShown",
            EventName::BannerHidden => "bannerHidden",
            EventName::ConsentGiven => "consentGiven",
            EventName::ConsentChanged => "consentChanged",
        }
    }

    /// The matching configuration callback name (`onConsentGiven`, ...).
    #[must_use]
    pub const fn callback_name(&self) -> &'static str {
        match self {
            EventName::Initialized => "onInitialized",
            EventName::BannerShown => "onBannerShown",
            EventName::BannerHidden => "onBannerHidden",
            EventName::ConsentGiven => "onConsentGiven",
            EventName::ConsentChanged => "onConsentChanged",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
