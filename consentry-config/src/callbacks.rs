//! Named host-page callbacks.
//!
//! A host embedding may supply one callback per runtime event. Callbacks
//! report failure through a `Result` so the event bus can log and isolate
//! them without aborting sibling handlers.

use consentry_types::EventName;
use std::fmt;
use std::sync::Arc;

/// Error type surfaced by host callbacks and bus handlers.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// A host-supplied event callback.
pub type CallbackFn = Arc<dyn Fn(&serde_json::Value) -> Result<(), CallbackError> + Send + Sync>;

/// The optional named callbacks recognized by the configuration.
#[derive(Clone, Default)]
pub struct Callbacks {
    pub on_initialized: Option<CallbackFn>,
    pub on_banner_shown: Option<CallbackFn>,
    pub on_banner_hidden: Option<CallbackFn>,
    pub on_consent_given: Option<CallbackFn>,
    pub on_consent_changed: Option<CallbackFn>,
}

impl Callbacks {
    /// Returns the callback registered for the event, if any.
    #[must_use]
    pub fn for_event(&self, event: EventName) -> Option<&CallbackFn> {
        match event {
            EventName::Initialized => self.on_initialized.as_ref(),
            EventName::BannerShown => self.on_banner_shown.as_ref(),
            EventName::BannerHidden => self.on_banner_hidden.as_ref(),
            EventName::ConsentGiven => self.on_consent_given.as_ref(),
            EventName::ConsentChanged => self.on_consent_changed.as_ref(),
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = |o: &Option<CallbackFn>| if o.is_some() { "set" } else { "unset" };
        f.debug_struct("Callbacks")
            .field("on_initialized", &set(&self.on_initialized))
            .field("on_banner_shown", &set(&self.on_banner_shown))
            .field("on_banner_hidden", &set(&self.on_banner_hidden))
            .field("on_consent_given", &set(&self.on_consent_given))
            .field("on_consent_changed", &set(&self.on_consent_changed))
            .finish()
    }
}
