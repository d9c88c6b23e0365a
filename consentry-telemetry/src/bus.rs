//! Local pub/sub event bus.

use consentry_config::{CallbackFn, Callbacks};
use consentry_types::EventName;
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// Registered handlers per event, with per-handler failure isolation.
///
/// `trigger` invokes every registered handler and then the matching
/// named configuration callback. A failing handler is logged and never
/// aborts its siblings.
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<EventName, Vec<CallbackFn>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for the event.
    pub fn on(&mut self, event: EventName, handler: CallbackFn) {
        self.handlers.entry(event).or_default().push(handler);
    }

    /// Fires the event to every handler, then the named config callback.
    pub fn trigger(&self, event: EventName, data: &Value, callbacks: &Callbacks) {
        if let Some(handlers) = self.handlers.get(&event) {
            for handler in handlers {
                if let Err(error) = handler(data) {
                    warn!(event = event.as_str(), %error, "event handler failed");
                }
            }
        }

        if let Some(callback) = callbacks.for_event(event) {
            if let Err(error) = callback(data) {
                warn!(
                    callback = event.callback_name(),
                    %error,
                    "config callback failed"
                );
            }
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(&str, usize)> = self
            .handlers
            .iter()
            .map(|(event, handlers)| (event.as_str(), handlers.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("EventBus").field("handlers", &counts).finish()
    }
}
