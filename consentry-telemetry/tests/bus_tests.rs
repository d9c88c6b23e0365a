//! Event bus isolation.

use consentry_config::Callbacks;
use consentry_telemetry::EventBus;
use consentry_types::EventName;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn every_handler_runs_for_a_triggered_event() {
    let mut bus = EventBus::new();
    let count = Arc::new(AtomicUsize::new(0));

    for _ in 0..3 {
        let count = count.clone();
        bus.on(
            EventName::ConsentGiven,
            Arc::new(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        );
    }

    bus.trigger(EventName::ConsentGiven, &json!({}), &Callbacks::default());
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn a_failing_handler_does_not_abort_its_siblings() {
    let mut bus = EventBus::new();
    let count = Arc::new(AtomicUsize::new(0));

    bus.on(
        EventName::BannerShown,
        Arc::new(|_| Err("handler exploded".into())),
    );
    let later = count.clone();
    bus.on(
        EventName::BannerShown,
        Arc::new(move |_| {
            later.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }),
    );

    bus.trigger(EventName::BannerShown, &json!({}), &Callbacks::default());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn the_named_config_callback_fires_after_handlers() {
    let mut bus = EventBus::new();
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));

    let handler_order = order.clone();
    bus.on(
        EventName::ConsentGiven,
        Arc::new(move |_| {
            handler_order.lock().unwrap().push("handler");
            Ok(())
        }),
    );

    let callback_order = order.clone();
    let callbacks = Callbacks {
        on_consent_given: Some(Arc::new(move |data| {
            assert_eq!(data["marketing"], json!(true));
            callback_order.lock().unwrap().push("callback");
            Ok(())
        })),
        ..Callbacks::default()
    };

    bus.trigger(
        EventName::ConsentGiven,
        &json!({"marketing": true}),
        &callbacks,
    );
    assert_eq!(*order.lock().unwrap(), vec!["handler", "callback"]);
}

#[test]
fn a_failing_config_callback_is_swallowed() {
    let bus = EventBus::new();
    let callbacks = Callbacks {
        on_initialized: Some(Arc::new(|_| Err("host bug".into()))),
        ..Callbacks::default()
    };
    // Must not panic or propagate.
    bus.trigger(EventName::Initialized, &json!({}), &callbacks);
}

#[test]
fn unregistered_events_are_a_no_op() {
    let bus = EventBus::new();
    bus.trigger(EventName::BannerHidden, &json!({}), &Callbacks::default());
}
