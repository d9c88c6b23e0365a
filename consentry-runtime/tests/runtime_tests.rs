//! End-to-end runtime lifecycle against the in-memory host.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use consentry_config::{merge, BannerType, Config, JurisdictionSetting, Options};
use consentry_host::{HostPage, ManualClock, MemoryPage, MemoryStore};
use consentry_render::{control, BANNER_ROOT_ID, BANNER_VISIBLE_CLASS, INSIGHTS_ROOT_ID, OVERLAY_ROOT_ID};
use consentry_runtime::{Action, Runtime};
use consentry_telemetry::{NullTransport, RecordingTransport};
use consentry_types::{CookieCategory, EventName, Jurisdiction};
use pretty_assertions::assert_eq;
use serde_json::json;

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap()
}

fn tracked_page() -> MemoryPage {
    MemoryPage::new()
        .with_cookie("PHPSESSID", "abc")
        .with_cookie("_ga", "GA1.2")
        .with_script("https://www.google-analytics.com/analytics.js")
}

fn runtime_with(
    config: Config,
    page: MemoryPage,
) -> (Runtime<MemoryPage, MemoryStore, ManualClock>, ManualClock) {
    let clock = ManualClock::new(start());
    let runtime = Runtime::new(
        config,
        page,
        MemoryStore::new(),
        clock.clone(),
        Arc::new(NullTransport),
    );
    (runtime, clock)
}

// ── Banner lifecycle ─────────────────────────────────────────────────

#[tokio::test]
async fn init_mounts_banner_and_overlay_then_entrance_classes() {
    let (mut runtime, clock) = runtime_with(merge(Options::default()), tracked_page());
    runtime.init().await;

    assert!(runtime.page().is_mounted(BANNER_ROOT_ID));
    assert!(runtime.page().is_mounted(OVERLAY_ROOT_ID));
    assert!(!runtime
        .page()
        .root_classes(BANNER_ROOT_ID)
        .contains(&BANNER_VISIBLE_CLASS.to_string()));

    clock.advance(Duration::milliseconds(100));
    runtime.tick().await;
    assert!(runtime
        .page()
        .root_classes(BANNER_ROOT_ID)
        .contains(&BANNER_VISIBLE_CLASS.to_string()));
}

#[tokio::test]
async fn show_banner_is_idempotent() {
    let (mut runtime, _clock) = runtime_with(merge(Options::default()), tracked_page());
    runtime.init().await;
    runtime.show_banner();
    runtime.show_banner();

    let banners = runtime
        .page()
        .mounted_roots()
        .iter()
        .filter(|node| node.get_attr("id") == Some(BANNER_ROOT_ID))
        .count();
    assert_eq!(banners, 1);
}

#[tokio::test]
async fn a_decision_hides_and_removes_the_banner() {
    let (mut runtime, clock) = runtime_with(merge(Options::default()), tracked_page());
    runtime.init().await;

    runtime.dispatch(Action::Accept).await;
    assert!(!runtime.should_show_banner());

    clock.advance(Duration::milliseconds(300));
    runtime.tick().await;
    assert!(!runtime.page().is_mounted(BANNER_ROOT_ID));
    assert!(!runtime.page().is_mounted(OVERLAY_ROOT_ID));
}

#[tokio::test]
async fn close_hides_without_recording_a_decision() {
    let (mut runtime, clock) = runtime_with(merge(Options::default()), tracked_page());
    runtime.init().await;

    runtime.dispatch(Action::Close).await;
    clock.advance(Duration::milliseconds(300));
    runtime.tick().await;

    assert!(!runtime.page().is_mounted(BANNER_ROOT_ID));
    assert!(!runtime.get_consent().is_decided());
    assert!(runtime.should_show_banner());
}

#[tokio::test]
async fn an_exempt_jurisdiction_keeps_the_page_untouched() {
    let mut config = merge(Options::default());
    config.jurisdiction = JurisdictionSetting::Fixed(Jurisdiction::Exempt);
    let (mut runtime, _clock) = runtime_with(config, tracked_page());
    runtime.init().await;

    assert!(!runtime.page().is_mounted(BANNER_ROOT_ID));
}

#[tokio::test]
async fn init_runs_once() {
    let (mut runtime, _clock) = runtime_with(merge(Options::default()), tracked_page());
    runtime.init().await;
    runtime.init().await;
    assert_eq!(runtime.page().mounted_roots().len(), 2); // banner + overlay
}

// ── Decisions ────────────────────────────────────────────────────────

#[tokio::test]
async fn accept_all_grants_everything_and_applies() {
    let (mut runtime, _clock) = runtime_with(merge(Options::default()), tracked_page());
    runtime.init().await;

    runtime.dispatch(Action::Accept).await;

    assert!(runtime.has_consent(CookieCategory::Marketing));
    assert!(runtime.has_consent(CookieCategory::Statistics));
    let script = runtime.inventory().scripts[0].element;
    assert_eq!(
        runtime.page().script_type(script).as_deref(),
        Some("text/javascript")
    );
}

#[tokio::test]
async fn decline_blocks_scripts_and_deletes_cookies() {
    let (mut runtime, _clock) = runtime_with(merge(Options::default()), tracked_page());
    runtime.init().await;

    runtime.dispatch(Action::Decline).await;

    let script = runtime.inventory().scripts[0].element;
    assert_eq!(runtime.page().script_type(script).as_deref(), Some("text/plain"));
    let names: Vec<&str> = runtime
        .page()
        .cookie_pairs()
        .iter()
        .map(|(n, _)| n.as_str())
        .collect();
    assert!(names.contains(&"PHPSESSID"));
    assert!(!names.contains(&"_ga"));
}

#[tokio::test]
async fn save_preferences_reads_the_rendered_checkboxes() {
    let mut page = tracked_page();
    page.set_checkbox(control::PREFERENCES_CHECKBOX, true);
    page.set_checkbox(control::MARKETING_CHECKBOX, true);
    let (mut runtime, _clock) = runtime_with(merge(Options::default()), page);
    runtime.init().await;

    runtime.dispatch(Action::SavePreferences).await;

    let record = runtime.get_consent();
    assert!(record.preferences);
    assert!(!record.statistics);
    assert!(record.marketing);
    assert!(record.is_decided());
}

#[tokio::test]
async fn ccpa_save_translates_the_do_not_sell_checkbox() {
    let mut config = merge(Options::default());
    config.banner_type = BannerType::Ccpa;
    let mut page = tracked_page();
    page.set_checkbox(control::DO_NOT_SELL_CHECKBOX, true);
    let (mut runtime, _clock) = runtime_with(config, page);
    runtime.init().await;

    runtime.dispatch(Action::SavePreferences).await;

    let record = runtime.get_consent();
    assert_eq!(record.ccpa_opt_out, Some(true));
    assert!(!record.preferences);
    assert!(!record.statistics);
    assert!(!record.marketing);
}

#[tokio::test]
async fn an_expired_decision_requires_the_banner_again() {
    let (mut runtime, clock) = runtime_with(merge(Options::default()), tracked_page());
    runtime.init().await;
    runtime.dispatch(Action::Accept).await;
    clock.advance(Duration::milliseconds(300));
    runtime.tick().await;
    assert!(!runtime.should_show_banner());

    clock.advance(Duration::days(366));
    assert!(runtime.should_show_banner());

    runtime.renew();
    assert!(runtime.page().is_mounted(BANNER_ROOT_ID));
    assert!(!runtime.get_consent().is_decided());
}

// ── Events ───────────────────────────────────────────────────────────

#[tokio::test]
async fn consent_given_fires_handlers_with_the_record() {
    let (mut runtime, _clock) = runtime_with(merge(Options::default()), tracked_page());
    let seen = Arc::new(AtomicUsize::new(0));
    let count = seen.clone();
    runtime.on(
        EventName::ConsentGiven,
        Arc::new(move |data| {
            assert_eq!(data["marketing"], json!(true));
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }),
    );
    runtime.init().await;

    runtime.dispatch(Action::Accept).await;
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

// ── Insights widget ──────────────────────────────────────────────────

fn insights_runtime() -> (Runtime<MemoryPage, MemoryStore, ManualClock>, ManualClock, Arc<RecordingTransport>) {
    let mut config = merge(Options::default());
    config.client_id = Some("cid-1".to_string());
    config.enable_affiliate_ads = false;
    config.enable_privacy_insights = true;

    let transport = Arc::new(RecordingTransport::new());
    // First response answers the init scan report, second the insights fetch.
    transport.push_response(Ok(serde_json::Value::Null));
    transport.push_response(Ok(json!([{
        "id": "ins-1",
        "title": "Trackers this week",
        "description": "3 blocked",
        "category": "statistics",
        "sponsored": true
    }])));

    let clock = ManualClock::new(start());
    let runtime = Runtime::new(
        config,
        tracked_page(),
        MemoryStore::new(),
        clock.clone(),
        transport.clone(),
    );
    (runtime, clock, transport)
}

#[tokio::test]
async fn insights_appear_after_the_configured_delay_and_auto_hide() {
    let (mut runtime, clock, _transport) = insights_runtime();
    runtime.init().await;
    runtime.dispatch(Action::Accept).await;
    assert!(!runtime.page().is_mounted(INSIGHTS_ROOT_ID));

    clock.advance(Duration::milliseconds(5_000));
    runtime.tick().await;
    assert!(runtime.page().is_mounted(INSIGHTS_ROOT_ID));

    // Display window elapses; the widget exits and is removed.
    clock.advance(Duration::milliseconds(15_000));
    runtime.tick().await;
    clock.advance(Duration::milliseconds(300));
    runtime.tick().await;
    assert!(!runtime.page().is_mounted(INSIGHTS_ROOT_ID));
}

#[tokio::test]
async fn an_oversized_insights_delay_never_fires() {
    let mut config = merge(Options::default());
    config.client_id = Some("cid-1".to_string());
    config.enable_affiliate_ads = false;
    config.enable_privacy_insights = true;
    config.insights_delay_ms = u64::MAX;

    let transport = Arc::new(RecordingTransport::new());
    transport.push_response(Ok(serde_json::Value::Null));
    transport.push_response(Ok(json!([{
        "id": "ins-1",
        "title": "Trackers this week",
        "description": "3 blocked",
        "category": "statistics"
    }])));

    let clock = ManualClock::new(start());
    let mut runtime = Runtime::new(
        config,
        tracked_page(),
        MemoryStore::new(),
        clock.clone(),
        transport,
    );
    runtime.init().await;
    runtime.dispatch(Action::Accept).await;

    clock.advance(Duration::days(30));
    runtime.tick().await;
    assert!(!runtime.page().is_mounted(INSIGHTS_ROOT_ID));
}

#[tokio::test]
async fn a_manual_dismiss_makes_the_auto_hide_a_no_op() {
    let (mut runtime, clock, transport) = insights_runtime();
    runtime.init().await;
    runtime.dispatch(Action::Accept).await;

    clock.advance(Duration::milliseconds(5_000));
    runtime.tick().await;
    assert!(runtime.page().is_mounted(INSIGHTS_ROOT_ID));

    runtime.dispatch(Action::InsightClick("ins-1".to_string())).await;
    clock.advance(Duration::milliseconds(300));
    runtime.tick().await;
    assert!(!runtime.page().is_mounted(INSIGHTS_ROOT_ID));

    // The scheduled auto-hide fires later and must change nothing.
    clock.advance(Duration::milliseconds(15_000));
    runtime.tick().await;
    assert!(!runtime.page().is_mounted(INSIGHTS_ROOT_ID));

    let clicked = transport
        .requests()
        .iter()
        .any(|(url, body)| url.ends_with("/privacy-insight-click") && body["insightId"] == json!("ins-1"));
    assert!(clicked);
}
