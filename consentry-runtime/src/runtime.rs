//! The runtime orchestrator.

use std::sync::Arc;

use chrono::Duration;
use consentry_config::{BannerType, CallbackFn, Config, Layout};
use consentry_detect::detect;
use consentry_host::consent::{load_consent, save_consent};
use consentry_host::{Clock, HostPage, KeyValueStore};
use consentry_render::{
    build_banner, build_insights_widget, build_overlay, control, SurfacePhase, BANNER_ROOT_ID,
    BANNER_SLIDE_IN_CLASS, BANNER_VISIBLE_CLASS, INSIGHTS_ROOT_ID, INSIGHTS_VISIBLE_CLASS,
    OVERLAY_ROOT_ID, OVERLAY_VISIBLE_CLASS,
};
use consentry_telemetry::{ApiClient, EventBus, PageContext, Transport};
use consentry_types::{
    AffiliateAd, ConsentRecord, ConsentSelections, CookieCategory, EventName, Inventory,
    Jurisdiction, PrivacyInsight,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::applier::apply_consent;
use crate::decision::{resolve_jurisdiction, resolve_language, should_show_banner};
use crate::timers::{TimerEvent, TimerQueue};

const BANNER_ENTER_MS: i64 = 100;
const BANNER_EXIT_MS: i64 = 300;
const OVERLAY_ENTER_MS: i64 = 50;
const OVERLAY_EXIT_MS: i64 = 300;
const INSIGHTS_ENTER_MS: i64 = 100;
const INSIGHTS_EXIT_MS: i64 = 300;

/// A user interaction on a rendered surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Accept,
    Decline,
    SavePreferences,
    /// The inline-multilevel "Customize" button; currently saves.
    Customize,
    /// The close icon: hide without recording a decision.
    Close,
    AffiliateClick(String),
    InsightClick(String),
}

/// The embedded consent runtime.
///
/// Owns the page seams and every piece of state; the host drives it with
/// `init`, `dispatch` and `tick`, the latter with the injected clock so
/// the whole animation lifecycle is deterministic under test.
pub struct Runtime<H, S, C> {
    config: Config,
    page: H,
    store: S,
    clock: C,
    api: ApiClient,
    bus: EventBus,

    consent: ConsentRecord,
    inventory: Inventory,
    ads: Vec<AffiliateAd>,
    insights: Vec<PrivacyInsight>,
    language: String,
    jurisdiction: Jurisdiction,

    banner: SurfacePhase,
    overlay: SurfacePhase,
    insights_widget: SurfacePhase,
    timers: TimerQueue,
    initialized: bool,
}

impl<H, S, C> Runtime<H, S, C>
where
    H: HostPage,
    S: KeyValueStore,
    C: Clock,
{
    /// Constructs an inert runtime; nothing happens until [`init`].
    ///
    /// [`init`]: Self::init
    pub fn new(config: Config, page: H, store: S, clock: C, transport: Arc<dyn Transport>) -> Self {
        let domain = config
            .domain
            .clone()
            .unwrap_or_else(|| page.hostname());
        let api = ApiClient::new(
            transport,
            &config.api_endpoint,
            config.client_id.as_deref(),
            &domain,
        );
        Self {
            config,
            page,
            store,
            clock,
            api,
            bus: EventBus::new(),
            consent: ConsentRecord::unset(),
            inventory: Inventory::default(),
            ads: Vec::new(),
            insights: Vec::new(),
            language: "en".to_string(),
            jurisdiction: Jurisdiction::Gdpr,
            banner: SurfacePhase::Hidden,
            overlay: SurfacePhase::Hidden,
            insights_widget: SurfacePhase::Hidden,
            timers: TimerQueue::new(),
            initialized: false,
        }
    }

    /// One-time initialization: load, detect, fetch, show, apply, report.
    ///
    /// Every step degrades internally; init itself cannot fail and a
    /// degraded runtime simply stays inert.
    pub async fn init(&mut self) {
        if self.initialized {
            return;
        }

        self.jurisdiction =
            resolve_jurisdiction(&self.config.jurisdiction, &self.page.time_zone());
        self.language = resolve_language(&self.config.language, self.page.locale().as_deref());
        self.consent = load_consent(&self.store, &self.page).unwrap_or_else(ConsentRecord::unset);
        self.inventory = detect(&self.page);

        if self.config.enable_affiliate_ads {
            self.ads = self
                .api
                .fetch_affiliate_ads(self.config.max_affiliate_ads, &self.page_context())
                .await;
        }

        if self.should_show_banner() {
            self.show_banner();
        }
        self.apply_current_consent();

        self.api.report_scan(&self.inventory, self.clock.now()).await;

        self.initialized = true;
        self.trigger(EventName::Initialized, json!({}));
    }

    // ── Queries ──────────────────────────────────────────────────

    /// A copy of the current consent record.
    #[must_use]
    pub fn get_consent(&self) -> ConsentRecord {
        self.consent.clone()
    }

    /// Whether the category is currently granted.
    #[must_use]
    pub fn has_consent(&self, category: CookieCategory) -> bool {
        self.consent.grants(category)
    }

    /// The detected inventory of this page load.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Host-page access, for assertions and embedding integration.
    #[must_use]
    pub fn page(&self) -> &H {
        &self.page
    }

    #[must_use]
    pub fn should_show_banner(&self) -> bool {
        should_show_banner(
            &self.consent,
            self.config.consent_expiry_days,
            self.clock.now(),
            self.jurisdiction,
        )
    }

    /// Registers a bus handler for a runtime event.
    pub fn on(&mut self, event: EventName, handler: CallbackFn) {
        self.bus.on(event, handler);
    }

    // ── User actions ─────────────────────────────────────────────

    /// Routes one surface interaction.
    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::Accept => self.accept_all(),
            Action::Decline => self.decline_all(),
            Action::SavePreferences | Action::Customize => self.save_preferences(),
            Action::Close => self.hide_banner(),
            Action::AffiliateClick(ad_id) => {
                self.api.track_affiliate_click(&ad_id, self.clock.now()).await;
            }
            Action::InsightClick(insight_id) => {
                self.dismiss_insights();
                self.api
                    .track_insight_click(&insight_id, self.config.revenue_share, self.clock.now())
                    .await;
            }
        }
    }

    /// Grants every category.
    pub fn accept_all(&mut self) {
        self.decide(ConsentRecord::accept_all(self.clock.now()));
    }

    /// Declines everything but necessary.
    pub fn decline_all(&mut self) {
        self.decide(ConsentRecord::decline_all(self.clock.now()));
    }

    /// Records the checkbox states as the decision.
    ///
    /// The CCPA banner reads its single do-not-sell checkbox; every
    /// other type reads the three category checkboxes, absent ones
    /// counting as unchecked.
    pub fn save_preferences(&mut self) {
        let now = self.clock.now();
        let record = if self.config.banner_type == BannerType::Ccpa {
            let opt_out = self
                .page
                .checkbox_checked(control::DO_NOT_SELL_CHECKBOX)
                .unwrap_or(false);
            ConsentRecord::ccpa(opt_out, now)
        } else {
            let checked = |id: &str| self.page.checkbox_checked(id).unwrap_or(false);
            ConsentRecord::saved(
                ConsentSelections {
                    preferences: checked(control::PREFERENCES_CHECKBOX),
                    statistics: checked(control::STATISTICS_CHECKBOX),
                    marketing: checked(control::MARKETING_CHECKBOX),
                },
                now,
            )
        };
        self.decide(record);
    }

    /// Clears the decision timestamp and re-shows the banner if needed.
    pub fn renew(&mut self) {
        self.consent.clear_timestamp();
        save_consent(
            &mut self.store,
            &mut self.page,
            &self.consent,
            self.config.consent_expiry_days,
            self.clock.now(),
        );
        if self.should_show_banner() {
            self.show_banner();
        }
    }

    fn decide(&mut self, record: ConsentRecord) {
        let previous = std::mem::replace(&mut self.consent, record);
        save_consent(
            &mut self.store,
            &mut self.page,
            &self.consent,
            self.config.consent_expiry_days,
            self.clock.now(),
        );
        // Blocking state must be consistent before the exit animation.
        self.apply_current_consent();
        self.hide_banner();

        let payload = serde_json::to_value(&self.consent).unwrap_or(Value::Null);
        self.trigger(EventName::ConsentGiven, payload.clone());
        if previous.is_decided() && previous.selections() != self.consent.selections() {
            self.trigger(EventName::ConsentChanged, payload);
        }

        if self.config.enable_privacy_insights {
            self.schedule_after_ms(self.config.insights_delay_ms, TimerEvent::ShowInsights);
        }
    }

    // ── Surfaces ─────────────────────────────────────────────────

    /// Mounts the banner (and overlay, for dialog layouts).
    ///
    /// Idempotent: a banner already on the page is left alone.
    pub fn show_banner(&mut self) {
        if self.banner.is_shown() || self.page.is_mounted(BANNER_ROOT_ID) {
            return;
        }

        let dialog = !matches!(self.config.layout, Layout::Bar);
        if self.config.overlay && dialog && self.overlay.begin_enter() {
            self.page.mount(build_overlay(&self.config));
            self.timers.schedule(
                self.clock.now() + Duration::milliseconds(OVERLAY_ENTER_MS),
                TimerEvent::OverlayEntered,
            );
        }

        self.page
            .mount(build_banner(&self.config, &self.ads, &self.language));
        if self.banner.begin_enter() {
            self.timers.schedule(
                self.clock.now() + Duration::milliseconds(BANNER_ENTER_MS),
                TimerEvent::BannerEntered,
            );
        }
        self.trigger(EventName::BannerShown, json!({}));
    }

    /// Starts the banner's (and overlay's) exit transition.
    pub fn hide_banner(&mut self) {
        let mut hid = false;
        if self.banner.begin_exit() {
            self.page
                .set_root_class(BANNER_ROOT_ID, BANNER_VISIBLE_CLASS, false);
            self.timers.schedule(
                self.clock.now() + Duration::milliseconds(BANNER_EXIT_MS),
                TimerEvent::BannerRemoval,
            );
            hid = true;
        }
        if self.overlay.begin_exit() {
            self.page
                .set_root_class(OVERLAY_ROOT_ID, OVERLAY_VISIBLE_CLASS, false);
            self.timers.schedule(
                self.clock.now() + Duration::milliseconds(OVERLAY_EXIT_MS),
                TimerEvent::OverlayRemoval,
            );
        }
        if hid {
            self.trigger(EventName::BannerHidden, json!({}));
        }
    }

    /// Manually dismisses the insights widget.
    ///
    /// A later auto-hide timer then finds the widget already exiting
    /// or gone and does nothing.
    pub fn dismiss_insights(&mut self) {
        if self.insights_widget.begin_exit() {
            self.page
                .set_root_class(INSIGHTS_ROOT_ID, INSIGHTS_VISIBLE_CLASS, false);
            self.timers.schedule(
                self.clock.now() + Duration::milliseconds(INSIGHTS_EXIT_MS),
                TimerEvent::InsightsRemoval,
            );
        }
    }

    async fn show_insights(&mut self) {
        if self.insights_widget.is_shown() || self.page.is_mounted(INSIGHTS_ROOT_ID) {
            return;
        }

        if self.insights.is_empty() {
            self.insights = self
                .api
                .fetch_privacy_insights(&self.language, &self.page_context())
                .await;
        }
        if self.insights.is_empty() {
            debug!("no insights available; widget skipped");
            return;
        }

        self.page
            .mount(build_insights_widget(&self.config, &self.insights, &self.language));
        if self.insights_widget.begin_enter() {
            self.timers.schedule(
                self.clock.now() + Duration::milliseconds(INSIGHTS_ENTER_MS),
                TimerEvent::InsightsEntered,
            );
            self.schedule_after_ms(self.config.insights_display_ms, TimerEvent::HideInsights);
        }
    }

    /// Drains and executes every due timer.
    pub async fn tick(&mut self) {
        let due = self.timers.due(self.clock.now());
        for event in due {
            match event {
                TimerEvent::BannerEntered => {
                    if self.banner.finish_enter() {
                        self.page
                            .set_root_class(BANNER_ROOT_ID, BANNER_VISIBLE_CLASS, true);
                        if self.config.slide_in {
                            self.page
                                .set_root_class(BANNER_ROOT_ID, BANNER_SLIDE_IN_CLASS, true);
                        }
                    }
                }
                TimerEvent::BannerRemoval => {
                    if self.banner.finish_exit() {
                        self.page.unmount(BANNER_ROOT_ID);
                    }
                }
                TimerEvent::OverlayEntered => {
                    if self.overlay.finish_enter() {
                        self.page
                            .set_root_class(OVERLAY_ROOT_ID, OVERLAY_VISIBLE_CLASS, true);
                    }
                }
                TimerEvent::OverlayRemoval => {
                    if self.overlay.finish_exit() {
                        self.page.unmount(OVERLAY_ROOT_ID);
                    }
                }
                TimerEvent::ShowInsights => self.show_insights().await,
                TimerEvent::InsightsEntered => {
                    if self.insights_widget.finish_enter() {
                        self.page
                            .set_root_class(INSIGHTS_ROOT_ID, INSIGHTS_VISIBLE_CLASS, true);
                    }
                }
                TimerEvent::HideInsights => self.dismiss_insights(),
                TimerEvent::InsightsRemoval => {
                    if self.insights_widget.finish_exit() {
                        self.page.unmount(INSIGHTS_ROOT_ID);
                    }
                }
            }
        }
    }

    // ── Internals ────────────────────────────────────────────────

    /// Schedules an event after a configured millisecond delay.
    ///
    /// A delay too large for the timeline never fires instead of
    /// wrapping into the past.
    fn schedule_after_ms(&mut self, ms: u64, event: TimerEvent) {
        let delta = Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX));
        if let Some(at) = self.clock.now().checked_add_signed(delta) {
            self.timers.schedule(at, event);
        }
    }

    fn apply_current_consent(&mut self) {
        apply_consent(
            &mut self.page,
            &self.inventory,
            &self.consent,
            self.config.auto_block,
        );
    }

    fn trigger(&self, event: EventName, data: Value) {
        self.bus.trigger(event, &data, &self.config.callbacks);
    }

    fn page_context(&self) -> PageContext {
        PageContext {
            url: self.page.page_url(),
            title: self.page.page_title(),
            language: self.language.clone(),
        }
    }
}
