//! Script-tag bootstrap.
//!
//! Maps the recognized `data-*` attributes of the embedding script tag
//! into [`Options`] with per-field coercion, then installs the runtime
//! behind the process-wide [`Registry`] guard. Pages without bootstrap
//! attributes construct [`Runtime`](crate::Runtime) manually instead.

use std::collections::BTreeMap;
use std::sync::Arc;

use consentry_config::{merge, BannerType, ButtonStyle, Layout, Options, Position, Theme};
use consentry_host::{Clock, HostPage, KeyValueStore};
use consentry_telemetry::Transport;
use tracing::warn;

use crate::error::{RuntimeError, RuntimeResult};
use crate::registry::Registry;
use crate::runtime::Runtime;

/// Builds partial options from bootstrap attributes.
///
/// Booleans follow the attribute convention: exactly `"true"` enables,
/// anything else disables. Malformed numbers are dropped (the merge
/// fills the default) with a warning. Unrecognized attributes are
/// ignored.
#[must_use]
pub fn options_from_attrs(attrs: &BTreeMap<String, String>) -> Options {
    let get = |key: &str| attrs.get(key).map(String::as_str);
    let get_bool = |key: &str| get(key).map(|v| v == "true");

    let mut options = Options {
        client_id: get("data-cbid").map(str::to_string),
        api_endpoint: get("data-api-endpoint").map(str::to_string),

        layout: get("data-layout").map(Layout::from),
        position: get("data-position").map(Position::from),
        overlay: get_bool("data-overlay"),
        slide_in: get_bool("data-slide-in"),

        theme: get("data-theme").map(Theme::from),
        button_style: get("data-button-style").map(ButtonStyle::from),
        banner_type: get("data-banner-type").map(BannerType::from),
        show_close_icon: get_bool("data-show-close-icon"),

        logo_url: get("data-logo-url").map(str::to_string),
        company_name: get("data-company-name").map(str::to_string),

        enable_affiliate_ads: get_bool("data-enable-affiliate-ads"),
        enable_privacy_insights: get_bool("data-enable-privacy-insights"),

        banner_position: get("data-banner-position").map(Position::from),
        primary_color: get("data-primary-color").map(str::to_string),

        ..Options::default()
    };

    if let Some(raw) = get("data-revenue-share") {
        match raw.parse::<f64>() {
            Ok(share) => options.revenue_share = Some(share),
            Err(_) => warn!(value = raw, "malformed data-revenue-share; using default"),
        }
    }

    options
}

/// Installs a runtime from the page's bootstrap attributes.
///
/// Claims the registry first; a second install in the same process gets
/// [`RuntimeError::AlreadyInstalled`] instead of a duplicate banner.
/// The returned runtime is constructed but not yet initialized — the
/// embedding drives [`Runtime::init`].
pub fn install<H, S, C>(
    page: H,
    store: S,
    clock: C,
    transport: Arc<dyn Transport>,
    registry: &Registry,
) -> RuntimeResult<Runtime<H, S, C>>
where
    H: HostPage,
    S: KeyValueStore,
    C: Clock,
{
    if !registry.try_claim() {
        return Err(RuntimeError::AlreadyInstalled);
    }

    let options = match page.bootstrap_attrs() {
        Some(attrs) => options_from_attrs(&attrs),
        None => Options::default(),
    };
    Ok(Runtime::new(merge(options), page, store, clock, transport))
}
