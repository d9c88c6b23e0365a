//! View construction for the consent UI.
//!
//! Everything here is a pure function of the resolved configuration and
//! the data to display: banner, overlay and insights-widget builders emit
//! typed [`Node`] trees with an embedded scoped stylesheet, and the
//! [`SurfacePhase`] state machine tracks each surface's animation
//! lifecycle. No host-page access, no side effects.
//!
//! [`Node`]: consentry_types::Node

mod banner;
mod insights;
mod style;
mod surface;
mod texts;
mod theme;

pub use banner::{build_banner, build_overlay};
pub use insights::build_insights_widget;
pub use style::banner_stylesheet;
pub use surface::SurfacePhase;
pub use texts::{bundle_for, TextBundle};
pub use theme::{palette, Palette};

/// Reserved root element id of the main banner.
pub const BANNER_ROOT_ID: &str = "consentry-banner";
/// Reserved root element id of the dialog overlay.
pub const OVERLAY_ROOT_ID: &str = "consentry-overlay";
/// Reserved root element id of the privacy-insights widget.
pub const INSIGHTS_ROOT_ID: &str = "consentry-insights";

/// Class toggled on a mounted banner to drive the entrance transition.
pub const BANNER_VISIBLE_CLASS: &str = "cns-banner-visible";
/// Extra entrance class applied when `slideIn` is configured.
pub const BANNER_SLIDE_IN_CLASS: &str = "cns-banner-slide-in";
/// Class toggled on the overlay to fade it in and out.
pub const OVERLAY_VISIBLE_CLASS: &str = "cns-overlay-visible";
/// Class toggled on the insights widget for its transitions.
pub const INSIGHTS_VISIBLE_CLASS: &str = "cns-insights-visible";

/// Element ids of the banner's interactive controls.
pub mod control {
    pub const ACCEPT_BUTTON: &str = "cns-accept";
    pub const DECLINE_BUTTON: &str = "cns-decline";
    pub const SAVE_BUTTON: &str = "cns-save";
    pub const CUSTOMIZE_BUTTON: &str = "cns-customize";
    pub const CLOSE_BUTTON: &str = "cns-close";
    pub const DO_NOT_SELL_CHECKBOX: &str = "cns-do-not-sell";
    pub const PREFERENCES_CHECKBOX: &str = "cns-preferences";
    pub const STATISTICS_CHECKBOX: &str = "cns-statistics";
    pub const MARKETING_CHECKBOX: &str = "cns-marketing";
}
