//! Configuration model for the Consentry runtime.
//!
//! [`Options`] is the partial, caller-supplied shape (every field optional,
//! unknown keys ignored, legacy aliases accepted). [`merge`] resolves it
//! against compiled-in defaults into one canonical [`Config`] in a single
//! deterministic pass. Merging is total: it never fails, and unrecognized
//! enum keywords travel through as `Other(..)` variants to be resolved
//! defensively at the point of use.

mod callbacks;
mod config;
mod options;

pub use callbacks::{CallbackError, CallbackFn, Callbacks};
pub use config::{Config, DEFAULT_API_ENDPOINT, merge};
pub use options::{
    BannerType, ButtonStyle, ColorPatch, CustomColors, CheckboxDefaults, JurisdictionSetting,
    LanguageSetting, Layout, Options, Position, Theme,
};
