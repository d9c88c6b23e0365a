//! The consent record and its lifecycle.
//!
//! A record starts `Unset` (no timestamp), becomes `Decided` when a user
//! action stamps it, and `Expired` once `now` passes
//! `timestamp + consent_expiry` days. An expired record keeps its prior
//! values until the user decides again.

use crate::CookieCategory;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// How a consent decision was produced. Only explicit user actions exist
/// today; the variant leaves room for implied-consent jurisdictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentMethod {
    Explicit,
}

/// Lifecycle state of a stored consent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentState {
    /// No decision has been recorded.
    Unset,
    /// A decision exists and has not expired.
    Decided,
    /// A decision exists but its timestamp is older than the expiry window.
    Expired,
}

/// The non-necessary category choices a user can make.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentSelections {
    pub preferences: bool,
    pub statistics: bool,
    pub marketing: bool,
}

/// A user's consent decision.
///
/// Serialized as camelCase JSON, byte-compatible with the persisted format
/// of the original widget (`ccpaOptOut` included only when set). The
/// `necessary` flag is always `true`: it is normalized on deserialization
/// so no stored value can clear it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRecord {
    #[serde(deserialize_with = "always_true", default = "default_true")]
    necessary: bool,
    pub preferences: bool,
    pub statistics: bool,
    pub marketing: bool,
    pub method: Option<ConsentMethod>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ccpa_opt_out: Option<bool>,
}

fn default_true() -> bool {
    true
}

fn always_true<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let _ = bool::deserialize(d)?;
    Ok(true)
}

impl ConsentRecord {
    /// The undecided record: all non-necessary flags false, no timestamp.
    #[must_use]
    pub fn unset() -> Self {
        Self {
            necessary: true,
            preferences: false,
            statistics: false,
            marketing: false,
            method: None,
            timestamp: None,
            ccpa_opt_out: None,
        }
    }

    /// An explicit decision granting every category.
    #[must_use]
    pub fn accept_all(now: DateTime<Utc>) -> Self {
        Self::saved(
            ConsentSelections {
                preferences: true,
                statistics: true,
                marketing: true,
            },
            now,
        )
    }

    /// An explicit decision declining every non-necessary category.
    #[must_use]
    pub fn decline_all(now: DateTime<Utc>) -> Self {
        Self::saved(ConsentSelections::default(), now)
    }

    /// An explicit decision with per-category selections.
    #[must_use]
    pub fn saved(selections: ConsentSelections, now: DateTime<Utc>) -> Self {
        Self {
            necessary: true,
            preferences: selections.preferences,
            statistics: selections.statistics,
            marketing: selections.marketing,
            method: Some(ConsentMethod::Explicit),
            timestamp: Some(now),
            ccpa_opt_out: None,
        }
    }

    /// A CCPA decision: opting out declines everything and records the
    /// opt-out flag; not opting out grants everything.
    #[must_use]
    pub fn ccpa(opt_out: bool, now: DateTime<Utc>) -> Self {
        Self {
            necessary: true,
            preferences: !opt_out,
            statistics: !opt_out,
            marketing: !opt_out,
            method: Some(ConsentMethod::Explicit),
            timestamp: Some(now),
            ccpa_opt_out: Some(opt_out),
        }
    }

    /// Always true.
    #[must_use]
    pub const fn necessary(&self) -> bool {
        true
    }

    /// Whether the given category is currently granted.
    #[must_use]
    pub fn grants(&self, category: CookieCategory) -> bool {
        match category {
            CookieCategory::Necessary => true,
            CookieCategory::Preferences => self.preferences,
            CookieCategory::Statistics => self.statistics,
            CookieCategory::Marketing => self.marketing,
        }
    }

    /// Whether a user decision has been recorded.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.timestamp.is_some()
    }

    /// Whether the decision is older than the expiry window.
    ///
    /// An unset record is not expired; it is simply undecided.
    #[must_use]
    pub fn is_expired(&self, expiry_days: u32, now: DateTime<Utc>) -> bool {
        match self.timestamp {
            Some(ts) => now > ts + Duration::days(i64::from(expiry_days)),
            None => false,
        }
    }

    /// Classifies the record's lifecycle state.
    #[must_use]
    pub fn state(&self, expiry_days: u32, now: DateTime<Utc>) -> ConsentState {
        if !self.is_decided() {
            ConsentState::Unset
        } else if self.is_expired(expiry_days, now) {
            ConsentState::Expired
        } else {
            ConsentState::Decided
        }
    }

    /// Drops the decision timestamp so the banner must be shown again.
    /// Prior category values are retained until overwritten.
    pub fn clear_timestamp(&mut self) {
        self.timestamp = None;
    }

    /// The current selections, without the always-true necessary flag.
    #[must_use]
    pub fn selections(&self) -> ConsentSelections {
        ConsentSelections {
            preferences: self.preferences,
            statistics: self.statistics,
            marketing: self.marketing,
        }
    }
}

impl Default for ConsentRecord {
    fn default() -> Self {
        Self::unset()
    }
}
