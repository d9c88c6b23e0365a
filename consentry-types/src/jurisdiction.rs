//! Privacy jurisdictions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A resolved privacy jurisdiction.
///
/// `Exempt` (serialized `"none"`) suppresses the banner entirely. No
/// detector currently produces it; it exists as an extension point for
/// jurisdictions that require no notice and is reachable only through
/// explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    Gdpr,
    Ccpa,
    Lgpd,
    #[serde(rename = "none")]
    Exempt,
}

impl Jurisdiction {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Jurisdiction::Gdpr => "gdpr",
            Jurisdiction::Ccpa => "ccpa",
            Jurisdiction::Lgpd => "lgpd",
            Jurisdiction::Exempt => "none",
        }
    }

    /// Whether this jurisdiction requires no consent notice at all.
    #[must_use]
    pub const fn is_exempt(&self) -> bool {
        matches!(self, Jurisdiction::Exempt)
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gdpr" => Ok(Jurisdiction::Gdpr),
            "ccpa" => Ok(Jurisdiction::Ccpa),
            "lgpd" => Ok(Jurisdiction::Lgpd),
            "none" => Ok(Jurisdiction::Exempt),
            _ => Err(()),
        }
    }
}
