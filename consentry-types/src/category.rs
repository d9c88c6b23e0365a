//! Cookie and script categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The consent category a cookie or script belongs to.
///
/// `Necessary` is exempt from consent: it can never be blocked and is not
/// user-settable. The declared order (necessary, preferences, statistics,
/// marketing) is also the precedence order of the detection pattern tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieCategory {
    Necessary,
    Preferences,
    Statistics,
    Marketing,
}

impl CookieCategory {
    /// All categories in precedence order.
    pub const ALL: [CookieCategory; 4] = [
        CookieCategory::Necessary,
        CookieCategory::Preferences,
        CookieCategory::Statistics,
        CookieCategory::Marketing,
    ];

    /// Returns the lowercase wire name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CookieCategory::Necessary => "necessary",
            CookieCategory::Preferences => "preferences",
            CookieCategory::Statistics => "statistics",
            CookieCategory::Marketing => "marketing",
        }
    }

    /// Returns true for the always-granted `Necessary` category.
    #[must_use]
    pub const fn is_necessary(&self) -> bool {
        matches!(self, CookieCategory::Necessary)
    }
}

impl fmt::Display for CookieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CookieCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "necessary" => Ok(CookieCategory::Necessary),
            "preferences" => Ok(CookieCategory::Preferences),
            "statistics" => Ok(CookieCategory::Statistics),
            "marketing" => Ok(CookieCategory::Marketing),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cookie category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
