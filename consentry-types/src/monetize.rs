//! Monetization wire types returned by the backend.

use serde::{Deserialize, Serialize};

/// An affiliate advertisement rendered in the banner's auxiliary section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateAd {
    pub id: String,
    pub image: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

/// A privacy insight shown in the post-consent insights widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyInsight {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub sponsored: bool,
}
