//! Fire-and-forget backend client.

use crate::transport::Transport;
use chrono::{DateTime, SecondsFormat, Utc};
use consentry_types::{AffiliateAd, Inventory, PrivacyInsight};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

/// Page context forwarded with monetization fetches.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub url: String,
    pub title: String,
    pub language: String,
}

/// Client for the backend's detection and monetization endpoints.
///
/// Every operation is best-effort: without a configured client id it is
/// skipped entirely, and transport failures are logged and swallowed.
/// Fetches degrade to empty collections.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    endpoint: String,
    client_id: Option<String>,
    domain: String,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoint: &str,
        client_id: Option<&str>,
        domain: &str,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client_id: client_id.map(str::to_string),
            domain: domain.to_string(),
        }
    }

    /// Posts the body and returns the response, `None` on any failure.
    async fn post_best_effort(&self, path: &str, body: Value) -> Option<Value> {
        let url = format!("{}/{path}", self.endpoint);
        match self.transport.post(&url, &body).await {
            Ok(response) => Some(response),
            Err(error) => {
                warn!(%path, %error, "telemetry request failed");
                None
            }
        }
    }

    /// Reports the detection inventory to `/cookie-scan`.
    pub async fn report_scan(&self, inventory: &Inventory, now: DateTime<Utc>) {
        let Some(client_id) = &self.client_id else {
            return;
        };

        // One combined array: cookies first, then scripts tagged with
        // their kind, the shape the scan endpoint ingests.
        let mut items: Vec<Value> = inventory
            .cookies
            .iter()
            .filter_map(|c| serde_json::to_value(c).ok())
            .collect();
        for script in &inventory.scripts {
            if let Ok(mut value) = serde_json::to_value(script) {
                if let Some(map) = value.as_object_mut() {
                    map.insert("type".to_string(), json!("script"));
                }
                items.push(value);
            }
        }

        self.post_best_effort(
            "cookie-scan",
            json!({
                "clientId": client_id,
                "domain": self.domain,
                "cookies": items,
                "timestamp": timestamp(now),
            }),
        )
        .await;
    }

    /// Fetches affiliate ads, empty on failure or without a client id.
    pub async fn fetch_affiliate_ads(&self, max_ads: u32, context: &PageContext) -> Vec<AffiliateAd> {
        let Some(client_id) = &self.client_id else {
            return Vec::new();
        };

        let body = json!({
            "clientId": client_id,
            "domain": self.domain,
            "maxAds": max_ads,
            "context": context,
        });
        match self.post_best_effort("affiliate-ads", body).await {
            Some(response) => serde_json::from_value(response).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Fetches privacy insights, empty on failure or without a client id.
    pub async fn fetch_privacy_insights(
        &self,
        language: &str,
        context: &PageContext,
    ) -> Vec<PrivacyInsight> {
        let Some(client_id) = &self.client_id else {
            return Vec::new();
        };

        let body = json!({
            "clientId": client_id,
            "domain": self.domain,
            "language": language,
            "context": context,
        });
        match self.post_best_effort("privacy-insights", body).await {
            Some(response) => serde_json::from_value(response).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Reports an affiliate ad click.
    pub async fn track_affiliate_click(&self, ad_id: &str, now: DateTime<Utc>) {
        let Some(client_id) = &self.client_id else {
            return;
        };

        self.post_best_effort(
            "affiliate-click",
            json!({
                "clientId": client_id,
                "adId": ad_id,
                "domain": self.domain,
                "timestamp": timestamp(now),
            }),
        )
        .await;
    }

    /// Reports an insight click with its revenue-share metadata.
    pub async fn track_insight_click(
        &self,
        insight_id: &str,
        revenue_share: f64,
        now: DateTime<Utc>,
    ) {
        let Some(client_id) = &self.client_id else {
            return;
        };

        self.post_best_effort(
            "privacy-insight-click",
            json!({
                "clientId": client_id,
                "insightId": insight_id,
                "domain": self.domain,
                "timestamp": timestamp(now),
                "revenueShare": revenue_share,
            }),
        )
        .await;
    }
}

fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
