//! HTTP client for the TBM analysis backend.

use super::types::{GasData, LithologyData, ReportResponse, SummaryData};
use crate::settings::Settings;
use reqwest::blocking::Client;
use std::time::Duration;

/// Default backend address; overridable in settings.
const API_BASE: &str = "http://127.0.0.1:8000";

pub struct ApiClient {
    client: Client,
    base_url: String,
    report_timeout: Duration,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base(API_BASE, Duration::from_secs(60), Duration::from_secs(120))
    }

    pub fn with_base(base_url: &str, timeout: Duration, report_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            report_timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_base(
            &settings.api_base_url,
            Duration::from_secs(settings.request_timeout_secs),
            Duration::from_secs(settings.report_timeout_secs),
        )
    }

    /// Check if the backend is reachable (cheap probe against the summary
    /// endpoint; the backend has no dedicated health route).
    pub fn health(&self) -> Result<bool, String> {
        let url = format!("{}/api/tbm/summary", self.base_url);
        match self.client.get(&url).send() {
            Ok(resp) => {
                if resp.status().is_success() {
                    Ok(true)
                } else {
                    Err(format!("API returned status: {}", resp.status()))
                }
            }
            Err(e) => Err(format!("Failed to connect to API: {}", e)),
        }
    }

    /// Fetch the shift advance/stop summary.
    pub fn fetch_summary(&self) -> Result<SummaryData, String> {
        self.get_json("/api/tbm/summary")
    }

    /// Fetch lithology segments and per-class efficiency aggregates.
    pub fn fetch_lithology(&self) -> Result<LithologyData, String> {
        self.get_json("/api/tbm/lithology")
    }

    /// Fetch per-gas statistics and exceedances.
    pub fn fetch_gas(&self) -> Result<GasData, String> {
        self.get_json("/api/tbm/gas")
    }

    /// Trigger server-side report generation. Slow: the backend gathers
    /// shift statistics and calls an LLM, hence the dedicated timeout.
    pub fn generate_report(&self) -> Result<String, String> {
        let url = format!("{}/api/tbm/report", self.base_url);
        let resp = self
            .client
            .post(&url)
            .timeout(self.report_timeout)
            .send()
            .map_err(|e| format!("Request failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("API error: {}", resp.status()));
        }

        let report: ReportResponse = resp
            .json()
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(report.report)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| format!("Request failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("API error: {}", resp.status()));
        }

        resp.json()
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
