//! Per-form decisions on how delivery failures are shown to the visitor

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReport {
    /// Show the error banner with debug text.
    ReportError,
    /// Show the success banner; the failure is only logged.
    ReportSuccess,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailurePolicy {
    /// Webhook answered outside 200-299.
    pub on_http_failure: FailureReport,
    /// Webhook never answered (refused, DNS, timeout).
    pub on_network_failure: FailureReport,
    /// Seconds the success banner stays before the form returns to idle.
    #[serde(default)]
    pub success_display_seconds: Option<u64>,
}

impl FailurePolicy {
    pub fn contact() -> Self {
        Self {
            on_http_failure: FailureReport::ReportError,
            on_network_failure: FailureReport::ReportSuccess,
            success_display_seconds: None,
        }
    }

    pub fn reservation() -> Self {
        Self {
            on_http_failure: FailureReport::ReportSuccess,
            on_network_failure: FailureReport::ReportSuccess,
            success_display_seconds: Some(5),
        }
    }

    /// Both failure classes surface as errors.
    pub fn strict() -> Self {
        Self {
            on_http_failure: FailureReport::ReportError,
            on_network_failure: FailureReport::ReportError,
            success_display_seconds: None,
        }
    }

    pub fn success_display(&self) -> Option<Duration> {
        self.success_display_seconds.map(Duration::from_secs)
    }
}
