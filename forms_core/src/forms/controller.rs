//! Submission Controller: serialize, deliver once, resolve a terminal status

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{
    Completion, DebugInfo, FailurePolicy, FailureReport, FormError, FormKind, FormSession,
    SubmissionStatus, TransportError, WebhookResponse, WebhookTransport,
};

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub id: Uuid,
    pub kind: FormKind,
    pub status: SubmissionStatus,
    pub debug_info: Option<DebugInfo>,
    /// Delivery failure that was reported to the visitor as success.
    pub masked_failure: Option<String>,
    pub webhook_status: Option<u16>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SubmissionController {
    kind: FormKind,
    transport: Arc<dyn WebhookTransport>,
    policy: FailurePolicy,
}

impl SubmissionController {
    pub fn new(kind: FormKind, transport: Arc<dyn WebhookTransport>, policy: FailurePolicy) -> Self {
        Self {
            kind,
            transport,
            policy,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn policy(&self) -> &FailurePolicy {
        &self.policy
    }

    /// Delivers the session's fields and settles its status.
    ///
    /// The session is `submitting` before the first await. Delivery
    /// failures never surface as `Err`; they resolve to `success` or
    /// `error` according to the policy. The only error is a submit on a
    /// session that is already in flight.
    pub async fn submit(&self, session: &FormSession) -> Result<SubmissionOutcome, FormError> {
        let payload = session.begin_submit()?;
        let submitted_at = Utc::now();

        info!(
            form = %self.kind,
            session = %session.id(),
            endpoint = self.transport.endpoint(),
            "Submitting form to webhook"
        );

        let (completion, masked_failure, webhook_status) = match payload.to_json() {
            Ok(body) => {
                let result = self.transport.post_json(body).await;
                self.resolve(session.id(), result)
            }
            Err(e) => {
                error!(form = %self.kind, "Failed to serialize form payload: {}", e);
                (Completion::error(DebugInfo::new(e.to_string())), None, None)
            }
        };

        let status = completion.status;
        let debug_info = completion.debug_info.clone();
        session.complete(completion);

        if status == SubmissionStatus::Success {
            if let Some(delay) = self.policy.success_display() {
                let _ = session.revert_after(delay);
            }
        }

        Ok(SubmissionOutcome {
            id: session.id(),
            kind: self.kind,
            status,
            debug_info,
            masked_failure,
            webhook_status,
            submitted_at,
        })
    }

    fn resolve(
        &self,
        session_id: Uuid,
        result: Result<WebhookResponse, TransportError>,
    ) -> (Completion, Option<String>, Option<u16>) {
        match result {
            Ok(response) if response.is_success() => {
                info!(
                    form = %self.kind,
                    session = %session_id,
                    status = response.status,
                    "Webhook accepted submission"
                );
                (Completion::success(true), None, Some(response.status))
            }
            Ok(response) => {
                let debug_info = DebugInfo::http(response.status, &response.status_text);
                match self.policy.on_http_failure {
                    FailureReport::ReportError => {
                        warn!(
                            form = %self.kind,
                            session = %session_id,
                            status = response.status,
                            "Webhook rejected submission: {}",
                            debug_info
                        );
                        (Completion::error(debug_info), None, Some(response.status))
                    }
                    FailureReport::ReportSuccess => {
                        warn!(
                            form = %self.kind,
                            session = %session_id,
                            status = response.status,
                            "Webhook rejected submission, reporting success to visitor: {}",
                            debug_info
                        );
                        (
                            Completion::success(false),
                            Some(debug_info.to_string()),
                            Some(response.status),
                        )
                    }
                }
            }
            Err(e) => match self.policy.on_network_failure {
                FailureReport::ReportError => {
                    warn!(
                        form = %self.kind,
                        session = %session_id,
                        "Webhook delivery failed: {}",
                        e
                    );
                    (Completion::error(DebugInfo::new(e.to_string())), None, None)
                }
                FailureReport::ReportSuccess => {
                    warn!(
                        form = %self.kind,
                        session = %session_id,
                        "Webhook delivery failed, reporting success to visitor: {}",
                        e
                    );
                    (Completion::success(true), Some(e.to_string()), None)
                }
            },
        }
    }
}
