//! Contact and reservation forms and the webhook submission flow

pub mod controller;
pub mod input;
pub mod kind;
pub mod payload;
pub mod policy;
pub mod presenter;
pub mod registry;
pub mod session;
pub mod state;
pub mod transport;

pub use controller::{SubmissionController, SubmissionOutcome};
pub use input::validate_input;
pub use kind::{FieldSpec, FormKind, InputKind, ServiceOption, SERVICE_OPTIONS};
pub use payload::FormPayload;
pub use policy::{FailurePolicy, FailureReport};
pub use presenter::{Banner, StatusPresenter, SubmitControl};
pub use registry::SubmissionRegistry;
pub use session::{FormSession, SessionSnapshot};
pub use state::{Completion, DebugInfo, FormState, SubmissionStatus};
pub use transport::{HttpWebhookTransport, TransportError, WebhookResponse, WebhookTransport};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown form: {0}")]
    UnknownKind(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Submission already in progress")]
    AlreadySubmitting,
}
