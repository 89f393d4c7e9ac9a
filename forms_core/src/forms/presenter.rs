//! Status Presenter: maps a form's status to the banner shown above it

use serde::Serialize;

use super::{DebugInfo, FormKind, SubmissionStatus};
use crate::i18n::Translator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "banner", rename_all = "lowercase")]
pub enum Banner {
    None,
    Success { message: String },
    Error { message: String, debug: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

struct Keys {
    success: &'static str,
    error: &'static str,
    submit: &'static str,
    submitting: &'static str,
}

fn keys(kind: FormKind) -> Keys {
    match kind {
        FormKind::Contact => Keys {
            success: "contactFormSuccess",
            error: "contactFormError",
            submit: "contactFormSubmit",
            submitting: "contactFormSubmitting",
        },
        FormKind::Reservation => Keys {
            success: "formSuccessMessage",
            error: "formErrorMessage",
            submit: "formSubmitButton",
            submitting: "formSubmitting",
        },
    }
}

pub struct StatusPresenter;

impl StatusPresenter {
    pub fn banner(
        kind: FormKind,
        status: SubmissionStatus,
        debug_info: Option<&DebugInfo>,
        t: &dyn Translator,
    ) -> Banner {
        let keys = keys(kind);
        match status {
            SubmissionStatus::Idle | SubmissionStatus::Submitting => Banner::None,
            SubmissionStatus::Success => Banner::Success {
                message: t.t(keys.success),
            },
            SubmissionStatus::Error => Banner::Error {
                message: t.t(keys.error),
                debug: debug_info.map(|d| d.to_string()),
            },
        }
    }

    pub fn submit_control(kind: FormKind, status: SubmissionStatus, t: &dyn Translator) -> SubmitControl {
        let keys = keys(kind);
        if status == SubmissionStatus::Submitting {
            SubmitControl {
                label: t.t(keys.submitting),
                disabled: true,
            }
        } else {
            SubmitControl {
                label: t.t(keys.submit),
                disabled: false,
            }
        }
    }
}
