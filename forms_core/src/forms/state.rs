//! Form State Holder: field values plus the submission status of one form instance

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FormError, FormKind, FormPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Submitting => write!(f, "submitting"),
            SubmissionStatus::Success => write!(f, "success"),
            SubmissionStatus::Error => write!(f, "error"),
        }
    }
}

/// Diagnostic text shown next to the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebugInfo(String);

impl DebugInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// `"<status> <statusText>"` for a rejected webhook call.
    pub fn http(status: u16, status_text: &str) -> Self {
        Self(format!("{} {}", status, status_text).trim_end().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Terminal state a submission settles into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub status: SubmissionStatus,
    pub debug_info: Option<DebugInfo>,
    pub clear_form: bool,
}

impl Completion {
    pub fn success(clear_form: bool) -> Self {
        Self {
            status: SubmissionStatus::Success,
            debug_info: None,
            clear_form,
        }
    }

    pub fn error(debug_info: DebugInfo) -> Self {
        Self {
            status: SubmissionStatus::Error,
            debug_info: Some(debug_info),
            clear_form: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    kind: FormKind,
    fields: FormPayload,
    status: SubmissionStatus,
    debug_info: Option<DebugInfo>,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: FormPayload::empty_for(kind),
            status: SubmissionStatus::Idle,
            debug_info: None,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn debug_info(&self) -> Option<&DebugInfo> {
        self.debug_info.as_ref()
    }

    pub fn payload(&self) -> &FormPayload {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field)
    }

    /// Updates one field. The status is left untouched.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        if self.fields.set(field, value) {
            Ok(())
        } else {
            Err(FormError::UnknownField(field.to_string()))
        }
    }

    pub fn reset(&mut self) {
        self.fields.clear_values();
    }

    pub(crate) fn begin_submit(&mut self) -> Result<FormPayload, FormError> {
        if self.status == SubmissionStatus::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        self.status = SubmissionStatus::Submitting;
        self.debug_info = None;
        Ok(self.fields.clone())
    }

    pub(crate) fn complete(&mut self, completion: Completion) {
        self.status = completion.status;
        self.debug_info = completion.debug_info;
        if completion.clear_form {
            self.reset();
        }
    }

    pub(crate) fn revert_to_idle(&mut self) -> bool {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_blank() {
        let state = FormState::new(FormKind::Contact);
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(state.payload().is_blank());
        assert!(state.debug_info().is_none());
    }

    #[test]
    fn test_set_never_changes_status() {
        let mut state = FormState::new(FormKind::Reservation);
        for status in [
            SubmissionStatus::Idle,
            SubmissionStatus::Submitting,
            SubmissionStatus::Success,
            SubmissionStatus::Error,
        ] {
            state.status = status;
            state.set("phone", "+90 555 000 0000").unwrap();
            assert_eq!(state.status(), status);
        }
        assert_eq!(state.get("phone"), Some("+90 555 000 0000"));
    }

    #[test]
    fn test_set_unknown_field() {
        let mut state = FormState::new(FormKind::Contact);
        let err = state.set("service", "dental").unwrap_err();
        assert!(matches!(err, FormError::UnknownField(f) if f == "service"));
    }

    #[test]
    fn test_reset_clears_fields_only() {
        let mut state = FormState::new(FormKind::Contact);
        state.set("name", "Ali").unwrap();
        state.status = SubmissionStatus::Error;
        state.reset();
        assert!(state.payload().is_blank());
        assert_eq!(state.status(), SubmissionStatus::Error);
    }

    #[test]
    fn test_begin_submit_guards_double_submit() {
        let mut state = FormState::new(FormKind::Contact);
        state.set("name", "Ali").unwrap();
        let payload = state.begin_submit().unwrap();
        assert_eq!(payload.get("name"), Some("Ali"));
        assert_eq!(state.status(), SubmissionStatus::Submitting);
        assert!(matches!(state.begin_submit(), Err(FormError::AlreadySubmitting)));
    }

    #[test]
    fn test_complete_error_keeps_fields() {
        let mut state = FormState::new(FormKind::Contact);
        state.set("name", "Ali").unwrap();
        state.begin_submit().unwrap();
        state.complete(Completion::error(DebugInfo::http(500, "Internal Server Error")));
        assert_eq!(state.status(), SubmissionStatus::Error);
        assert_eq!(state.get("name"), Some("Ali"));
        assert_eq!(state.debug_info().unwrap().as_str(), "500 Internal Server Error");
    }

    #[test]
    fn test_revert_only_from_success() {
        let mut state = FormState::new(FormKind::Reservation);
        assert!(!state.revert_to_idle());
        state.status = SubmissionStatus::Error;
        assert!(!state.revert_to_idle());
        state.status = SubmissionStatus::Success;
        assert!(state.revert_to_idle());
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_debug_info_without_reason_phrase() {
        assert_eq!(DebugInfo::http(599, "").as_str(), "599");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SubmissionStatus::Submitting.to_string(), "submitting");
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Success).unwrap(),
            "\"success\""
        );
    }
}
