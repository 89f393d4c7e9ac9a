//! The two site forms and the fields they declare

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Reservation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
    Select,
    TextArea,
}

impl InputKind {
    /// Value of the `type` attribute for `<input>` based kinds.
    pub fn html_type(&self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Email => Some("email"),
            InputKind::Tel => Some("tel"),
            InputKind::Date => Some("date"),
            InputKind::Select | InputKind::TextArea => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub input: InputKind,
    pub required: bool,
    pub label_key: &'static str,
}

/// A `<select>` option: submitted value and translation key.
#[derive(Debug, Clone, Copy)]
pub struct ServiceOption {
    pub value: &'static str,
    pub label_key: &'static str,
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", input: InputKind::Text, required: true, label_key: "contactFormName" },
    FieldSpec { name: "email", input: InputKind::Email, required: true, label_key: "contactFormEmail" },
    FieldSpec { name: "subject", input: InputKind::Text, required: true, label_key: "contactFormSubject" },
    FieldSpec { name: "message", input: InputKind::TextArea, required: true, label_key: "contactFormMessage" },
];

const RESERVATION_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", input: InputKind::Text, required: true, label_key: "formNameLabel" },
    FieldSpec { name: "email", input: InputKind::Email, required: true, label_key: "formEmailLabel" },
    FieldSpec { name: "phone", input: InputKind::Tel, required: true, label_key: "formPhoneLabel" },
    FieldSpec { name: "service", input: InputKind::Select, required: true, label_key: "formServiceLabel" },
    FieldSpec { name: "date", input: InputKind::Date, required: true, label_key: "formDateLabel" },
    FieldSpec { name: "message", input: InputKind::TextArea, required: true, label_key: "formMessageLabel" },
];

pub const SERVICE_OPTIONS: &[ServiceOption] = &[
    ServiceOption { value: "dental", label_key: "formServiceDental" },
    ServiceOption { value: "aesthetic", label_key: "formServiceAesthetic" },
    ServiceOption { value: "accommodation", label_key: "formServiceAccommodation" },
    ServiceOption { value: "transfer", label_key: "formServiceTransfer" },
    ServiceOption { value: "tickets", label_key: "formServiceTickets" },
];

impl FormKind {
    pub const ALL: [FormKind; 2] = [FormKind::Contact, FormKind::Reservation];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Reservation => "reservation",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::Contact => CONTACT_FIELDS,
            FormKind::Reservation => RESERVATION_FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Page path for the HTML form.
    pub fn page_path(&self) -> &'static str {
        match self {
            FormKind::Contact => "/contact",
            FormKind::Reservation => "/reservation",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact" => Ok(FormKind::Contact),
            "reservation" => Ok(FormKind::Reservation),
            other => Err(FormError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        let contact: Vec<_> = FormKind::Contact.fields().iter().map(|f| f.name).collect();
        assert_eq!(contact, ["name", "email", "subject", "message"]);

        let reservation: Vec<_> = FormKind::Reservation.fields().iter().map(|f| f.name).collect();
        assert_eq!(reservation, ["name", "email", "phone", "service", "date", "message"]);
    }

    #[test]
    fn test_every_field_is_required() {
        for kind in FormKind::ALL {
            for spec in kind.fields() {
                assert!(spec.required, "{}.{}", kind, spec.name);
            }
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("contact".parse::<FormKind>().unwrap(), FormKind::Contact);
        assert_eq!("reservation".parse::<FormKind>().unwrap(), FormKind::Reservation);
        assert!(matches!(
            "newsletter".parse::<FormKind>(),
            Err(FormError::UnknownKind(k)) if k == "newsletter"
        ));
    }

    #[test]
    fn test_html_types() {
        assert_eq!(InputKind::Email.html_type(), Some("email"));
        assert_eq!(InputKind::Tel.html_type(), Some("tel"));
        assert_eq!(InputKind::TextArea.html_type(), None);
    }
}
