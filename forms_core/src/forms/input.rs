//! Input checks the browser performs natively on the HTML forms
//! (`required`, `type="email"`, `type="date"`, `<select>` options),
//! applied to submissions that arrive through the JSON API.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use validator::Validate;

use super::{FormKind, InputKind, SERVICE_OPTIONS};

#[derive(Debug, Validate)]
struct EmailInput {
    #[validate(email)]
    email: String,
}

pub fn validate_input<'a, I>(kind: FormKind, fields: I) -> Result<(), BTreeMap<String, String>>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut errors = BTreeMap::new();
    let mut seen = BTreeMap::new();

    for (name, value) in fields {
        match kind.field(name) {
            Some(spec) => {
                seen.insert(spec.name, value);
            }
            None => {
                errors.insert(name.to_string(), "unknown field".to_string());
            }
        }
    }

    for spec in kind.fields() {
        // `required` only rejects an empty value; whitespace counts as filled in.
        let raw = seen.get(spec.name).copied().unwrap_or("");
        if raw.is_empty() {
            if spec.required {
                errors.insert(spec.name.to_string(), "required".to_string());
            }
            continue;
        }
        let value = raw.trim();

        let problem = match spec.input {
            InputKind::Email if (EmailInput { email: value.to_string() }).validate().is_err() => {
                Some("invalid email address")
            }
            InputKind::Date if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() => {
                Some("expected a date as YYYY-MM-DD")
            }
            InputKind::Select if !SERVICE_OPTIONS.iter().any(|o| o.value == value) => {
                Some("not one of the offered options")
            }
            _ => None,
        };

        if let Some(problem) = problem {
            errors.insert(spec.name.to_string(), problem.to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
