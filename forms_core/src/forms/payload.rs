use serde::ser::{Serialize, SerializeMap, Serializer};

use super::FormKind;

/// Field name to value mapping, kept in the form's declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormPayload {
    entries: Vec<(String, String)>,
}

impl FormPayload {
    /// Every field of `kind`, each holding an empty string.
    pub fn empty_for(kind: FormKind) -> Self {
        Self {
            entries: kind
                .fields()
                .iter()
                .map(|f| (f.name.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns false when `name` is not one of the payload's fields.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => {
                *v = value.into();
                true
            }
            None => false,
        }
    }

    pub fn clear_values(&mut self) {
        for (_, v) in self.entries.iter_mut() {
            v.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_empty())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for FormPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_has_every_field() {
        let payload = FormPayload::empty_for(FormKind::Reservation);
        assert_eq!(payload.len(), 6);
        assert!(payload.is_blank());
        assert_eq!(payload.get("service"), Some(""));
        assert_eq!(payload.get("subject"), None);
    }

    #[test]
    fn test_json_keys_follow_field_order() {
        let mut payload = FormPayload::empty_for(FormKind::Contact);
        payload.set("message", "Merhaba");
        payload.set("name", "Ayşe");
        payload.set("email", "ayse@example.com");
        payload.set("subject", "Randevu");

        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"name":"Ayşe","email":"ayse@example.com","subject":"Randevu","message":"Merhaba"}"#
        );
    }

    #[test]
    fn test_set_unknown_field_is_rejected() {
        let mut payload = FormPayload::empty_for(FormKind::Contact);
        assert!(!payload.set("phone", "123"));
        assert_eq!(payload.get("phone"), None);
    }

    #[test]
    fn test_clear_values_keeps_keys() {
        let mut payload = FormPayload::empty_for(FormKind::Contact);
        payload.set("name", "Ali");
        payload.clear_values();
        assert!(payload.is_blank());
        assert_eq!(payload.len(), 4);
    }
}
