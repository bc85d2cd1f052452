//! Form data value objects

use serde::{Deserialize, Serialize};

/// The three fields collected by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Label shown on the input border
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Values typed into the wizard. Serialises to `{name, email, message}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// True when the field holds something other than whitespace
    pub fn is_filled(&self, field: Field) -> bool {
        !self.get(field).trim_matches(is_blank).is_empty()
    }
}

/// Whitespace as browsers trim it: a BOM counts, NEXT LINE (U+0085) does not
fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_all_empty() {
        let data = FormData::default();
        assert_eq!(data.name, "");
        assert_eq!(data.email, "");
        assert_eq!(data.message, "");
    }

    #[test]
    fn test_set_only_touches_target_field() {
        let mut data = FormData {
            name: "Ada".to_string(),
            email: "a@x.com".to_string(),
            message: "hi".to_string(),
        };
        data.set(Field::Email, "b@y.org".to_string());
        assert_eq!(
            data,
            FormData {
                name: "Ada".to_string(),
                email: "b@y.org".to_string(),
                message: "hi".to_string(),
            }
        );
    }

    #[test]
    fn test_is_filled_trims_whitespace() {
        let mut data = FormData::default();
        assert!(!data.is_filled(Field::Name));
        data.set(Field::Name, "  \t ".to_string());
        assert!(!data.is_filled(Field::Name));
        data.set(Field::Name, " a ".to_string());
        assert!(data.is_filled(Field::Name));
    }

    #[test]
    fn test_is_filled_matches_browser_trim() {
        let mut data = FormData::default();
        for blank in ["\u{FEFF}", " \u{FEFF}\u{A0}", "\u{2028}\u{3000}"] {
            data.set(Field::Name, blank.to_string());
            assert!(!data.is_filled(Field::Name), "{blank:?} should be blank");
        }
        data.set(Field::Name, "\u{85}".to_string());
        assert!(data.is_filled(Field::Name));
    }

    #[test]
    fn test_serializes_with_field_keys() {
        let data = FormData {
            name: "Ada".to_string(),
            email: "a@x.com".to_string(),
            message: String::new(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ada", "email": "a@x.com", "message": ""})
        );
    }
}
