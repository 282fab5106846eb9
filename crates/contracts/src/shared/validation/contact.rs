use super::{FieldErrors, FieldRules, Form, Format};
use serde::{Deserialize, Serialize};

/// Минимальная длина сообщения (после обрезки пробелов)
pub const CONTACT_MESSAGE_MIN_LEN: usize = 10;

const NAME: FieldRules = FieldRules::required("Name is required");
const EMAIL: FieldRules =
    FieldRules::required("Email is required").format(Format::Email, "Email is invalid");
const SUBJECT: FieldRules = FieldRules::required("Subject is required");
const MESSAGE: FieldRules = FieldRules::required("Message is required").min_length(
    CONTACT_MESSAGE_MIN_LEN,
    "Message must be at least 10 characters long",
);

/// Форма обратной связи
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Form for ContactForm {
    fn field_names() -> &'static [&'static str] {
        &["name", "email", "subject", "message"]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(self.name.as_str()),
            "email" => Some(self.email.as_str()),
            "subject" => Some(self.subject.as_str()),
            "message" => Some(self.message.as_str()),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "subject" => Some(&mut self.subject),
            "message" => Some(&mut self.message),
            _ => None,
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (field, rules, value) in [
            ("name", NAME, &self.name),
            ("email", EMAIL, &self.email),
            ("subject", SUBJECT, &self.subject),
            ("message", MESSAGE, &self.message),
        ] {
            if let Err(message) = rules.validate(value) {
                errors.insert(field, message.to_string());
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            subject: "Booking".into(),
            message: "When is the next Bali departure?".into(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
        assert_eq!(errors.get("subject").map(String::as_str), Some("Subject is required"));
        assert_eq!(errors.get("message").map(String::as_str), Some("Message is required"));
    }

    #[test]
    fn test_short_message_and_bad_email() {
        let form = ContactForm {
            email: "jane-at-example".into(),
            message: "Hello".into(),
            ..filled()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["email"], "Email is invalid");
        assert_eq!(errors["message"], "Message must be at least 10 characters long");
    }
}
