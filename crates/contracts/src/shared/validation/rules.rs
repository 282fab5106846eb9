//! Правила проверки отдельного поля

use regex::Regex;
use std::sync::OnceLock;

/// Формат значения, проверяемый регулярным выражением
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `local@domain.tld`
    Email,
    /// 16 цифр, пробелы игнорируются
    CardNumber,
    /// `MM/YY`, месяц 01–12
    Expiry,
    /// 3–4 цифры
    Cvv,
}

impl Format {
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            Format::Email => is_email(value),
            Format::CardNumber => is_card_number(value),
            Format::Expiry => is_expiry(value),
            Format::Cvv => is_cvv(value),
        }
    }
}

/// Правила для одного поля.
///
/// Проверки идут по порядку: обязательность, минимальная длина, формат.
/// Возвращается первое нарушенное правило.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldRules {
    pub required: Option<&'static str>,
    pub min_length: Option<(usize, &'static str)>,
    pub format: Option<(Format, &'static str)>,
}

impl FieldRules {
    pub const fn required(message: &'static str) -> Self {
        Self {
            required: Some(message),
            min_length: None,
            format: None,
        }
    }

    pub const fn min_length(mut self, min: usize, message: &'static str) -> Self {
        self.min_length = Some((min, message));
        self
    }

    pub const fn format(mut self, format: Format, message: &'static str) -> Self {
        self.format = Some((format, message));
        self
    }

    pub fn validate(&self, value: &str) -> Result<(), &'static str> {
        let trimmed = value.trim();
        if let Some(message) = self.required {
            if trimmed.is_empty() {
                return Err(message);
            }
        }
        if let Some((min, message)) = self.min_length {
            if trimmed.chars().count() < min {
                return Err(message);
            }
        }
        if let Some((format, message)) = self.format {
            if !format.is_valid(value) {
                return Err(message);
            }
        }
        Ok(())
    }
}

fn regex(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("invalid validation pattern {pattern}: {e}");
            None
        }
    })
    .as_ref()
}

/// Простая форма адреса: непробельные символы вокруг `@` и точки.
/// Совпадение ищется в любом месте строки.
pub fn is_email(value: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    regex(&RE, r"\S+@\S+\.\S+").is_some_and(|re| re.is_match(value))
}

pub fn is_card_number(value: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    regex(&RE, r"^\d{16}$").is_some_and(|re| re.is_match(&digits))
}

pub fn is_expiry(value: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    regex(&RE, r"^(0[1-9]|1[0-2])/\d{2}$").is_some_and(|re| re.is_match(value))
}

pub fn is_cvv(value: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    regex(&RE, r"^\d{3,4}$").is_some_and(|re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_email("jane@example.com"));
        assert!(is_email("a@b.c"));
        assert!(!is_email("jane@example"));
        assert!(!is_email("jane.example.com"));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn test_card_number() {
        assert!(is_card_number("4242 4242 4242 4242"));
        assert!(is_card_number("4242424242424242"));
        assert!(!is_card_number("4242 4242 4242"));
        assert!(!is_card_number("4242-4242-4242-4242"));
    }

    #[test]
    fn test_expiry() {
        assert!(is_expiry("01/27"));
        assert!(is_expiry("12/30"));
        assert!(!is_expiry("13/27"));
        assert!(!is_expiry("00/27"));
        assert!(!is_expiry("1/27"));
    }

    #[test]
    fn test_cvv() {
        assert!(is_cvv("123"));
        assert!(is_cvv("1234"));
        assert!(!is_cvv("12"));
        assert!(!is_cvv("12a"));
    }

    #[test]
    fn test_rules_first_failure_wins() {
        let rules = FieldRules::required("Email is required").format(Format::Email, "Email is invalid");
        assert_eq!(rules.validate("   "), Err("Email is required"));
        assert_eq!(rules.validate("nope"), Err("Email is invalid"));
        assert_eq!(rules.validate("a@b.co"), Ok(()));

        let message = FieldRules::required("Message is required").min_length(10, "too short");
        assert_eq!(message.validate("  short   "), Err("too short"));
        assert_eq!(message.validate("long enough"), Ok(()));
    }
}
