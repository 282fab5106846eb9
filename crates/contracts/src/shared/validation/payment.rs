use super::{FieldErrors, FieldRules, Form, Format};
use serde::{Deserialize, Serialize};

/// Страны в выпадающем списке (код, название)
pub const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CA", "Canada"),
    ("UK", "United Kingdom"),
    ("AU", "Australia"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("IT", "Italy"),
    ("ES", "Spain"),
    ("JP", "Japan"),
    ("other", "Other"),
];

const RULES: &[(&str, FieldRules)] = &[
    (
        "card_number",
        FieldRules::required("Card number is required")
            .format(Format::CardNumber, "Please enter a valid 16-digit card number"),
    ),
    (
        "expiry_date",
        FieldRules::required("Expiry date is required")
            .format(Format::Expiry, "Please enter a valid expiry date (MM/YY)"),
    ),
    (
        "cvv",
        FieldRules::required("CVV is required").format(Format::Cvv, "Please enter a valid CVV"),
    ),
    ("cardholder_name", FieldRules::required("Cardholder name is required")),
    (
        "email",
        FieldRules::required("Email is required").format(Format::Email, "Email is invalid"),
    ),
    ("phone", FieldRules::required("Phone number is required")),
    ("address", FieldRules::required("Address is required")),
    ("city", FieldRules::required("City is required")),
    ("zip_code", FieldRules::required("ZIP code is required")),
    ("country", FieldRules::required("Country is required")),
];

/// Форма оплаты бронирования
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

impl Form for PaymentForm {
    fn field_names() -> &'static [&'static str] {
        &[
            "card_number",
            "expiry_date",
            "cvv",
            "cardholder_name",
            "email",
            "phone",
            "address",
            "city",
            "zip_code",
            "country",
        ]
    }

    fn field(&self, name: &str) -> Option<&str> {
        let value: &String = match name {
            "card_number" => &self.card_number,
            "expiry_date" => &self.expiry_date,
            "cvv" => &self.cvv,
            "cardholder_name" => &self.cardholder_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "address" => &self.address,
            "city" => &self.city,
            "zip_code" => &self.zip_code,
            "country" => &self.country,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let value = match name {
            "card_number" => &mut self.card_number,
            "expiry_date" => &mut self.expiry_date,
            "cvv" => &mut self.cvv,
            "cardholder_name" => &mut self.cardholder_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "address" => &mut self.address,
            "city" => &mut self.city,
            "zip_code" => &mut self.zip_code,
            "country" => &mut self.country,
            _ => return None,
        };
        Some(value)
    }

    fn validate(&self) -> FieldErrors {
        RULES
            .iter()
            .filter_map(|(field, rules)| {
                let value = self.field(field).unwrap_or_default();
                rules
                    .validate(value)
                    .err()
                    .map(|message| (*field, message.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PaymentForm {
        PaymentForm {
            card_number: "4242 4242 4242 4242".into(),
            expiry_date: "08/27".into(),
            cvv: "123".into(),
            cardholder_name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            phone: "+1 555 0100".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            zip_code: "12345".into(),
            country: "US".into(),
        }
    }

    #[test]
    fn test_valid_payment() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_every_field_is_required() {
        let errors = PaymentForm::default().validate();
        assert_eq!(errors.len(), PaymentForm::field_names().len());
        assert_eq!(errors["phone"], "Phone number is required");
        assert_eq!(errors["zip_code"], "ZIP code is required");
    }

    #[test]
    fn test_format_errors() {
        let form = PaymentForm {
            card_number: "4242 4242".into(),
            expiry_date: "13/27".into(),
            cvv: "12".into(),
            ..filled()
        };
        let errors = form.validate();
        assert_eq!(errors["card_number"], "Please enter a valid 16-digit card number");
        assert_eq!(errors["expiry_date"], "Please enter a valid expiry date (MM/YY)");
        assert_eq!(errors["cvv"], "Please enter a valid CVV");
        assert_eq!(errors.len(), 3);
    }
}
