//! Валидация форм сайта (контакты, оплата)
//!
//! Валидатор - чистая функция: значения формы -> ошибки по полям.
//! Отсутствие поля в `FieldErrors` означает, что поле корректно.

mod contact;
mod form_state;
mod payment;
mod rules;

pub use contact::{ContactForm, CONTACT_MESSAGE_MIN_LEN};
pub use form_state::{FormState, SubmitPhase};
pub use payment::{PaymentForm, COUNTRIES};
pub use rules::{is_card_number, is_cvv, is_email, is_expiry, FieldRules, Format};

use std::collections::BTreeMap;

/// Ошибки по именам полей
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Форма из текстовых полей с фиксированным набором имён
pub trait Form: Clone + Default + PartialEq + std::fmt::Debug {
    /// Имена полей в порядке отображения
    fn field_names() -> &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    fn validate(&self) -> FieldErrors;
}
