use super::{FieldErrors, Form};

/// Этап отправки формы
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

/// Значения формы, ошибки по полям и этап отправки
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<F: Form> {
    pub values: F,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
}

impl<F: Form> FormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Изменить поле; ошибка этого поля снимается
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.values.field_mut(name) {
            *field = value.into();
            self.errors.remove(name);
        } else {
            log::warn!("unknown form field: {}", name);
        }
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Проверить форму. При ошибках остаёмся в `Editing` и возвращаем `false`.
    pub fn submit(&mut self) -> bool {
        if self.phase == SubmitPhase::Submitting {
            return false;
        }
        self.errors = self.values.validate();
        if self.errors.is_empty() {
            self.phase = SubmitPhase::Submitting;
            true
        } else {
            self.phase = SubmitPhase::Editing;
            false
        }
    }

    /// Завершить отправку; `reset` очищает значения
    pub fn complete(&mut self, reset: bool) {
        if self.phase != SubmitPhase::Submitting {
            return;
        }
        self.phase = SubmitPhase::Succeeded;
        if reset {
            self.values = F::default();
        }
    }

    /// Вернуться к редактированию после экрана успеха
    pub fn start_over(&mut self) {
        self.phase = SubmitPhase::Editing;
        self.errors.clear();
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::ContactForm;

    fn contact_state() -> FormState<ContactForm> {
        let mut state = FormState::<ContactForm>::new();
        state.set_field("name", "Jane");
        state.set_field("email", "jane@example.com");
        state.set_field("subject", "Hello");
        state
    }

    #[test]
    fn test_short_message_blocks_submit() {
        let mut state = contact_state();
        state.set_field("message", "Hi th");

        assert!(!state.submit());
        assert_eq!(state.phase, SubmitPhase::Editing);
        assert_eq!(
            state.error("message"),
            Some("Message must be at least 10 characters long")
        );

        // Исправление поля снимает его ошибку
        state.set_field("message", "Hi there, is the tour available?");
        assert_eq!(state.error("message"), None);
    }

    #[test]
    fn test_submit_then_complete_resets() {
        let mut state = contact_state();
        state.set_field("message", "Looking forward to the trip!");

        assert!(state.submit());
        assert!(state.is_submitting());
        assert!(!state.submit());

        state.complete(true);
        assert_eq!(state.phase, SubmitPhase::Succeeded);
        assert_eq!(state.values, ContactForm::default());

        state.start_over();
        assert_eq!(state.phase, SubmitPhase::Editing);
    }

    #[test]
    fn test_complete_without_submit_is_ignored() {
        let mut state = contact_state();
        state.complete(true);
        assert_eq!(state.phase, SubmitPhase::Editing);
        assert_eq!(state.values.name, "Jane");
    }
}
