//! Имитация сессии: наличие токена в хранилище означает "вошёл"

use super::{LoginRequest, SignupRequest};
use std::collections::HashMap;

/// Ключ токена в localStorage
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Токен, который пишется при любом входе
pub const MOCK_TOKEN: &str = "dummy-token";

/// Хранилище строк "ключ-значение" (localStorage в браузере)
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

/// Хранилище в памяти (тесты, окружение без window)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// Состояние входа. Хранилище читается один раз при `init`,
/// дальше каждое изменение пишется в него сразу.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session<S: SessionStorage> {
    storage: S,
    token: Option<String>,
}

impl<S: SessionStorage> Session<S> {
    pub fn init(storage: S) -> Self {
        let token = storage.get_item(AUTH_TOKEN_KEY);
        log::debug!("session restored: logged_in={}", token.is_some());
        Self { storage, token }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn login(&mut self, request: &LoginRequest) {
        log::info!("login: {}", request.email);
        self.store_token();
    }

    pub fn signup(&mut self, request: &SignupRequest) {
        log::info!("signup: {} <{}>", request.username, request.email);
        self.store_token();
    }

    /// Выход: токен удаляется из хранилища
    pub fn clear(&mut self) {
        self.storage.remove_item(AUTH_TOKEN_KEY);
        self.token = None;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn store_token(&mut self) {
        self.storage.set_item(AUTH_TOKEN_KEY, MOCK_TOKEN);
        self.token = Some(MOCK_TOKEN.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let mut session = Session::init(MemoryStorage::default());
        assert!(!session.is_logged_in());

        session.login(&LoginRequest {
            email: "jane@example.com".into(),
            password: "anything".into(),
        });
        assert!(session.is_logged_in());
        assert_eq!(
            session.storage().get_item(AUTH_TOKEN_KEY).as_deref(),
            Some(MOCK_TOKEN)
        );

        session.clear();
        assert!(!session.is_logged_in());
        assert_eq!(session.storage().get_item(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn test_init_reads_existing_token() {
        let mut storage = MemoryStorage::default();
        storage.set_item(AUTH_TOKEN_KEY, "whatever");
        let session = Session::init(storage);
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("whatever"));
    }

    #[test]
    fn test_signup_logs_in() {
        let mut session = Session::init(MemoryStorage::default());
        session.signup(&SignupRequest::default());
        assert!(session.is_logged_in());
    }
}
