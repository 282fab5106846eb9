pub mod session;

pub use session::{MemoryStorage, Session, SessionStorage, AUTH_TOKEN_KEY, MOCK_TOKEN};

use serde::{Deserialize, Serialize};

/// Данные формы входа. Проверки нет: любой ввод принимается.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Данные формы регистрации
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}
