//! Общие типы сайта туров: сущности админки, ядро списков
//! (хранилище, запросы, редактор), валидаторы форм, сессия и конфигурация.
//!
//! Крейт не зависит от wasm и целиком тестируется нативно.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
