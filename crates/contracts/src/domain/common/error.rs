use super::RecordId;
use thiserror::Error;

/// Ошибки хранилища записей
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record {id} not found")]
    NotFound { id: RecordId },

    #[error("duplicate record id {id}")]
    DuplicateId { id: RecordId },
}

/// Отклонённая загрузка изображения
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("Please select a valid image file ({mime} is not an image)")]
    NotAnImage { mime: String },
}

/// Ошибки контроллера списка и редактора
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListViewError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("editor is not open")]
    EditorClosed,

    #[error("a save is already in progress")]
    Busy,

    #[error("no deletion is awaiting confirmation")]
    NothingPending,
}
