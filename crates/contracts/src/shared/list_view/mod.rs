//! Ядро списков админки
//!
//! Один обобщённый набор компонентов на все виды записей:
//! - `RecordStore` - упорядоченное хранилище записей в памяти
//! - `ListQuery` / `apply_query` - чистая выборка (поиск, фасеты, сортировка)
//! - `Editor` - черновик записи до подтверждения
//! - `ListViewController` - связывает выборку, редактор и действия над записями

mod controller;
mod editor;
mod query;
mod store;

pub use controller::{ConfirmTicket, ListViewController};
pub use editor::{Editor, EditorMode};
pub use query::{apply_query, parse_leading_int, ListQuery};
pub use store::RecordStore;

#[cfg(test)]
mod tests;
