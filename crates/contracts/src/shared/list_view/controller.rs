use super::{apply_query, Editor, ListQuery, RecordStore};
use crate::domain::common::{
    FacetFilter, ListViewError, MediaUpload, Record, RecordId, StoreError,
};

/// Номер сеанса редактора, в котором начато подтверждение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmTicket(u64);

/// Состояние страницы списка: хранилище, выборка, редактор и модальные окна
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewController<R: Record> {
    store: RecordStore<R>,
    query: ListQuery<R>,
    editor: Editor<R>,
    /// Запись в окне просмотра
    viewing: Option<RecordId>,
    /// Запись, ожидающая подтверждения удаления
    pending_delete: Option<RecordId>,
    /// Строка сообщения над списком
    notice: Option<String>,
    /// Сеанс редактора; растёт при каждом открытии и закрытии
    session: u64,
    /// Незавершённое подтверждение
    saving: Option<ConfirmTicket>,
}

impl<R: Record> ListViewController<R> {
    pub fn new(store: RecordStore<R>) -> Self {
        Self {
            store,
            query: ListQuery::default(),
            editor: Editor::new(),
            viewing: None,
            pending_delete: None,
            notice: None,
            session: 0,
            saving: None,
        }
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn query(&self) -> &ListQuery<R> {
        &self.query
    }

    pub fn editor(&self) -> &Editor<R> {
        &self.editor
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    // ============================================================================
    // Выборка
    // ============================================================================

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
    }

    pub fn set_status_filter(&mut self, status: FacetFilter<R::Status>) {
        self.query.status = status;
    }

    pub fn set_category_filter(&mut self, category: FacetFilter<R::Category>) {
        self.query.category = category;
    }

    pub fn set_sort(&mut self, sort: R::Sort) {
        self.query.sort = sort;
    }

    /// Сбросить поиск и фасеты; сортировка остаётся
    pub fn clear_filters(&mut self) {
        self.query.search.clear();
        self.query.status = FacetFilter::All;
        self.query.category = FacetFilter::All;
    }

    pub fn has_active_filters(&self) -> bool {
        self.query.has_filters()
    }

    /// Текущая выборка
    pub fn visible(&self) -> Vec<&R> {
        apply_query(&self.store, &self.query)
    }

    // ============================================================================
    // Просмотр
    // ============================================================================

    pub fn view(&mut self, id: &RecordId) -> Result<&R, ListViewError> {
        let record = self.store.get(id).ok_or_else(|| not_found(id))?;
        self.viewing = Some(id.clone());
        Ok(record)
    }

    pub fn viewing(&self) -> Option<&R> {
        self.viewing.as_ref().and_then(|id| self.store.get(id))
    }

    pub fn close_view(&mut self) {
        self.viewing = None;
    }

    // ============================================================================
    // Редактор
    // ============================================================================

    pub fn begin_create(&mut self) -> Result<(), ListViewError> {
        self.ensure_idle()?;
        self.viewing = None;
        self.session += 1;
        self.editor.open(None);
        Ok(())
    }

    pub fn begin_edit(&mut self, id: &RecordId) -> Result<(), ListViewError> {
        self.ensure_idle()?;
        let record = self.store.get(id).ok_or_else(|| not_found(id))?;
        self.editor.open(Some(record));
        self.session += 1;
        self.viewing = None;
        Ok(())
    }

    pub fn stage(&mut self, change: impl FnOnce(&mut R::Dto)) -> Result<(), ListViewError> {
        self.editor.stage(change)
    }

    pub fn add_tag(&mut self, tag: &str) -> Result<bool, ListViewError> {
        self.editor.add_tag(tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> Result<(), ListViewError> {
        self.editor.remove_tag(tag)
    }

    /// Принять выбранный файл. Не изображение - сообщение, черновик не меняется.
    pub fn stage_upload(
        &mut self,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> bool {
        let staged = MediaUpload::new(file_name, mime_type, bytes)
            .map_err(ListViewError::from)
            .and_then(|upload| self.editor.stage_upload(upload));
        match staged {
            Ok(()) => {
                self.notice = None;
                true
            }
            Err(e) => {
                log::warn!("{}: upload rejected: {}", R::list_name(), e);
                self.notice = Some(e.to_string());
                false
            }
        }
    }

    pub fn remove_upload(&mut self) -> Result<(), ListViewError> {
        self.editor.remove_upload()
    }

    /// Начать асинхронное подтверждение (имитация загрузки файла)
    pub fn begin_confirm(&mut self) -> Result<ConfirmTicket, ListViewError> {
        if !self.editor.is_open() {
            return Err(ListViewError::EditorClosed);
        }
        self.ensure_idle()?;
        let ticket = ConfirmTicket(self.session);
        self.saving = Some(ticket);
        Ok(ticket)
    }

    /// Завершить подтверждение, начатое `begin_confirm`.
    /// Если редактор с тех пор закрывали или открывали заново, `EditorClosed`.
    pub fn finish_confirm(&mut self, ticket: ConfirmTicket) -> Result<RecordId, ListViewError> {
        if self.saving != Some(ticket) || ticket.0 != self.session {
            return Err(ListViewError::EditorClosed);
        }
        self.saving = None;
        let result = self.editor.confirm(&mut self.store);
        if let Err(e) = &result {
            log::warn!("{}: save failed: {}", R::list_name(), e);
        }
        result
    }

    /// Синхронное подтверждение
    pub fn confirm_editor(&mut self) -> Result<RecordId, ListViewError> {
        let ticket = self.begin_confirm()?;
        self.finish_confirm(ticket)
    }

    /// Закрыть редактор без сохранения. Незавершённое подтверждение отменяется.
    pub fn discard_editor(&mut self) {
        self.saving = None;
        self.session += 1;
        self.editor.discard();
    }

    // ============================================================================
    // Удаление
    // ============================================================================

    pub fn request_delete(&mut self, id: &RecordId) -> Result<(), ListViewError> {
        if !self.store.contains(id) {
            return Err(not_found(id));
        }
        self.pending_delete = Some(id.clone());
        Ok(())
    }

    pub fn pending_delete(&self) -> Option<&R> {
        self.pending_delete.as_ref().and_then(|id| self.store.get(id))
    }

    pub fn confirm_delete(&mut self) -> Result<R, ListViewError> {
        let id = self
            .pending_delete
            .take()
            .ok_or(ListViewError::NothingPending)?;
        let removed = self.store.delete(&id)?;
        if self.viewing.as_ref() == Some(&id) {
            self.viewing = None;
        }
        Ok(removed)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    fn ensure_idle(&self) -> Result<(), ListViewError> {
        if self.saving.is_some() {
            Err(ListViewError::Busy)
        } else {
            Ok(())
        }
    }
}

fn not_found(id: &RecordId) -> ListViewError {
    StoreError::NotFound { id: id.clone() }.into()
}
