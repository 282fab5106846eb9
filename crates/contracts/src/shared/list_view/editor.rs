use super::RecordStore;
use crate::domain::common::{ListViewError, MediaRef, MediaUpload, Record, RecordId};

/// Режим открытого редактора
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
struct Staged<R: Record> {
    mode: EditorMode,
    draft: R::Dto,
    upload: Option<MediaUpload>,
}

/// Черновик записи, отделённый от хранилища до подтверждения.
///
/// Выбранный файл хранится отдельно от черновика и превращается
/// в ссылку на изображение только при `confirm`.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor<R: Record> {
    staged: Option<Staged<R>>,
}

impl<R: Record> Default for Editor<R> {
    fn default() -> Self {
        Self { staged: None }
    }
}

impl<R: Record> Editor<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` - новая запись из шаблона, `Some` - копия существующей
    pub fn open(&mut self, record: Option<&R>) {
        let (mode, draft) = match record {
            Some(r) => (EditorMode::Edit(r.id().clone()), r.to_dto()),
            None => (EditorMode::Create, R::template()),
        };
        self.staged = Some(Staged {
            mode,
            draft,
            upload: None,
        });
    }

    pub fn is_open(&self) -> bool {
        self.staged.is_some()
    }

    pub fn mode(&self) -> Option<&EditorMode> {
        self.staged.as_ref().map(|s| &s.mode)
    }

    pub fn draft(&self) -> Option<&R::Dto> {
        self.staged.as_ref().map(|s| &s.draft)
    }

    pub fn upload(&self) -> Option<&MediaUpload> {
        self.staged.as_ref().and_then(|s| s.upload.as_ref())
    }

    /// Изменить черновик. Валидации нет.
    pub fn stage(&mut self, change: impl FnOnce(&mut R::Dto)) -> Result<(), ListViewError> {
        let staged = self.staged_mut()?;
        change(&mut staged.draft);
        Ok(())
    }

    /// Добавить тег; пустой или уже существующий не добавляется
    pub fn add_tag(&mut self, tag: &str) -> Result<bool, ListViewError> {
        let tag = tag.trim();
        let staged = self.staged_mut()?;
        let Some(tags) = R::tags_mut(&mut staged.draft) else {
            return Ok(false);
        };
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            return Ok(false);
        }
        tags.push(tag.to_string());
        Ok(true)
    }

    pub fn remove_tag(&mut self, tag: &str) -> Result<(), ListViewError> {
        let staged = self.staged_mut()?;
        if let Some(tags) = R::tags_mut(&mut staged.draft) {
            tags.retain(|t| t != tag);
        }
        Ok(())
    }

    pub fn stage_upload(&mut self, upload: MediaUpload) -> Result<(), ListViewError> {
        self.staged_mut()?.upload = Some(upload);
        Ok(())
    }

    pub fn remove_upload(&mut self) -> Result<(), ListViewError> {
        self.staged_mut()?.upload = None;
        Ok(())
    }

    /// Записать черновик в хранилище. Черновик очищается в любом случае.
    pub fn confirm(&mut self, store: &mut RecordStore<R>) -> Result<RecordId, ListViewError> {
        let Staged {
            mode,
            mut draft,
            upload,
        } = self.staged.take().ok_or(ListViewError::EditorClosed)?;

        if let Some(upload) = upload {
            R::set_media(&mut draft, MediaRef::from(&upload));
        }

        match mode {
            EditorMode::Create => Ok(store.create(draft)),
            EditorMode::Edit(id) => {
                store.update(&id, draft)?;
                Ok(id)
            }
        }
    }

    pub fn discard(&mut self) {
        self.staged = None;
    }

    fn staged_mut(&mut self) -> Result<&mut Staged<R>, ListViewError> {
        self.staged.as_mut().ok_or(ListViewError::EditorClosed)
    }
}
