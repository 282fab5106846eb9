use crate::domain::common::{Facet, Lifecycle, Record, RecordId, StoreError};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Хранилище записей одного вида в памяти.
///
/// Порядок вставки сохраняется. Каждая успешная мутация увеличивает `revision`,
/// по которому представление понимает, что выборку надо пересчитать.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    revision: u64,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            revision: 0,
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заполнить хранилище готовыми записями (демо-данные).
    /// Повторяющийся id отклоняется.
    pub fn from_records(records: Vec<R>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id().clone()) {
                return Err(StoreError::DuplicateId {
                    id: record.id().clone(),
                });
            }
        }
        Ok(Self {
            records,
            revision: 0,
        })
    }

    // ============================================================================
    // Мутации
    // ============================================================================

    /// Создать запись из шаблона и добавить в конец
    pub fn create(&mut self, template: R::Dto) -> RecordId {
        self.create_at(template, Utc::now())
    }

    pub fn create_at(&mut self, template: R::Dto, now: DateTime<Utc>) -> RecordId {
        let mut id = RecordId::new_v4();
        while self.contains(&id) {
            id = RecordId::new_v4();
        }

        let mut record = R::from_dto(id.clone(), Lifecycle::new(now), template);
        if record.status().is_published() {
            record.lifecycle_mut().published_at = Some(now);
        }

        log::debug!("{}: created {}", R::list_name(), id);
        self.records.push(record);
        self.bump();
        id
    }

    /// Слить заданные поля в запись
    pub fn update(&mut self, id: &RecordId, patch: R::Dto) -> Result<(), StoreError> {
        self.update_at(id, patch, Utc::now())
    }

    pub fn update_at(
        &mut self,
        id: &RecordId,
        patch: R::Dto,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;

        let was_published = record.status().is_published();
        record.apply(patch);
        let is_published = record.status().is_published();

        let lifecycle = record.lifecycle_mut();
        lifecycle.touch(now);
        lifecycle.sync_published(was_published, is_published, now);

        log::debug!("{}: updated {}", R::list_name(), id);
        self.bump();
        Ok(())
    }

    /// Удалить запись; возвращает удалённую
    pub fn delete(&mut self, id: &RecordId) -> Result<R, StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
        let removed = self.records.remove(index);
        log::debug!("{}: deleted {}", R::list_name(), id);
        self.bump();
        Ok(removed)
    }

    // ============================================================================
    // Чтение
    // ============================================================================

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Количество записей, удовлетворяющих условию (для карточек статистики)
    pub fn count_where(&self, predicate: impl Fn(&R) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(*r)).count()
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
