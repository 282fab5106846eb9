use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные жизненного цикла записи
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    /// Дата создания записи
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Дата последнего обновления
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Дата публикации; пусто, пока статус не "опубликовано"
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
}

impl Lifecycle {
    /// Создать метаданные для новой записи
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }

    /// Метаданные с заданными датами (для демо-данных)
    pub fn at(
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            created_at,
            updated_at: updated_at.max(created_at),
            published_at,
        }
    }

    /// Обновить timestamp; `updated_at` никогда не раньше `created_at`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    /// Пересчитать `published_at` при смене статуса.
    ///
    /// Переход в опубликованное ставит текущее время, выход из него очищает дату.
    pub fn sync_published(&mut self, was_published: bool, is_published: bool, now: DateTime<Utc>) {
        match (was_published, is_published) {
            (false, true) => self.published_at = Some(now),
            (true, false) => self.published_at = None,
            _ => {}
        }
    }
}

/// Полночь UTC указанной даты; некорректная дата даёт эпоху
pub fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_never_before_created() {
        let created = utc_date(2024, 3, 20);
        let mut lifecycle = Lifecycle::new(created);
        lifecycle.touch(utc_date(2024, 1, 1));
        assert_eq!(lifecycle.updated_at, created);

        lifecycle.touch(utc_date(2024, 4, 1));
        assert_eq!(lifecycle.updated_at, utc_date(2024, 4, 1));
    }

    #[test]
    fn test_sync_published() {
        let now = utc_date(2024, 3, 20);
        let mut lifecycle = Lifecycle::new(utc_date(2024, 3, 1));

        lifecycle.sync_published(false, true, now);
        assert_eq!(lifecycle.published_at, Some(now));

        lifecycle.sync_published(true, true, utc_date(2024, 5, 1));
        assert_eq!(lifecycle.published_at, Some(now));

        lifecycle.sync_published(true, false, now);
        assert_eq!(lifecycle.published_at, None);
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(utc_date(2024, 13, 1), DateTime::<Utc>::default());
    }
}
