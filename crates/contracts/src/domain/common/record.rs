use super::{Facet, Lifecycle, MediaRef, RecordId, SortKey};
use std::cmp::Ordering;

/// Трейт для записи, управляемой списком админки.
///
/// Каждый вид записи задаёт свои фасеты, меню сортировки и DTO.
/// DTO - частичная запись: `None` означает "поле не задано", при создании
/// такие поля получают значения по умолчанию, при обновлении не меняются.
pub trait Record: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    type Status: Facet;
    type Category: Facet;
    type Sort: SortKey;
    type Dto: Clone + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static;

    // ============================================================================
    // Метаданные вида записи
    // ============================================================================

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    // ============================================================================
    // Данные конкретной записи
    // ============================================================================

    fn id(&self) -> &RecordId;

    fn lifecycle(&self) -> &Lifecycle;

    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    /// Заголовок записи (название, имя)
    fn title(&self) -> &str;

    fn status(&self) -> Self::Status;

    fn category(&self) -> Self::Category;

    /// Текстовые поля, по которым ищет строка поиска (включая каждый тег)
    fn search_fields(&self) -> Vec<&str>;

    /// Сравнение для ключа сортировки. Для ключа по умолчанию не вызывается.
    fn compare_by(&self, other: &Self, sort: Self::Sort) -> Ordering;

    // ============================================================================
    // Формы / DTO
    // ============================================================================

    /// Шаблон формы "создать" с заполненными значениями по умолчанию
    fn template() -> Self::Dto;

    /// Собрать новую запись; незаданные поля получают значения по умолчанию
    fn from_dto(id: RecordId, lifecycle: Lifecycle, dto: Self::Dto) -> Self;

    /// Поверхностно слить заданные поля DTO в запись
    fn apply(&mut self, dto: Self::Dto);

    /// Полная копия записи в виде DTO (для режима редактирования)
    fn to_dto(&self) -> Self::Dto;

    /// Записать ссылку на изображение в DTO
    fn set_media(dto: &mut Self::Dto, media: MediaRef);

    /// Теги в DTO; `None` для видов без тегов
    fn tags_mut(dto: &mut Self::Dto) -> Option<&mut Vec<String>>;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Поиск без учета регистра по всем полям поиска; пустой запрос совпадает всегда
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}
