//! Обобщённый список админки
//!
//! Один компонент `EntityList<R>` на все виды записей. Вид записи
//! описывается реализацией `AdminEntity`: колонки, ячейки строки,
//! окно просмотра и поля редактора.

pub mod fields;
mod modals;

use crate::shared::components::ui::{choice_options, facet_filter_options, Select};
use crate::shared::components::{PageHeader, SearchInput};
use crate::shared::icons::icon;
use contracts::domain::common::{Choice, FacetFilter, ListViewError, MediaRef, Record};
use contracts::shared::list_view::{ListViewController, RecordStore};
use leptos::prelude::*;
use modals::{DeleteModal, DetailsModal, EditorModal};
use thaw::*;

pub type ControllerSignal<R> = RwSignal<ListViewController<R>>;

/// Настройка вида записи для списка админки
pub trait AdminEntity: Record {
    /// Иконка раздела
    fn icon() -> &'static str;

    fn search_placeholder() -> &'static str;

    /// Подпись пункта "все" в фильтре категорий
    fn all_categories_label() -> &'static str {
        "All Categories"
    }

    /// Можно ли создавать записи из списка
    fn can_create() -> bool {
        true
    }

    /// Демо-данные раздела
    fn seed() -> Vec<Self>;

    /// Заголовки колонок (без колонки действий)
    fn columns() -> &'static [&'static str];

    /// Ячейки `<td>` строки таблицы
    fn row(&self) -> AnyView;

    /// Тело окна просмотра
    fn details(&self) -> AnyView;

    /// Поля редактора, привязанные к черновику
    fn form(ctl: ControllerSignal<Self>) -> AnyView;

    /// Изображение в черновике (превью в редакторе)
    fn draft_media(dto: &Self::Dto) -> Option<&MediaRef>;
}

/// Строка окна просмотра
pub fn detail_row(label: &'static str, value: impl IntoView + 'static) -> AnyView {
    view! {
        <div class="details__row">
            <dt class="details__label">{label}</dt>
            <dd class="details__value">{value}</dd>
        </div>
    }
    .into_any()
}

/// Контроллер раздела над демо-данными
pub fn create_controller<R: AdminEntity>() -> ControllerSignal<R> {
    let store = RecordStore::from_records(R::seed()).unwrap_or_else(|e| {
        log::error!("{}: invalid seed data: {}", R::list_name(), e);
        RecordStore::new()
    });
    RwSignal::new(ListViewController::new(store))
}

/// Выполнить действие контроллера; ошибка уходит в лог и в строку сообщения
pub fn run<R: AdminEntity>(
    ctl: ControllerSignal<R>,
    action: impl FnOnce(&mut ListViewController<R>) -> Result<(), ListViewError>,
) {
    ctl.update(|c| {
        if let Err(e) = action(c) {
            log::warn!("{}: {}", R::list_name(), e);
            c.set_notice(e.to_string());
        }
    });
}

#[component]
pub fn EntityList<R: AdminEntity>(ctl: ControllerSignal<R>) -> impl IntoView {
    let visible = Memo::new(move |_| {
        ctl.with(|c| c.visible().into_iter().cloned().collect::<Vec<R>>())
    });
    let total = Memo::new(move |_| ctl.with(|c| c.store().len()));

    // Окна открываются по смене режима, а не по каждому изменению черновика
    let editor_mode = Memo::new(move |_| ctl.with(|c| c.editor().mode().cloned()));
    let viewing_id = Memo::new(move |_| ctl.with(|c| c.viewing().map(|r| r.id().clone())));
    let deleting_id =
        Memo::new(move |_| ctl.with(|c| c.pending_delete().map(|r| r.id().clone())));

    let search = Signal::derive(move || ctl.with(|c| c.query().search.clone()));
    let status_code = Signal::derive(move || ctl.with(|c| c.query().status.code().to_string()));
    let category_code =
        Signal::derive(move || ctl.with(|c| c.query().category.code().to_string()));
    let sort_code = Signal::derive(move || ctl.with(|c| c.query().sort.code().to_string()));
    let has_filters = Signal::derive(move || ctl.with(|c| c.has_active_filters()));

    let on_search = Callback::new(move |term: String| ctl.update(|c| c.set_search(term)));
    let on_status = Callback::new(move |code: String| {
        ctl.update(|c| c.set_status_filter(FacetFilter::from_code(&code)))
    });
    let on_category = Callback::new(move |code: String| {
        ctl.update(|c| c.set_category_filter(FacetFilter::from_code(&code)))
    });
    let on_sort = Callback::new(move |code: String| {
        let sort = <R::Sort as Choice>::from_code(&code).unwrap_or_default();
        ctl.update(|c| c.set_sort(sort))
    });

    view! {
        <div class="entity-list">
            <PageHeader
                title=R::list_name()
                icon_name=R::icon()
                subtitle=format!("Search, filter and manage {}", R::list_name().to_lowercase())
            >
                <Badge>{move || total.get().to_string()}</Badge>
                {R::can_create().then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| run(ctl, |c| c.begin_create())
                    >
                        {icon("plus")}
                        {format!(" Add {}", R::element_name())}
                    </Button>
                })}
            </PageHeader>

            {move || ctl.with(|c| c.notice().map(str::to_string)).map(|notice| view! {
                <div class="alert alert--error">
                    <span>{notice}</span>
                    <button class="button button--ghost" on:click=move |_| ctl.update(|c| c.clear_notice())>
                        {icon("x")}
                    </button>
                </div>
            })}

            <div class="filter-panel">
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <SearchInput
                                value=search
                                on_search=on_search
                                placeholder=R::search_placeholder()
                            />
                        </div>
                        <Select
                            value=status_code
                            on_change=on_status
                            options={facet_filter_options::<R::Status>("All Statuses")}
                        />
                        <Select
                            value=category_code
                            on_change=on_category
                            options={facet_filter_options::<R::Category>(R::all_categories_label())}
                        />
                        <Select
                            value=sort_code
                            on_change=on_sort
                            options={choice_options::<R::Sort>()}
                        />
                        <Show when=move || has_filters.get()>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| ctl.update(|c| c.clear_filters())
                            >
                                "Clear filters"
                            </Button>
                        </Show>
                    </Flex>
                </div>
            </div>

            <div class="entity-list__summary">
                {move || format!("Showing {} of {} {}", visible.get().len(), total.get(), R::list_name().to_lowercase())}
            </div>

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            {R::columns().iter().map(|c| view! { <th class="table__header-cell">{*c}</th> }).collect_view()}
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible.get();
                            if rows.is_empty() {
                                let colspan = R::columns().len() + 1;
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan=colspan>
                                            {format!("No {} found", R::list_name().to_lowercase())}
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|record| {
                                let id_view = record.id().clone();
                                let id_edit = record.id().clone();
                                let id_delete = record.id().clone();
                                view! {
                                    <tr class="table__row">
                                        {record.row()}
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="View"
                                                on:click=move |_| run(ctl, |c| c.view(&id_view).map(|_| ()))>
                                                {icon("eye")}
                                            </button>
                                            <button class="button button--icon" title="Edit"
                                                on:click=move |_| run(ctl, |c| c.begin_edit(&id_edit))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon button--danger" title="Delete"
                                                on:click=move |_| run(ctl, |c| c.request_delete(&id_delete))>
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            {move || viewing_id.get().map(|_| view! { <DetailsModal ctl=ctl/> })}
            {move || editor_mode.get().map(|mode| view! { <EditorModal ctl=ctl mode=mode/> })}
            {move || deleting_id.get().map(|_| view! { <DeleteModal ctl=ctl/> })}
        </div>
    }
}

