use super::{run, AdminEntity, ControllerSignal};
use crate::layout::global_context::use_app_context;
use crate::shared::latency::{after_delay, MountGuard};
use crate::shared::modal::Modal;
use contracts::domain::common::{ListViewError, Record};
use contracts::shared::list_view::EditorMode;
use leptos::prelude::*;
use thaw::*;

// ============================================================================
// Просмотр
// ============================================================================

#[component]
pub fn DetailsModal<R: AdminEntity>(ctl: ControllerSignal<R>) -> impl IntoView {
    let title = ctl
        .with_untracked(|c| c.viewing().map(|r| r.title().to_string()))
        .unwrap_or_else(|| R::element_name().to_string());
    let on_close = Callback::new(move |_| ctl.update(|c| c.close_view()));

    view! {
        <Modal title=title on_close=on_close>
            {move || ctl.with(|c| c.viewing().cloned()).map(|record| record.details())}
        </Modal>
    }
}

// ============================================================================
// Редактор
// ============================================================================

#[component]
pub fn EditorModal<R: AdminEntity>(ctl: ControllerSignal<R>, mode: EditorMode) -> impl IntoView {
    let guard = MountGuard::new();
    let upload_ms = use_app_context().delay(|c| c.delays.upload_ms);

    let (title, save_label) = match mode {
        EditorMode::Create => (format!("Add New {}", R::element_name()), "Save"),
        EditorMode::Edit(_) => (format!("Edit {}", R::element_name()), "Update"),
    };
    let saving = Memo::new(move |_| ctl.with(|c| c.is_saving()));

    let on_close = Callback::new(move |_| ctl.update(|c| c.discard_editor()));

    // С файлом сохранение ждёт имитацию загрузки; без файла выполняется сразу
    let on_save = Callback::new(move |_: ()| {
        let has_upload = ctl.with_untracked(|c| c.editor().upload().is_some());
        if !has_upload {
            run(ctl, |c| c.confirm_editor().map(|_| ()));
            return;
        }

        let mut ticket = None;
        run(ctl, |c| {
            ticket = Some(c.begin_confirm()?);
            Ok(())
        });
        let Some(ticket) = ticket else {
            return;
        };
        after_delay(&guard, upload_ms, move || {
            ctl.update(|c| match c.finish_confirm(ticket) {
                Ok(id) => log::info!("{} {} saved", R::element_name(), id),
                // редактор закрыли, пока шла загрузка
                Err(ListViewError::EditorClosed) => {}
                Err(e) => {
                    log::warn!("{}: {}", R::list_name(), e);
                    c.set_notice(e.to_string());
                }
            });
        });
    });

    let footer = move || {
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=saving
                on_click=move |_| on_save.run(())
            >
                {move || {
                    if saving.get() {
                        view! { <Spinner size=SpinnerSize::Small/> " Uploading..." }.into_any()
                    } else {
                        save_label.into_any()
                    }
                }}
            </Button>
        }
    };

    view! {
        <Modal title=title on_close=on_close footer=footer>
            {move || ctl.with(|c| c.notice().map(str::to_string)).map(|notice| view! {
                <div class="alert alert--error">{notice}</div>
            })}
            <div class="form">{R::form(ctl)}</div>
        </Modal>
    }
}

// ============================================================================
// Удаление
// ============================================================================

#[component]
pub fn DeleteModal<R: AdminEntity>(ctl: ControllerSignal<R>) -> impl IntoView {
    let title = ctl
        .with_untracked(|c| c.pending_delete().map(|r| r.title().to_string()))
        .unwrap_or_default();
    let on_close = Callback::new(move |_| ctl.update(|c| c.cancel_delete()));
    let on_delete = move |_| {
        run(ctl, |c| {
            let removed = c.confirm_delete()?;
            log::info!("{} {} deleted", R::element_name(), removed.id());
            Ok(())
        })
    };

    let footer = move || {
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                "Cancel"
            </Button>
            <button class="button button--danger" on:click=on_delete>
                "Delete"
            </button>
        }
    };

    view! {
        <Modal title=format!("Delete {}", R::element_name()) on_close=on_close footer=footer>
            <p>{format!("Are you sure you want to delete \"{}\"? This action cannot be undone.", title)}</p>
        </Modal>
    }
}
