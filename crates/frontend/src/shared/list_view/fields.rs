//! Поля редактора, привязанные к черновику контроллера

use super::{run, AdminEntity, ControllerSignal};
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::latency::MountGuard;
use contracts::domain::common::{Choice, MediaRef, Record};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlInputElement, Url};

/// Значение поля черновика; пусто, если редактор закрыт
pub fn draft_value<R: AdminEntity>(
    ctl: ControllerSignal<R>,
    read: impl Fn(&R::Dto) -> String + Send + Sync + 'static,
) -> Signal<String> {
    Signal::derive(move || ctl.with(|c| c.editor().draft().map(&read).unwrap_or_default()))
}

/// Флаг черновика (checkbox)
pub fn draft_flag<R: AdminEntity>(
    ctl: ControllerSignal<R>,
    read: impl Fn(&R::Dto) -> bool + Send + Sync + 'static,
) -> Signal<bool> {
    Signal::derive(move || ctl.with(|c| c.editor().draft().map(&read).unwrap_or(false)))
}

/// Записать введённое значение в черновик
pub fn stage_with<R: AdminEntity, T: 'static>(
    ctl: ControllerSignal<R>,
    write: impl Fn(&mut R::Dto, T) + Send + Sync + 'static,
) -> Callback<T> {
    Callback::new(move |value: T| run(ctl, |c| c.stage(|dto| write(dto, value))))
}

/// Значение меню по коду; неизвестный код не меняет черновик
pub fn stage_choice<R: AdminEntity, C: Choice>(
    ctl: ControllerSignal<R>,
    write: impl Fn(&mut R::Dto, C) + Send + Sync + 'static,
) -> Callback<String> {
    Callback::new(move |code: String| match C::from_code(&code) {
        Some(value) => run(ctl, |c| c.stage(|dto| write(dto, value))),
        None => log::warn!("unknown option code: {}", code),
    })
}

/// Числовое поле; нечисловой ввод даёт ноль
pub fn parse_number<T: std::str::FromStr + Default>(value: &str) -> T {
    value.trim().parse().unwrap_or_default()
}

/// Теги черновика (копия); `None` у видов без тегов
fn draft_tags<R: Record>(dto: &R::Dto) -> Option<Vec<String>> {
    let mut copy = dto.clone();
    R::tags_mut(&mut copy).map(|tags| tags.clone())
}

#[component]
pub fn TagEditor<R: AdminEntity>(ctl: ControllerSignal<R>) -> impl IntoView {
    let tags = Memo::new(move |_| {
        ctl.with(|c| c.editor().draft().and_then(draft_tags::<R>).unwrap_or_default())
    });
    let input = RwSignal::new(String::new());

    let add = move || {
        let tag = input.get_untracked();
        run(ctl, |c| c.add_tag(&tag).map(|_| ()));
        input.set(String::new());
    };

    view! {
        <div class="form__group">
            <label class="form__label">"Tags"</label>
            <div class="tag-list">
                {move || tags.get().into_iter().map(|tag| {
                    let tag_for_remove = tag.clone();
                    view! {
                        <span class="tag">
                            {tag}
                            <button
                                type="button"
                                class="tag__remove"
                                on:click=move |_| run(ctl, |c| c.remove_tag(&tag_for_remove))
                            >
                                {icon("x")}
                            </button>
                        </span>
                    }
                }).collect_view()}
            </div>
            <div class="tag-input">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Add a tag"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <button type="button" class="button button--secondary" on:click=move |_| add()>
                    "Add"
                </button>
            </div>
        </div>
    }
}

/// Выбор изображения. Файл читается в память и ставится в черновик
/// редактора; ссылка на него появится в записи только при сохранении.
#[component]
pub fn ImageUpload<R: AdminEntity>(ctl: ControllerSignal<R>) -> impl IntoView {
    let guard = MountGuard::new();
    let preview = RwSignal::new(None::<String>);
    let current = Memo::new(move |_| {
        ctl.with(|c| {
            c.editor()
                .draft()
                .and_then(R::draft_media)
                .filter(|m| !m.is_empty())
                .map(|m| m.as_str().to_string())
        })
    });
    let has_upload = Memo::new(move |_| ctl.with(|c| c.editor().upload().is_some()));

    let revoke_preview = move || {
        if let Some(url) = preview.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
        preview.set(None);
    };
    on_cleanup(move || {
        if let Some(Some(url)) = preview.try_get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
    });

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");

        let name = file.name();
        let mime = file.type_();
        let guard = guard.clone();
        spawn_local(async move {
            let buffer = match JsFuture::from(file.array_buffer()).await {
                Ok(buffer) => buffer,
                Err(_) => {
                    log::warn!("failed to read file {}", name);
                    return;
                }
            };
            if !guard.is_mounted() {
                return;
            }
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
            let mut accepted = false;
            ctl.update(|c| accepted = c.stage_upload(name, mime, bytes));
            if accepted {
                revoke_preview();
                preview.set(Url::create_object_url_with_blob(&file).ok());
            }
        });
    };

    let remove = move |_| {
        run(ctl, |c| c.remove_upload());
        revoke_preview();
    };

    view! {
        <div class="form__group">
            <label class="form__label">"Image"</label>
            {move || {
                let src = if has_upload.get() { preview.get() } else { current.get() };
                src.map(|src| view! {
                    <div class="image-upload__preview">
                        <img src=src alt="Preview"/>
                        <Show when=move || has_upload.get()>
                            <button type="button" class="button button--icon image-upload__remove" on:click=remove>
                                {icon("x")}
                            </button>
                        </Show>
                    </div>
                })
            }}
            <label class="image-upload__picker">
                {icon("upload")}
                <span>"Click to upload an image"</span>
                <input type="file" accept="image/*" class="image-upload__input" on:change=on_change/>
            </label>
        </div>
    }
}

/// Ссылка на изображение вручную; встроенные (загруженные) данные не показываются
#[component]
pub fn ImageUrlInput<R: AdminEntity>(ctl: ControllerSignal<R>) -> impl IntoView {
    let value = draft_value(ctl, |dto| {
        R::draft_media(dto)
            .filter(|m| !m.is_embedded())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    });
    let on_input = stage_with(ctl, |dto, url: String| R::set_media(dto, MediaRef::new(url)));

    view! {
        <Input
            label="Or enter image URL"
            value=value
            on_input=on_input
            input_type="url"
            placeholder="https://example.com/image.jpg"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::aggregate::User;
    use contracts::domain::a002_tour::aggregate::Tour;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<u32>(" 899 "), 899);
        assert_eq!(parse_number::<u32>("abc"), 0);
        assert_eq!(parse_number::<f32>("4.5"), 4.5);
    }

    #[test]
    fn test_draft_tags_only_for_tagged_kinds() {
        assert_eq!(draft_tags::<Tour>(&Tour::template()), Some(Vec::new()));
        assert_eq!(draft_tags::<User>(&User::template()), None);
    }
}
