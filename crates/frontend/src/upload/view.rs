//! Загрузка документа - View Component

use super::model::upload_document;
use super::progress;
use super::validate::validate_file;
use super::view_model::{StatusKind, UploadVm};
use crate::session::SessionState;
use crate::shared::api_utils::{ApiError, NETWORK_ERROR_MESSAGE};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Показать статусную строку. Ошибки гаснут сами через 5 секунд.
fn show_status(vm: UploadVm, message: String, kind: StatusKind) {
    vm.status.set(Some((message, kind)));
    if kind == StatusKind::Error {
        spawn_local(async move {
            TimeoutFuture::new(5_000).await;
            vm.status.set(None);
        });
    }
}

/// Отправить файл на backend с симуляцией прогресса.
///
/// Повторный вызов при поднятом busy-флаге — no-op: попытки не ставятся
/// в очередь и не повторяются.
fn start_upload(vm: UploadVm, session: SessionState, file: web_sys::File) {
    if session.busy.get_untracked() {
        return;
    }
    session.busy.set(true);
    vm.progress.set(Some(0.0));

    spawn_local(async move {
        // Сигнал остановки анимации: реальный ответ пришёл.
        let settled = Rc::new(Cell::new(false));

        spawn_local({
            let settled = Rc::clone(&settled);
            async move {
                while !settled.get() {
                    TimeoutFuture::new(progress::TICK_MS).await;
                    if settled.get() {
                        break;
                    }
                    vm.progress.update(|p| {
                        if let Some(value) = p.as_mut() {
                            *value = progress::advance(*value, js_sys::Math::random());
                        }
                    });
                }
            }
        });

        let result = upload_document(&file).await;
        settled.set(true);
        vm.progress.set(Some(100.0));

        match result {
            Ok(data) => {
                show_status(
                    vm,
                    format!(
                        "Документ успешно загружен! Обработано {} фрагментов.",
                        data.chunks_count
                    ),
                    StatusKind::Success,
                );
                spawn_local(async move {
                    TimeoutFuture::new(1_500).await;
                    session.document_loaded.set(true);
                });
            }
            Err(ApiError::Backend { message, .. }) => {
                show_status(
                    vm,
                    message.unwrap_or_else(|| "Ошибка при загрузке файла".to_string()),
                    StatusKind::Error,
                );
            }
            Err(ApiError::Transport(details)) => {
                log::error!("Ошибка загрузки: {}", details);
                show_status(vm, NETWORK_ERROR_MESSAGE.to_string(), StatusKind::Error);
            }
        }

        // Busy снимается сразу, индикатор остаётся видимым ещё 2 секунды.
        session.busy.set(false);
        TimeoutFuture::new(2_000).await;
        vm.progress.set(None);
    });
}

#[component]
pub fn UploadSection() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState context not found");
    let vm = UploadVm::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // Общий вход для drag&drop и file picker'а: проверка до сети.
    let handle_file = move |file: web_sys::File| {
        if let Err(rejection) = validate_file(&file.name(), file.size()) {
            show_status(vm, rejection.message().to_string(), StatusKind::Error);
            return;
        }
        start_upload(vm, session, file);
    };

    view! {
        <section class="upload-section card">
            <div
                class="upload-area"
                class=("upload-area--dragover", move || vm.drag_over.get())
                on:click=move |_| {
                    if let Some(input) = file_input_ref.get() {
                        input.click();
                    }
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    vm.drag_over.set(true);
                }
                on:dragleave=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    vm.drag_over.set(false);
                }
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    vm.drag_over.set(false);
                    if let Some(file) = ev
                        .data_transfer()
                        .and_then(|dt| dt.files())
                        .and_then(|files| files.get(0))
                    {
                        handle_file(file);
                    }
                }
            >
                <div class="upload-area__icon">"📄"</div>
                <div class="upload-area__title">
                    "Перетащите файл сюда или нажмите для выбора"
                </div>
                <div class="upload-area__hint">"Поддерживаются файлы DOCX до 10MB"</div>
            </div>

            <input
                type="file"
                accept=".docx"
                style="display: none;"
                node_ref=file_input_ref
                on:change=move |ev| {
                    use wasm_bindgen::JsCast;
                    let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    else {
                        return;
                    };
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        handle_file(file);
                    }
                    // Сбросить value: повторный выбор того же файла снова даст change.
                    input.set_value("");
                }
            />

            {move || {
                vm.progress
                    .get()
                    .map(|percent| {
                        view! {
                            <div class="upload-progress">
                                <div class="progress-bar">
                                    <div
                                        class="progress-bar__fill"
                                        style=format!("width: {}%;", percent as i32)
                                    ></div>
                                </div>
                                <div class="progress-bar__text">
                                    {progress::stage_label(percent)}
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                vm.status
                    .get()
                    .map(|(message, kind)| {
                        let class = match kind {
                            StatusKind::Success => "upload-status upload-status--success",
                            StatusKind::Error => "upload-status upload-status--error",
                        };
                        view! { <div class=class>{message}</div> }
                    })
            }}
        </section>
    }
}
