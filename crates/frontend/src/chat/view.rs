//! Чат по документу - View Component

use super::model::ask;
use super::view_model::{can_send, ChatMessage, ChatVm, Sender};
use crate::session::SessionState;
use crate::shared::api_utils::{ApiError, NETWORK_ERROR_MESSAGE};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ChatSection() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState context not found");
    let vm = ChatVm::new();
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // При появлении секции прокрутить страницу к чату.
    Effect::new(move |_| {
        if let Some(section) = section_ref.get() {
            section.scroll_into_view();
        }
    });

    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let handle_send = Callback::new(move |_: ()| {
        let draft = vm.draft.get_untracked();
        if !can_send(
            &draft,
            session.busy.get_untracked(),
            session.document_loaded.get_untracked(),
        ) {
            return;
        }
        let question = draft.trim().to_string();

        vm.push(ChatMessage::user(question.clone()));
        vm.draft.set(String::new());
        scroll_to_bottom();

        session.busy.set(true);
        vm.is_sending.set(true);

        let placeholder = ChatMessage::pending("Обрабатываю ваш вопрос...");
        let placeholder_id = placeholder.id;
        vm.push(placeholder);
        scroll_to_bottom();

        spawn_local(async move {
            let result = ask(&question).await;

            // Заглушка убирается при любом исходе.
            vm.remove(placeholder_id);

            match result {
                Ok(data) => vm.push(ChatMessage::bot(data.answer)),
                Err(ApiError::Backend { status, message }) => {
                    let text = message.unwrap_or_else(|| format!("HTTP {}", status));
                    vm.push(ChatMessage::bot(format!("Ошибка: {}", text)));
                }
                Err(ApiError::Transport(details)) => {
                    log::error!("Ошибка отправки вопроса: {}", details);
                    vm.push(ChatMessage::bot(NETWORK_ERROR_MESSAGE));
                }
            }
            scroll_to_bottom();

            session.busy.set(false);
            vm.is_sending.set(false);
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        });
    });

    view! {
        <section class="chat-section card" node_ref=section_ref>
            <h2 class="section-title">"Вопросы по документу"</h2>

            <div class="chat-messages" node_ref=messages_ref>
                <For each=move || vm.messages.get() key=|msg| msg.id let:msg>
                    {{
                        let is_user = msg.sender == Sender::User;
                        view! {
                            <div
                                class=if is_user {
                                    "message message--user"
                                } else {
                                    "message message--bot"
                                }
                                class=("message--pending", msg.pending)
                            >
                                <div class="message__avatar">
                                    {if is_user { "👤" } else { "🤖" }}
                                </div>
                                <div class="message__content">{msg.text.clone()}</div>
                            </div>
                        }
                    }}
                </For>
            </div>

            <Flex style="gap: 8px; align-items: center;">
                <input
                    type="text"
                    class="chat-input"
                    style="flex: 1;"
                    placeholder="Задайте вопрос по документу..."
                    node_ref=input_ref
                    prop:value=move || vm.draft.get()
                    prop:disabled=move || vm.is_sending.get()
                    on:input=move |ev| vm.draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            handle_send.run(());
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_sending
                    on_click=move |_| handle_send.run(())
                >
                    {move || if vm.is_sending.get() { "Отправка..." } else { "Отправить" }}
                </Button>
            </Flex>
        </section>
    }
}
