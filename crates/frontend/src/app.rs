use crate::chat::ChatSection;
use crate::session::SessionState;
use crate::shared::api_utils::api_url;
use crate::upload::UploadSection;
use contracts::api::StatusResponse;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // Provide the SessionState to the whole app via context.
    let session = SessionState::new();
    provide_context(session);

    // Стартовый запрос статуса: если документ уже загружен на backend'е,
    // чат открывается сразу. Ошибки здесь только логируются.
    Effect::new(move |_| {
        spawn_local(async move {
            match gloo_net::http::Request::get(&api_url("status")).send().await {
                Ok(response) if response.ok() => {
                    match response.json::<StatusResponse>().await {
                        Ok(data) => {
                            if data.document_loaded {
                                session.document_loaded.set(true);
                            }
                        }
                        Err(e) => log::error!("Ошибка при проверке статуса: {}", e),
                    }
                }
                Ok(response) => {
                    log::error!("Ошибка при проверке статуса: HTTP {}", response.status())
                }
                Err(e) => log::error!("Ошибка при проверке статуса: {}", e),
            }
        });
    });

    view! {
        <main class="container">
            <header class="app-header">
                <h1>"Вопросы к документу"</h1>
                <p class="app-header__subtitle">
                    "Загрузите DOCX и задавайте вопросы по его содержанию"
                </p>
            </header>

            <UploadSection />

            <Show when=move || session.document_loaded.get()>
                <ChatSection />
            </Show>
        </main>
    }
}
