pub mod app;
pub mod chat;
pub mod session;
pub mod shared;
pub mod upload;

use wasm_bindgen::prelude::wasm_bindgen;

/// Глобальные обработчики необработанных ошибок страницы.
///
/// Ошибки и отклонённые промисы только логируются: это неожидаемые пути,
/// пользовательского UI для них нет.
fn install_global_handlers() {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(|ev: web_sys::ErrorEvent| {
        log::error!("Глобальная ошибка: {}", ev.message());
    });
    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();

    let on_rejection = Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(
        |ev: web_sys::PromiseRejectionEvent| {
            log::error!("Необработанная ошибка промиса: {:?}", ev.reason());
        },
    );
    let _ = window
        .add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref());
    on_rejection.forget();
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    install_global_handlers();

    leptos::mount::mount_to_body(app::App);
}
