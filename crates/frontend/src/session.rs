//! Состояние сеанса страницы.

use leptos::prelude::*;

/// Флаги сеанса, общие для загрузки и чата.
///
/// Передаётся через context от `App` всему дереву компонентов.
/// Мутируется только из обработчиков событий и futures на главном
/// потоке, поэтому никакой синхронизации не требуется.
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Документ загружен, чат доступен.
    pub document_loaded: RwSignal<bool>,
    /// Идёт загрузка файла или отправка вопроса. Пока флаг поднят,
    /// повторные попытки молча отбрасываются, не ставятся в очередь.
    pub busy: RwSignal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            document_loaded: RwSignal::new(false),
            busy: RwSignal::new(false),
        }
    }
}
