//! Чат по документу - View Model

use leptos::prelude::*;
use uuid::Uuid;

/// Автор сообщения в переписке.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Одно сообщение переписки. Живёт только в памяти страницы.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    /// Временная заглушка: удаляется, как только приходит реальный ответ.
    pub pending: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::User,
            pending: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::Bot,
            pending: false,
        }
    }

    pub fn pending(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::Bot,
            pending: true,
        }
    }
}

/// Можно ли отправлять вопрос. Невыполненные условия — молчаливый no-op,
/// без сообщений об ошибке.
pub fn can_send(draft: &str, busy: bool, document_loaded: bool) -> bool {
    !draft.trim().is_empty() && !busy && document_loaded
}

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub draft: RwSignal<String>,
    /// Дублирует busy для блокировки поля ввода и кнопки.
    pub is_sending: RwSignal<bool>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            draft: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
        }
    }

    /// Добавить сообщение в конец переписки.
    pub fn push(&self, message: ChatMessage) {
        self.messages.update(|msgs| msgs.push(message));
    }

    /// Убрать сообщение по id (заглушку — после прихода ответа).
    pub fn remove(&self, id: Uuid) {
        self.messages.update(|msgs| msgs.retain(|m| m.id != id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_send_requires_non_blank_text() {
        assert!(!can_send("", false, true));
        assert!(!can_send("   ", false, true));
        assert!(!can_send("\n\t", false, true));
        assert!(can_send("What is the summary?", false, true));
    }

    #[test]
    fn test_can_send_blocked_while_busy() {
        assert!(!can_send("What is the summary?", true, true));
    }

    #[test]
    fn test_can_send_requires_loaded_document() {
        assert!(!can_send("What is the summary?", false, false));
    }

    #[test]
    fn test_message_constructors() {
        let user = ChatMessage::user("вопрос");
        assert_eq!(user.sender, Sender::User);
        assert!(!user.pending);

        let bot = ChatMessage::bot("ответ");
        assert_eq!(bot.sender, Sender::Bot);
        assert!(!bot.pending);

        let placeholder = ChatMessage::pending("Обрабатываю ваш вопрос...");
        assert_eq!(placeholder.sender, Sender::Bot);
        assert!(placeholder.pending);
    }

    #[test]
    fn test_messages_get_distinct_ids() {
        let a = ChatMessage::user("a");
        let b = ChatMessage::user("a");
        assert_ne!(a.id, b.id);
    }
}
