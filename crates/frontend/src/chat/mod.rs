//! Чат по документу (MVVM Standard)
//!
//! Structure:
//! - model.rs: API функции
//! - view_model.rs: ChatVm, ChatMessage и правила отправки
//! - view.rs: компонент ChatSection

mod model;
mod view;
mod view_model;

pub use view::ChatSection;
pub use view_model::{ChatMessage, ChatVm, Sender};
