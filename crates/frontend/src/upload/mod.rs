//! Загрузка документа (MVVM Standard)
//!
//! Structure:
//! - validate.rs: проверка файла до обращения к сети
//! - progress.rs: косметическая симуляция прогресса
//! - model.rs: API функции
//! - view_model.rs: UploadVm с RwSignals
//! - view.rs: компонент UploadSection

mod model;
pub mod progress;
pub mod validate;
mod view;
mod view_model;

pub use view::UploadSection;
pub use view_model::{StatusKind, UploadVm};
