//! Загрузка документа - View Model

use leptos::prelude::*;

/// Вид статусной строки под областью загрузки.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Copy)]
pub struct UploadVm {
    /// Статусная строка: текст и вид. `None` — скрыта.
    pub status: RwSignal<Option<(String, StatusKind)>>,
    /// Отображаемый процент загрузки. `None` — индикатор скрыт.
    pub progress: RwSignal<Option<f64>>,
    /// Над областью загрузки висит перетаскиваемый файл.
    pub drag_over: RwSignal<bool>,
}

impl UploadVm {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(None),
            progress: RwSignal::new(None),
            drag_over: RwSignal::new(false),
        }
    }
}
