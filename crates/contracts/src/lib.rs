//! Контракты обмена между frontend и backend RAG-сервиса.

pub mod api;
