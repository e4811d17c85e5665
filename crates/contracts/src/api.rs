//! DTO трёх endpoint'ов backend'а: status, upload, chat.
//!
//! Имена полей зафиксированы wire-форматом backend'а (snake_case).
//! Неизвестные поля в ответах backend'а игнорируются при десериализации.

use serde::{Deserialize, Serialize};

/// Ответ `GET /api/rag/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub document_loaded: bool,
}

/// Успешный ответ `POST /api/rag/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Количество фрагментов, на которые backend разбил документ.
    pub chunks_count: usize,
}

/// Тело запроса `POST /api/rag/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Успешный ответ `POST /api/rag/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// Тело ответа upload и chat при не-2xx статусе.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_response_from_backend_json() {
        let resp: StatusResponse =
            serde_json::from_str(r#"{"document_loaded": true, "models_initialized": false}"#)
                .unwrap();
        assert!(resp.document_loaded);

        let resp: StatusResponse =
            serde_json::from_str(r#"{"document_loaded": false}"#).unwrap();
        assert!(!resp.document_loaded);
    }

    #[test]
    fn test_upload_response_ignores_extra_fields() {
        // Backend кладёт в ответ ещё и message; клиенту нужен только chunks_count.
        let resp: UploadResponse = serde_json::from_str(
            r#"{"message": "Документ успешно загружен и обработан", "chunks_count": 42}"#,
        )
        .unwrap();
        assert_eq!(resp.chunks_count, 42);
    }

    #[test]
    fn test_chat_request_wire_format() {
        let body = serde_json::to_string(&ChatRequest {
            question: "What is the summary?".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"question":"What is the summary?"}"#);
    }

    #[test]
    fn test_chat_response_ignores_sources_count() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"answer": "X", "sources_count": 5}"#).unwrap();
        assert_eq!(resp.answer, "X");
    }

    #[test]
    fn test_error_response() {
        let resp: ErrorResponse =
            serde_json::from_str(r#"{"error": "model unavailable"}"#).unwrap();
        assert_eq!(resp.error, "model unavailable");
    }
}
