//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs plus the error taxonomy
//! shared by the upload and chat calls.

use std::fmt;

/// Base path for API requests.
///
/// The client is served by the backend itself, so all requests are
/// same-origin and relative.
pub fn api_base() -> &'static str {
    "/api/rag"
}

/// Build a full API URL from an endpoint name.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("upload"), "/api/rag/upload");
/// ```
pub fn api_url(endpoint: &str) -> String {
    format!("{}/{}", api_base(), endpoint)
}

/// Текст для пользователя, когда запрос не дошёл до backend'а.
pub const NETWORK_ERROR_MESSAGE: &str = "Ошибка сети. Проверьте подключение к интернету.";

/// Ошибка обращения к backend'у.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Backend ответил не-2xx статусом; `message` — текст из тела `{"error": ...}`,
    /// если его удалось разобрать.
    Backend {
        status: u16,
        message: Option<String>,
    },
    /// Запрос не завершился: сеть, CORS, разорванное соединение.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Backend {
                message: Some(message),
                ..
            } => write!(f, "{}", message),
            ApiError::Backend { status, .. } => write!(f, "HTTP {}", status),
            ApiError::Transport(details) => write!(f, "{}", details),
        }
    }
}

/// Прочитать тело ответа как текст.
pub async fn response_text(resp: &web_sys::Response) -> Result<String, ApiError> {
    let text = wasm_bindgen_futures::JsFuture::from(
        resp.text()
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    text.as_string()
        .ok_or_else(|| ApiError::Transport("bad text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("status"), "/api/rag/status");
        assert_eq!(api_url("upload"), "/api/rag/upload");
        assert_eq!(api_url("chat"), "/api/rag/chat");
    }

    #[test]
    fn test_backend_error_display_prefers_message() {
        let err = ApiError::Backend {
            status: 500,
            message: Some("model unavailable".to_string()),
        };
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[test]
    fn test_backend_error_display_falls_back_to_status() {
        let err = ApiError::Backend {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_transport_error_display() {
        let err = ApiError::Transport("fetch failed".to_string());
        assert_eq!(err.to_string(), "fetch failed");
    }
}
