//! Чат по документу - API функции

use crate::shared::api_utils::{api_url, response_text, ApiError};
use contracts::api::{ChatRequest, ChatResponse, ErrorResponse};

/// Отправить вопрос по загруженному документу.
pub async fn ask(question: &str) -> Result<ChatResponse, ApiError> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let body = serde_json::to_string(&ChatRequest {
        question: question.to_string(),
    })
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&api_url("chat"), &opts)
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

    let status = resp.status();
    let text = response_text(&resp).await?;

    if !resp.ok() {
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .ok()
            .map(|e| e.error);
        return Err(ApiError::Backend { status, message });
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Transport(format!("{e}")))
}
