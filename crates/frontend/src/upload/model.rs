//! Загрузка документа - API функции

use crate::shared::api_utils::{api_url, response_text, ApiError};
use contracts::api::{ErrorResponse, UploadResponse};

/// Отправить документ на обработку одним multipart-запросом.
pub async fn upload_document(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(&api_url("upload"), &opts)
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
