//! Chat Client - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::domain::a001_chat::aggregate::{SendOutcome, FILES_FIELD, MESSAGE_FIELD};
use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData};

/// Transport failure of a chat request. `Display` is the bare message that
/// follows `网络错误: ` in the log.
#[derive(Debug, thiserror::Error)]
pub enum ChatTransportError {
    #[error("{0}")]
    Http(gloo_net::Error),
    #[error("{0}")]
    Js(String),
}

impl From<gloo_net::Error> for ChatTransportError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            // Only the JS `message`, without the `TypeError: ` name prefix.
            gloo_net::Error::JsError(js) => ChatTransportError::Js(js.message),
            other => ChatTransportError::Http(other),
        }
    }
}

impl From<JsValue> for ChatTransportError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(error) => String::from(error.message()),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        };
        ChatTransportError::Js(message)
    }
}

/// Отправить сообщение с вложениями
///
/// Exactly one multipart POST; no retry, timeout or cancellation. Any
/// settled response is interpreted, whatever its status.
pub async fn post_chat(
    endpoint: &str,
    text: &str,
    files: &[File],
) -> Result<SendOutcome, ChatTransportError> {
    let form_data = FormData::new()?;
    form_data.append_with_str(MESSAGE_FIELD, text)?;
    for file in files {
        form_data.append_with_blob(FILES_FIELD, file)?;
    }

    let response = Request::post(&api_url(endpoint))
        .body(form_data)?
        .send()
        .await?;

    let ok = response.ok();
    let status = response.status();
    let body = response.text().await?;
    log::debug!("chat response: HTTP {} ({} bytes)", status, body.len());

    Ok(SendOutcome::from_response(ok, &body))
}

/// Загрузить текст выходного файла: статус и тело ответа
pub async fn fetch_output_text(href: &str) -> Result<(u16, String), ChatTransportError> {
    let response = Request::get(&api_url(href)).send().await?;
    let status = response.status();
    Ok((status, response.text().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_chat::labels;

    #[test]
    fn test_js_error_shows_bare_message() {
        let error = ChatTransportError::Js("Failed to fetch".to_string());
        assert_eq!(error.to_string(), "Failed to fetch");
        assert_eq!(
            labels::network_error_message(&error.to_string()),
            "网络错误: Failed to fetch"
        );
    }

    #[test]
    fn test_non_js_gloo_error_keeps_its_text() {
        let error = ChatTransportError::from(gloo_net::Error::GlooError("bad body".to_string()));
        assert!(matches!(error, ChatTransportError::Http(_)));
        assert!(error.to_string().contains("bad body"));
    }
}
