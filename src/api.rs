use guestbook_core::{
    GifFrame, GifRequest, HugRequest, Locale, MessageRequest, PageView, SubmissionResponse,
};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

async fn send_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<T, JsValue> {
    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    let window = web_sys::window().ok_or("window not available")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: web_sys::Response = resp_value.dyn_into()?;

    if !resp.ok() {
        let text = JsFuture::from(resp.text()?).await?;
        return Err(JsValue::from_str(&format!(
            "HTTP {}: {}",
            resp.status(),
            text.as_string().unwrap_or_default()
        )));
    }

    let json = JsFuture::from(resp.json()?).await?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}

fn to_body<B: Serialize>(body: &B) -> Result<Option<String>, JsValue> {
    serde_json::to_string(body)
        .map(Some)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Load the page. Without a session id the backend starts a new session and
/// returns its id in the view.
pub async fn fetch_page(session_id: Option<String>, locale: Locale) -> Result<PageView, JsValue> {
    let url = match session_id {
        Some(id) => format!("/api/page?session_id={}&locale={}", id, locale.code()),
        None => format!("/api/page?locale={}", locale.code()),
    };
    send_json("GET", &url, None).await
}

pub async fn submit_hug(request: &HugRequest) -> Result<SubmissionResponse, JsValue> {
    send_json("POST", "/api/hugs", to_body(request)?).await
}

pub async fn submit_message(request: &MessageRequest) -> Result<SubmissionResponse, JsValue> {
    send_json("POST", "/api/messages", to_body(request)?).await
}

pub async fn next_gif(request: &GifRequest) -> Result<Option<GifFrame>, JsValue> {
    send_json("POST", "/api/gif/next", to_body(request)?).await
}
