use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

use crate::consts::BASE_URL;

/// Thin wrapper over a fetch `Response`: status and header lookup are
/// synchronous, the body is consumed asynchronously as text or JSON.
pub struct HttpResponse {
    inner: Response,
}

impl HttpResponse {
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.inner.headers().get(name).ok().flatten()
    }

    pub async fn text(self) -> Result<String, String> {
        let promise = self.inner.text().map_err(|e| format!("read body: {e:?}"))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| format!("read body: {e:?}"))?;
        Ok(value.as_string().unwrap_or_default())
    }

    pub async fn json<T>(self) -> Result<T, String>
    where
        T: DeserializeOwned,
    {
        let promise = self.inner.json().map_err(|e| format!("decode body: {e:?}"))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| format!("decode body: {e:?}"))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }
}

async fn request(method: &str, path: &str, body: Option<String>) -> Result<HttpResponse, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;

    let headers = Headers::new().map_err(|e| format!("headers: {e:?}"))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| format!("headers: {e:?}"))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("headers: {e:?}"))?;

    let init = RequestInit::new();
    init.set_method(method);
    init.set_headers(&headers);
    // Cookie-based session.
    init.set_credentials(RequestCredentials::Include);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{BASE_URL}{path}");
    let request =
        Request::new_with_str_and_init(&url, &init).map_err(|e| format!("request: {e:?}"))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch failed: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    Ok(HttpResponse { inner: response })
}

pub async fn get(path: &str) -> Result<HttpResponse, String> {
    request("GET", path, None).await
}

pub async fn post_json<B>(path: &str, body: &B) -> Result<HttpResponse, String>
where
    B: Serialize,
{
    let body = serde_json::to_string(body).map_err(|e| e.to_string())?;
    request("POST", path, Some(body)).await
}
