//! Invisible-captcha bridge. The captcha widget is loaded by the host page;
//! we reach `grecaptcha.execute` through reflection and await the token
//! promise. Without the script the token degrades to an empty string so the
//! forms keep working in local development.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::consts::RECAPTCHA_SITE_KEY;

fn execute_fn() -> Result<(JsValue, Function), String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let grecaptcha = Reflect::get(&window, &JsValue::from_str("grecaptcha"))
        .map_err(|_| "failed to access grecaptcha".to_string())?;
    if grecaptcha.is_undefined() || grecaptcha.is_null() {
        return Err("captcha unavailable".into());
    }

    let execute = Reflect::get(&grecaptcha, &JsValue::from_str("execute"))
        .map_err(|_| "failed to access grecaptcha.execute".to_string())?;
    if execute.is_function() {
        return Ok((grecaptcha, execute.unchecked_into::<Function>()));
    }

    Err("no execute function available".into())
}

pub async fn token() -> String {
    let (this_obj, execute) = match execute_fn() {
        Ok(pair) => pair,
        Err(_) => return String::new(),
    };
    let value = match execute.call1(&this_obj, &JsValue::from_str(RECAPTCHA_SITE_KEY)) {
        Ok(value) => value,
        Err(_) => return String::new(),
    };
    match JsFuture::from(Promise::from(value)).await {
        Ok(token) => token.as_string().unwrap_or_default(),
        Err(_) => String::new(),
    }
}
