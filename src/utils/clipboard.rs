//! Best-effort clipboard delivery for created resource URLs.
//!
//! The clipboard is a capability the page may or may not hold. A permission
//! probe picks one of two notifier implementations at runtime: the real
//! clipboard write with a lightweight acknowledgment, or a blocking message
//! that shows the URL directly so the value is never lost.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};

/// Delivers a created URL to the user. Fire-and-forget: the submission
/// workflow never depends on the outcome.
#[async_trait(?Send)]
pub trait UrlNotifier {
    async fn notify(&self, text: &str);
}

/// Writes the URL through the Web Clipboard API.
pub struct ClipboardNotifier;

/// Shows the URL in a blocking message instead.
pub struct FallbackNotifier;

#[async_trait(?Send)]
impl UrlNotifier for ClipboardNotifier {
    async fn notify(&self, text: &str) {
        match copy_to_clipboard(text).await {
            Ok(()) => show_alert("URL copied to clipboard"),
            Err(_) => FallbackNotifier.notify(text).await,
        }
    }
}

#[async_trait(?Send)]
impl UrlNotifier for FallbackNotifier {
    async fn notify(&self, text: &str) {
        show_alert(text);
    }
}

/// Probe clipboard-write permission and pick a notifier.
///
/// Explicit denial or a failed probe both select the fallback; only a query
/// that resolves to a non-denied state takes the clipboard path.
pub async fn select_notifier() -> Box<dyn UrlNotifier> {
    match query_write_permission().await {
        Ok(web_sys::PermissionState::Denied) | Err(_) => Box::new(FallbackNotifier),
        Ok(_) => Box::new(ClipboardNotifier),
    }
}

/// Deliver `text` through whichever notifier the probe selects.
pub async fn notify_url(text: &str) {
    select_notifier().await.notify(text).await;
}

/// Blocking, user-visible message.
pub fn show_alert(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(text);
    }
}

async fn query_write_permission() -> Result<web_sys::PermissionState, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let permissions = window.navigator().permissions()?;

    let descriptor = js_sys::Object::new();
    js_sys::Reflect::set(
        &descriptor,
        &JsValue::from_str("name"),
        &JsValue::from_str("clipboard-write"),
    )?;

    let status = wasm_bindgen_futures::JsFuture::from(permissions.query(&descriptor)?).await?;
    let status: web_sys::PermissionStatus = status.dyn_into()?;
    Ok(status.state())
}

/// Copy text to the system clipboard through the Web Clipboard API.
async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let navigator = window.navigator();
    let clipboard = navigator.clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
}
