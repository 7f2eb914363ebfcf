//! DOM boundary helpers
//!
//! The only place the widgets touch `web_sys` directly. Everything here is a
//! best-effort operation: a missing element or window yields an error for the
//! caller to log, never a panic.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::services::errors::{UiError, UiResult};

#[cfg(target_arch = "wasm32")]
fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

#[cfg(not(target_arch = "wasm32"))]
fn window() -> Option<web_sys::Window> {
    None
}

fn element_by_id<T: JsCast>(id: &str) -> UiResult<T> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<T>().ok())
        .ok_or_else(|| UiError::element_missing(id))
}

/// `window.localStorage`, or `None` when the page has none or access throws
/// (blocked cookies, sandboxed frames).
pub fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Current `window.innerWidth` in CSS pixels
pub fn viewport_width() -> Option<u32> {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
}

pub fn focus_element(id: &str) -> UiResult<()> {
    let element: web_sys::HtmlElement = element_by_id(id)?;
    element.focus().map_err(|_| UiError::element_missing(id))
}

/// Submit a form natively. `HTMLFormElement.submit()` does not fire the
/// `submit` event, so guards are not re-entered.
pub fn submit_form(id: &str) -> UiResult<()> {
    let form: web_sys::HtmlFormElement = element_by_id(id)?;
    form.submit().map_err(|_| UiError::element_missing(id))
}

/// A single `resize` listener on `window`, removed when dropped
pub struct ResizeListener {
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn install(mut on_resize: impl FnMut(u32) + 'static) -> UiResult<Self> {
        let window = window().ok_or_else(|| UiError::element_missing("window"))?;

        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(width) = viewport_width() {
                on_resize(width);
            }
        });

        window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .map_err(|_| UiError::element_missing("window"))?;

        Ok(Self { callback })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
        }
    }
}
