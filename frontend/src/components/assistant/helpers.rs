//! Utility functions for the assistant component.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Visual flavor of a toast notice: success after a clean query, warning for
/// a soft query error in a 2xx body, error for validation and transport
/// failures.
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

/// Shows a temporary toast notification at the bottom of the viewport.
/// The element removes itself after three seconds.
pub fn show_toast(message: &str, kind: ToastKind) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                let background = match kind {
                    ToastKind::Success => "rgba(21, 87, 36, 0.9)",
                    ToastKind::Warning => "rgba(146, 98, 7, 0.9)",
                    ToastKind::Error => "rgba(153, 27, 27, 0.9)",
                };
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
